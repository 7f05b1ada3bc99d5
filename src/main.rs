use clap::Parser;
use name_surfer::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    match commands::run(args) {
        Ok(_stats) => {
            // Success - results have already been written by the command
            process::exit(0);
        }
        Err(error) => {
            // A missing dataset or a failed query ends the process with an error code
            eprintln!("Error: {:#}", error);
            if matches!(error, name_surfer::Error::DatasetNotFound { .. }) {
                show_dataset_hint();
            }
            process::exit(1);
        }
    }
}

/// Explain where the dataset is looked for when it cannot be found
fn show_dataset_hint() {
    eprintln!();
    eprintln!("Name Surfer needs a dataset with one name per line:");
    eprintln!("    <name> <rank_1900> <rank_1910> ... <rank_2000>");
    eprintln!();
    eprintln!("It is looked for in this order:");
    eprintln!("    1. the path given with --data <PATH>");
    eprintln!(
        "    2. {} in the current directory",
        name_surfer::constants::DEFAULT_DATA_FILE
    );
    if let Some(path) = name_surfer::config::user_data_file() {
        eprintln!("    3. {}", path.display());
    }
}
