use clap::Parser;
use roster_converter::cli::args::{Args, parse_failure_exit_code};
use roster_converter::cli::commands;
use roster_converter::constants::exit_codes;
use std::process;

fn main() {
    // Parse command line arguments; usage errors exit as configuration errors
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            let code = parse_failure_exit_code(&error);
            let _ = error.print();
            process::exit(code);
        }
    };

    match commands::run(args) {
        Ok(_report) => {
            // Success - summary has already been reported by the command
            process::exit(exit_codes::SUCCESS);
        }
        Err(error) => {
            // Fatal error - print to stderr and exit with the error's code
            eprintln!("Error: {:#}", error);
            process::exit(error.exit_code());
        }
    }
}
