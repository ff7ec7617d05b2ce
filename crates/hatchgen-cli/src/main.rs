//! hatchgen - hatch a rectangle with parallel lines
//!
//! Usage:
//!   hatchgen --angle 45 --step 1        Hatch the demo plate, print the lines
//!   hatchgen hatch [options]            Same, explicit subcommand
//!   hatchgen job <job.yaml> [options]   Run a job file
//!   hatchgen help                       Show usage

use std::env;

mod cli;
mod logger;

use cli::{cmd_hatch, cmd_job};

fn main() {
    let args: Vec<String> = env::args().collect();
    logger::init(logger::level_from_args(args.get(1..).unwrap_or(&[])));

    let result = match args.get(1).map(String::as_str) {
        Some("hatch") => cmd_hatch(&args[2..]),
        Some("job") => cmd_job(&args[2..]),
        Some("help") => {
            cli::hatch::print_usage();
            eprintln!();
            eprintln!("Run 'hatchgen job --help' for job files.");
            Ok(())
        }
        _ => cmd_hatch(&args[1..]),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
