use std::env;
use std::process;

use donation_medians_engine::run;
use log::info;

fn main() {
    // Collect command-line arguments - expecting the input feed and the two report paths
    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!(
            "Usage: {} <itcont.txt> <medianvals_by_zip.txt> <medianvals_by_date.txt>",
            args[0]
        );
        process::exit(1);
    }
    // Initialize logger (respect RUST_LOG env var if set)
    env_logger::init();

    info!("starting donation medians engine with file: {}", args[1]);

    if let Err(e) = run(&args[1], &args[2], &args[3]) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
