use listnav_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Fall back to stderr if the state dir is unwritable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("listnav error: {:#}", err);
        std::process::exit(1);
    }
}
