//! Seeds the `air_bnb_database.db` store and prints every user.
//!
//! # Responsibility
//! - Run the seed-and-report sequence against the fixed store path.
//! - Map the outcome to the process exit status.
//!
//! Takes no arguments and reads no environment variables.

use airbnb_core::{init_logging, seed_and_report, AppConfig};
use log::error;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = AppConfig::default();

    // Logging is diagnostic only; a broken log directory must not block the run.
    match config.resolved_log_dir() {
        Ok(log_dir) => {
            if let Err(err) = init_logging(config.log_level, &log_dir) {
                eprintln!("warning: logging disabled: {err}");
            }
        }
        Err(err) => eprintln!("warning: logging disabled: {err}"),
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match seed_and_report(&config, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_exit module=cli status=error exit_code=1");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
