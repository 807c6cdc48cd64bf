use std::process::ExitCode;

use setup_fpm::fmt::set_failed;
use setup_fpm::logging::{init_tracing, log_command, log_environment};
use setup_fpm::setup_fpm_cli::setup_fpm_cli;

fn main() -> ExitCode {
    let _guard = init_tracing();
    log_command();
    log_environment();

    match setup_fpm_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            set_failed(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
