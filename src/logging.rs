use crate::constants::LOG_FILE_NAME;
use crate::path::{setup_fpm_log_dir, GITHUB_PATH, RUNNER_TEMP};
use std::env;
use tracing::{debug, level_filters::LevelFilter};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Filter for the log file, e.g. `SETUP_FPM_LOG=trace`.
pub const SETUP_FPM_LOG: &str = "SETUP_FPM_LOG";

const GITHUB_TOKEN_FLAG: &str = "--github-token";
const REDACTED: &str = "***";

pub fn log_command() {
    debug!("Command: {}", redact_args(env::args()).join(" "));
}

/// Replaces the value given to `--github-token`, in either the `--github-token <value>` or
/// `--github-token=<value>` form.
pub fn redact_args<I: IntoIterator<Item = String>>(args: I) -> Vec<String> {
    let mut redact_next = false;
    args.into_iter()
        .map(|arg| {
            if redact_next {
                redact_next = false;
                return REDACTED.to_string();
            }
            if arg == GITHUB_TOKEN_FLAG {
                redact_next = true;
                return arg;
            }
            match arg.strip_prefix(GITHUB_TOKEN_FLAG) {
                Some(value) if value.starts_with('=') => format!("{GITHUB_TOKEN_FLAG}={REDACTED}"),
                _ => arg,
            }
        })
        .collect()
}

pub fn log_environment() {
    for var in [GITHUB_PATH, RUNNER_TEMP, "RUNNER_OS"] {
        match env::var_os(var) {
            Some(val) => debug!("{}: {}", var, val.to_string_lossy()),
            None => debug!("{} is not set", var),
        }
    }
}

/// Stdout gets the human-readable step log; the log file gets everything as JSON lines.
pub fn init_tracing() -> WorkerGuard {
    let file_appender = tracing_appender::rolling::never(setup_fpm_log_dir(), LOG_FILE_NAME);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
    let file_filter =
        EnvFilter::try_from_env(SETUP_FPM_LOG).unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::Registry::default()
        .with(
            tracing_subscriber::fmt::Layer::default()
                .json()
                .with_writer(file_writer)
                .log_internal_errors(false)
                .with_target(false)
                .with_filter(file_filter),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(std::io::stdout)
                .without_time()
                .with_level(false)
                .with_target(false)
                .with_filter(stdout_level()),
        )
        .init();

    guard
}

fn stdout_level() -> LevelFilter {
    if runner_debug(env::var("RUNNER_DEBUG").ok().as_deref()) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    }
}

/// The runner sets `RUNNER_DEBUG=1` when step debug logging is enabled.
fn runner_debug(value: Option<&str>) -> bool {
    value == Some("1")
}
