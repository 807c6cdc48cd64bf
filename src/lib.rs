pub mod commands;
pub mod constants;
pub mod download;
pub mod errors;
pub mod fmt;
pub mod install;
pub mod logging;
pub mod ops;
pub mod path;
pub mod platform;
pub mod release;
pub mod setup_fpm_cli;
