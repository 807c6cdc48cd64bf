use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::commands::resolve::VersionArgs;
use crate::constants::DEFAULT_FPM_REPOSITORY;
use crate::ops::setup_fpm_install;

#[derive(Debug, Parser)]
pub struct InstallCommand {
    #[clap(flatten)]
    pub version: VersionArgs,

    /// Repository whose releases hold the fpm binaries
    #[clap(long, env = "INPUT_FPM-REPOSITORY", default_value = DEFAULT_FPM_REPOSITORY)]
    pub fpm_repository: String,

    /// Target platform (linux, macos, windows). Defaults to the host.
    #[clap(long, env = "SETUP_FPM_PLATFORM")]
    pub platform: Option<String>,

    /// Directory to download into. Defaults to $RUNNER_TEMP/setup-fpm.
    #[clap(long)]
    pub download_dir: Option<PathBuf>,
}

pub fn exec(command: InstallCommand) -> Result<()> {
    setup_fpm_install::install(command)?;

    Ok(())
}
