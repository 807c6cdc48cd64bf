use anyhow::Result;
use clap::{Args, Parser};

use crate::constants::{GITHUB_API_BASE_URL, LATEST, NO_TOKEN};
use crate::ops::setup_fpm_resolve;

/// Inputs that decide which fpm release is used.
#[derive(Debug, Args)]
pub struct VersionArgs {
    /// Token for the GitHub API, only needed when the version is 'latest'
    #[clap(
        long,
        env = "INPUT_GITHUB-TOKEN",
        default_value = NO_TOKEN,
        hide_env_values = true
    )]
    pub github_token: String,

    /// Release tag to install, or 'latest'
    #[clap(long, env = "INPUT_FPM-VERSION", default_value = LATEST)]
    pub fpm_version: String,

    /// Base URL of the GitHub API
    #[clap(long, env = "GITHUB_API_URL", default_value = GITHUB_API_BASE_URL)]
    pub github_api_url: String,
}

#[derive(Debug, Parser)]
pub struct ResolveCommand {
    #[clap(flatten)]
    pub version: VersionArgs,
}

pub fn exec(command: ResolveCommand) -> Result<()> {
    setup_fpm_resolve::resolve(command)?;

    Ok(())
}
