use anyhow::Result;
use clap::Parser;

use crate::ops::setup_fpm_filename;

#[derive(Debug, Parser)]
pub struct FilenameCommand {
    /// Release tag, e.g. v0.10.0
    pub version: String,

    /// Target platform (linux, macos, windows). Defaults to the host.
    #[clap(long)]
    pub platform: Option<String>,

    /// Compiler suffix, e.g. gcc-12
    #[clap(long)]
    pub compiler: Option<String>,
}

pub fn exec(command: FilenameCommand) -> Result<()> {
    setup_fpm_filename::filename(command)?;

    Ok(())
}
