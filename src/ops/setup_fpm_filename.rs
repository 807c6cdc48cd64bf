use anyhow::Result;
use std::str::FromStr;
use tracing::info;

use crate::commands::filename::FilenameCommand;
use crate::download::fpm_filename;
use crate::platform::Platform;

pub fn filename(command: FilenameCommand) -> Result<()> {
    let FilenameCommand {
        version,
        platform,
        compiler,
    } = command;

    let platform = match platform {
        Some(platform) => Platform::from_str(&platform)?,
        None => Platform::from_host()?,
    };

    info!("{}", fpm_filename(&version, platform, compiler.as_deref()));

    Ok(())
}
