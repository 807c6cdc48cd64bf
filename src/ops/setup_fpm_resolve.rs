use anyhow::Result;
use tracing::info;

use crate::commands::resolve::ResolveCommand;
use crate::release::{github_token, resolve_version};

pub fn resolve(command: ResolveCommand) -> Result<()> {
    let ResolveCommand { version } = command;

    let resolved = resolve_version(
        &version.fpm_version,
        github_token(&version.github_token),
        &version.github_api_url,
    )?;
    info!("{}", resolved);

    Ok(())
}
