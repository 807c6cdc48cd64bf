use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tempfile::Builder;
use tracing::info;

use crate::{
    commands::install::InstallCommand,
    download::{download_fpm, DownloadCfg, Fetch, HttpFetcher},
    fmt::{bold, println_warn},
    install::{install_fpm, InstalledFpm},
    path::{ensure_dir_exists, setup_fpm_dir, PathRegistry},
    platform::Platform,
    release::{github_token, resolve_version},
};

pub fn install(command: InstallCommand) -> Result<()> {
    let fetcher = HttpFetcher::new()?;
    let installed = setup_fpm(&command, &fetcher)?;

    if !PathRegistry::from_env().add(&installed.dir)? {
        println_warn(format!(
            "GITHUB_PATH is not set, add {} to your PATH to use fpm in later steps",
            installed.dir.display()
        ));
    }
    info!("fpm added to path at {}", bold(&installed.dir.display().to_string()));

    Ok(())
}

/// Resolves, downloads and installs fpm, returning where it landed. Leaves PATH alone.
pub fn setup_fpm(command: &InstallCommand, fetcher: &impl Fetch) -> Result<InstalledFpm> {
    let InstallCommand {
        version,
        fpm_repository,
        platform,
        download_dir,
    } = command;

    info!("fpm-version: {}", version.fpm_version);
    info!("fpm-repository: {}", fpm_repository);

    let platform = match platform {
        Some(platform) => Platform::from_str(platform)?,
        None => Platform::from_host()?,
    };

    let fpm_version = resolve_version(
        &version.fpm_version,
        github_token(&version.github_token),
        &version.github_api_url,
    )?;
    if fpm_version != version.fpm_version {
        info!("Latest fpm release is {}", fpm_version);
    }

    info!("This platform is {}", platform);

    let dst_dir = fresh_download_dir(download_dir.as_deref())?;
    let cfg = DownloadCfg::new(fpm_repository, &fpm_version, platform);
    let asset = download_fpm(&cfg, fetcher, &dst_dir)?;
    info!("Downloaded {}", asset.display());

    Ok(install_fpm(&asset, platform)?)
}

/// A new, uniquely named directory under `root` (or the default work dir). It is kept after
/// the run because it ends up on PATH.
fn fresh_download_dir(root: Option<&Path>) -> Result<PathBuf> {
    let root = root.map_or_else(setup_fpm_dir, Path::to_path_buf);
    ensure_dir_exists(&root)?;
    let dir = Builder::new()
        .prefix("fpm-")
        .tempdir_in(&root)
        .with_context(|| format!("Failed to create a download directory in {}", root.display()))?;
    Ok(dir.keep())
}
