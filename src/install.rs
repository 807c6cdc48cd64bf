use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::errors::SetupError;
use crate::platform::Platform;

/// A downloaded fpm binary under its canonical name. `dir` still has to be put on PATH.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledFpm {
    pub bin: PathBuf,
    pub dir: PathBuf,
}

/// Marks the asset executable (not on Windows) and renames it to `fpm`/`fpm.exe` in place.
pub fn install_fpm(asset: &Path, platform: Platform) -> Result<InstalledFpm, SetupError> {
    let dir = asset
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            SetupError::Install(format!("{} has no parent directory", asset.display()))
        })?;

    if !platform.is_windows() {
        set_user_executable(asset)?;
    }

    let bin = dir.join(platform.bin_name());
    info!("Moving {} to {}", asset.display(), bin.display());
    fs::rename(asset, &bin).map_err(|e| {
        SetupError::Install(format!(
            "Failed moving {} to {}: {}",
            asset.display(),
            bin.display(),
            e
        ))
    })?;

    Ok(InstalledFpm { bin, dir })
}

#[cfg(unix)]
fn set_user_executable(path: &Path) -> Result<(), SetupError> {
    use std::os::unix::fs::PermissionsExt;

    let err = |e: std::io::Error| {
        SetupError::Install(format!(
            "Failed to make {} executable: {}",
            path.display(),
            e
        ))
    };

    let mut perms = fs::metadata(path).map_err(err)?.permissions();
    perms.set_mode(perms.mode() | 0o100);
    fs::set_permissions(path, perms).map_err(err)?;
    debug!("Set u+x on {}", path.display());
    Ok(())
}

#[cfg(not(unix))]
fn set_user_executable(path: &Path) -> Result<(), SetupError> {
    debug!("Skipping u+x on {}, not a unix host", path.display());
    Ok(())
}
