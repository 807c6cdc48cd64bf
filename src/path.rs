use anyhow::{Context, Result};
use std::env;
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::SETUP_FPM_DIR;

pub const GITHUB_PATH: &str = "GITHUB_PATH";
pub const RUNNER_TEMP: &str = "RUNNER_TEMP";

/// Root for downloads and the log file: `$RUNNER_TEMP`, else the user cache dir, else the
/// system temp dir.
pub fn setup_fpm_dir() -> PathBuf {
    match env::var_os(RUNNER_TEMP) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir).join(SETUP_FPM_DIR),
        _ => dirs::cache_dir()
            .unwrap_or_else(env::temp_dir)
            .join(SETUP_FPM_DIR),
    }
}

pub fn setup_fpm_log_dir() -> PathBuf {
    setup_fpm_dir().join("logs")
}

pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.is_dir() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
    }
    Ok(())
}

/// Makes a directory visible on PATH for the rest of the job.
#[derive(Debug, Default)]
pub struct PathRegistry {
    github_path: Option<PathBuf>,
}

impl PathRegistry {
    pub fn new(github_path: Option<PathBuf>) -> Self {
        Self { github_path }
    }

    pub fn from_env() -> Self {
        Self::new(
            env::var_os(GITHUB_PATH)
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        )
    }

    /// Appends `dir` to the `GITHUB_PATH` file read by later workflow steps and prepends it
    /// to this process' PATH. Returns whether the directory was persisted for later steps.
    pub fn add(&self, dir: &Path) -> Result<bool> {
        let persisted = match &self.github_path {
            Some(github_path) => {
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(github_path)
                    .with_context(|| format!("Failed to open {}", github_path.display()))?;
                writeln!(file, "{}", dir.display())
                    .with_context(|| format!("Failed to write {}", github_path.display()))?;
                debug!("Appended {} to {}", dir.display(), github_path.display());
                true
            }
            None => {
                debug!("{} is not set", GITHUB_PATH);
                false
            }
        };

        let path = prepend_path(dir, env::var_os("PATH"))?;
        env::set_var("PATH", path);

        Ok(persisted)
    }
}

fn prepend_path(dir: &Path, current: Option<OsString>) -> Result<OsString> {
    let mut paths = vec![dir.to_path_buf()];
    if let Some(current) = current {
        paths.extend(env::split_paths(&current));
    }
    env::join_paths(paths).with_context(|| format!("Cannot add {} to PATH", dir.display()))
}
