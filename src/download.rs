use anyhow::Result;
use indicatif::{FormattedDuration, HumanBytes, HumanDuration, ProgressBar, ProgressStyle};
use std::env;
use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use ureq::Response;

use crate::constants::{COMPILER_SUFFIXES, FPM, RELEASES_DOWNLOAD, USER_AGENT};
use crate::errors::{FetchError, SetupError};
use crate::platform::Platform;

/// Builds the release asset filename:
///
/// `fpm-<version>-<os>-<arch>[-<compiler>][.exe]`
///
/// A single leading `v` is dropped from the version and `.exe` is only added on Windows.
pub fn fpm_filename(version: &str, platform: Platform, compiler: Option<&str>) -> String {
    let version = version.strip_prefix('v').unwrap_or(version);
    let mut filename = format!("{FPM}-{version}-{}", platform.asset_token());

    if let Some(compiler) = compiler.filter(|c| !c.is_empty()) {
        filename.push('-');
        filename.push_str(compiler);
    }

    filename.push_str(platform.exe_suffix());
    filename
}

#[derive(Debug, PartialEq, Eq)]
pub struct DownloadCfg {
    pub version: String,
    pub platform: Platform,
    fetch_url: String,
}

impl DownloadCfg {
    pub fn new(repository: &str, version: &str, platform: Platform) -> Self {
        let fetch_url = format!(
            "{}/{RELEASES_DOWNLOAD}/{version}/",
            repository.trim_end_matches('/')
        );
        Self {
            version: version.to_string(),
            platform,
            fetch_url,
        }
    }

    /// `<repository>/releases/download/<version>/`
    pub fn fetch_url(&self) -> &str {
        &self.fetch_url
    }

    pub fn filename(&self, compiler: Option<&str>) -> String {
        fpm_filename(&self.version, self.platform, compiler)
    }

    pub fn asset_url(&self, filename: &str) -> String {
        format!("{}{}", self.fetch_url, filename)
    }
}

/// Transport used by [`download_fpm`] to pull a single asset to disk.
pub trait Fetch {
    fn fetch(&self, url: &str, dst: &Path) -> Result<(), FetchError>;
}

pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        Ok(Self {
            agent: build_agent()?,
        })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str, dst: &Path) -> Result<(), FetchError> {
        download_file(&self.agent, url, dst)
    }
}

/// Downloads the fpm asset for `cfg` into `dst_dir`, trying the plain filename first and
/// then each compiler-suffixed variant in order. Returns the path of the downloaded file.
pub fn download_fpm(
    cfg: &DownloadCfg,
    fetcher: &impl Fetch,
    dst_dir: &Path,
) -> Result<PathBuf, SetupError> {
    let filename = cfg.filename(None);
    info!("Fetching fpm from {}", cfg.asset_url(&filename));

    let path = dst_dir.join(&filename);
    match fetcher.fetch(&cfg.asset_url(&filename), &path) {
        Ok(()) => return Ok(path),
        Err(FetchError::Local(e)) => return Err(SetupError::Install(e)),
        Err(FetchError::Unavailable(e)) => debug!("Failed to download {}: {}", filename, e),
    }

    for compiler in COMPILER_SUFFIXES {
        let filename = cfg.filename(Some(compiler));
        info!("Trying to fetch compiler-built fpm: {}", filename);

        let path = dst_dir.join(&filename);
        match fetcher.fetch(&cfg.asset_url(&filename), &path) {
            Ok(()) => return Ok(path),
            Err(FetchError::Local(e)) => return Err(SetupError::Install(e)),
            Err(FetchError::Unavailable(e)) => {
                info!("  -> Failed to download {}", filename);
                debug!("{}", e);
            }
        }
    }

    Err(SetupError::DownloadExhausted {
        url: cfg.fetch_url().to_string(),
    })
}

pub fn build_agent() -> Result<ureq::Agent> {
    let proxy_result = env::var("http_proxy")
        .or(env::var("HTTP_PROXY"))
        .or(env::var("https_proxy"))
        .or(env::var("HTTPS_PROXY"))
        .or(env::var("all_proxy"))
        .or(env::var("ALL_PROXY"));

    build_agent_with_proxy(proxy_result.ok().as_deref())
}

fn build_agent_with_proxy(proxy: Option<&str>) -> Result<ureq::Agent> {
    let agent_builder = ureq::builder().user_agent(USER_AGENT);

    if let Some(proxy) = proxy {
        return match ureq::Proxy::new(proxy) {
            Ok(proxy) => Ok(agent_builder.proxy(proxy).build()),
            Err(err) => {
                error!("Failed to build proxy with http_proxy={}, {}", proxy, err);
                Err(err.into())
            }
        };
    }

    Ok(agent_builder.build())
}

/// Single attempt; the partially written file is removed on failure.
pub fn download_file(handle: &ureq::Agent, url: &str, path: &Path) -> Result<(), FetchError> {
    let response = match handle.get(url).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(code, _)) => {
            return Err(FetchError::Unavailable(format!(
                "{url} returned status {code}"
            )))
        }
        Err(e) => return Err(FetchError::Unavailable(format!("Unexpected error: {e}"))),
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| FetchError::Local(format!("Failed to create {}: {}", path.display(), e)))?;

    if let Err(e) = write_response_with_progress_bar(response, &mut file, path.display().to_string())
    {
        drop(file);
        remove_partial_download(path);
        return Err(e);
    }

    Ok(())
}

/// Cleanup is best effort: a failure here must not hide the error that caused it.
fn remove_partial_download(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        warn!("Failed to remove partial download {}: {}", path.display(), e);
    }
}

/// write Ok(Response) to provided writer with progress bar displaying writing status
fn write_response_with_progress_bar<W: Write>(
    response: Response,
    writer: &mut W,
    target: String,
) -> Result<(), FetchError> {
    let total_size = response
        .header("Content-Length")
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0);
    let mut downloaded_size = 0;
    let mut buffer = [0; 8192];
    let progress_bar = ProgressBar::new(total_size);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template(
                "[{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta}) - {msg:.green}",
            )
            .map_err(|e| FetchError::Local(format!("Invalid progress bar template: {e}")))?
            .progress_chars("##-"),
    );
    let mut reader = progress_bar.wrap_read(response.into_reader());

    loop {
        let bytes_read = reader.read(&mut buffer).map_err(|e| {
            log_progress_bar(&progress_bar);
            FetchError::Unavailable(format!("Download interrupted: {e}"))
        })?;
        if bytes_read == 0 {
            break;
        }
        let Some(chunk) = buffer.get(..bytes_read) else {
            return Err(FetchError::Unavailable(
                "read past the end of the download buffer".to_string(),
            ));
        };
        if let Err(e) = writer.write_all(chunk) {
            log_progress_bar(&progress_bar);
            if target.is_empty() {
                return Err(FetchError::Local(format!(
                    "Something went wrong writing data: {e}"
                )));
            }
            return Err(FetchError::Local(format!(
                "Something went wrong writing data to {target}: {e}"
            )));
        };
        downloaded_size += bytes_read as u64;
        progress_bar.set_position(downloaded_size);
    }
    if total_size == 0 {
        // Content-Length is not always present (chunked or redirected responses).
        progress_bar.set_length(downloaded_size);
    }
    progress_bar.finish_with_message("Download complete");
    log_progress_bar(&progress_bar);
    Ok(())
}

fn log_progress_bar(progress_bar: &ProgressBar) {
    let length = progress_bar
        .length()
        .unwrap_or(progress_bar.position())
        .max(1);
    debug!(
        "[{}] [{}] {}/{} ({}) - {}",
        FormattedDuration(progress_bar.elapsed()),
        "#".repeat((progress_bar.position().min(length) * 40 / length) as usize),
        HumanBytes(progress_bar.position()),
        HumanBytes(progress_bar.length().unwrap_or(progress_bar.position())),
        HumanDuration(progress_bar.eta()),
        progress_bar.message(),
    );
}
