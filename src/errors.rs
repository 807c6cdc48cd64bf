use thiserror::Error;

/// Failures that end a setup run. Each kind is reported the same way, only the message differs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    /// Missing credential or an unrecognized platform.
    #[error("{0}")]
    Configuration(String),
    /// The latest-release query failed (auth, network or malformed response).
    #[error("Error while querying the latest fpm release version - please check your github token. ({0})")]
    Resolution(String),
    /// The base asset and every compiler-suffixed variant failed to download.
    #[error("Error while trying to fetch fpm - please check that a version exists at {url}")]
    DownloadExhausted { url: String },
    #[error("{0}")]
    Install(String),
}

/// Outcome of a single failed asset fetch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The remote did not deliver the asset (missing release, HTTP error, broken transfer).
    #[error("{0}")]
    Unavailable(String),
    /// The asset could not be written locally. Trying other filenames will not help.
    #[error("{0}")]
    Local(String),
}
