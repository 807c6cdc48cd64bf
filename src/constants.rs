pub const FPM: &str = "fpm";
pub const FPM_REPO_OWNER: &str = "fortran-lang";
pub const FPM_REPO_NAME: &str = "fpm";
pub const DEFAULT_FPM_REPOSITORY: &str = "https://github.com/fortran-lang/fpm";

pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";
pub const RELEASES_LATEST: &str = "releases/latest";
pub const RELEASES_DOWNLOAD: &str = "releases/download";

/// Version selector that asks for the most recent release.
pub const LATEST: &str = "latest";
/// Value of the `github-token` input when no token was supplied.
pub const NO_TOKEN: &str = "none";

/// Toolchain suffixes tried, in order, when the plain asset is missing from a release.
pub const COMPILER_SUFFIXES: [&str; 5] = ["gcc-10", "gcc-11", "gcc-12", "gcc-13", "gcc-14"];

pub const USER_AGENT: &str = "setup-fpm";
pub const SETUP_FPM_DIR: &str = "setup-fpm";
pub const LOG_FILE_NAME: &str = "setup-fpm.log";
