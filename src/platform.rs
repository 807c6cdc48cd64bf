use std::fmt;
use std::str::FromStr;

use crate::errors::SetupError;

/// Release assets are only published for this architecture.
pub const ARCH: &str = "x86_64";

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Linux => "linux",
            Self::MacOs => "macos",
            Self::Windows => "windows",
        };
        s.fmt(f)
    }
}

impl FromStr for Platform {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linux" => Ok(Self::Linux),
            "macos" | "darwin" => Ok(Self::MacOs),
            "windows" | "win32" => Ok(Self::Windows),
            unknown => Err(SetupError::Configuration(format!(
                "Unknown platform: '{unknown}'"
            ))),
        }
    }
}

impl Platform {
    pub fn from_host() -> Result<Self, SetupError> {
        Self::from_str(std::env::consts::OS)
    }

    /// The `<os>-<arch>` fragment used in release asset names.
    pub fn asset_token(&self) -> String {
        let os = match self {
            Self::Linux => "linux",
            Self::MacOs => "macos",
            Self::Windows => "windows",
        };
        format!("{os}-{ARCH}")
    }

    pub fn is_windows(&self) -> bool {
        matches!(self, Self::Windows)
    }

    pub fn exe_suffix(&self) -> &'static str {
        if self.is_windows() {
            ".exe"
        } else {
            ""
        }
    }

    /// Name the installed binary ends up with.
    pub fn bin_name(&self) -> String {
        format!("{}{}", crate::constants::FPM, self.exe_suffix())
    }
}
