//! Platform Probe
//!
//! This module maps the host operating system onto the platform identifiers
//! the build configuration is keyed by. The recognized identifiers are the
//! kernel-style names `Linux`, `Darwin` and `Windows`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Host platform family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    /// Linux-family systems
    Linux,
    /// Apple-family systems (probe identifier `Darwin`)
    MacOs,
    /// Windows-family systems
    Windows,
    /// Anything else; carries the probe value for reporting
    Other(String),
}

impl Platform {
    /// Detect the platform this process is running on.
    pub fn host() -> Self {
        match std::env::consts::OS {
            "linux" => Platform::Linux,
            "macos" => Platform::MacOs,
            "windows" => Platform::Windows,
            other => Platform::Other(other.to_string()),
        }
    }

    /// Parse a platform identifier.
    ///
    /// Recognizes `Linux`, `Darwin` and `Windows`; any other value becomes
    /// [`Platform::Other`] and selects the fallback configuration.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Linux" => Platform::Linux,
            "Darwin" => Platform::MacOs,
            "Windows" => Platform::Windows,
            other => Platform::Other(other.to_string()),
        }
    }

    /// Whether a dedicated configuration branch exists for this platform.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Platform::Other(_))
    }

    /// The probe identifier for this platform.
    pub fn name(&self) -> &str {
        match self {
            Platform::Linux => "Linux",
            Platform::MacOs => "Darwin",
            Platform::Windows => "Windows",
            Platform::Other(name) => name,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
