//! Error type for configuration loading and validation

use std::fmt;
use std::io;

use thiserror::Error;

/// Where an option key was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionScope {
    /// Top-level (base) options
    Base,
    /// `options` of the override rule at this index
    Override(usize),
}

impl fmt::Display for OptionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "base options"),
            Self::Override(index) => write!(f, "override #{index}"),
        }
    }
}

/// Error type for configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the file
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error
    #[error("failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parsing error
    #[error("failed to parse config file: {0}")]
    Json(#[from] serde_json::Error),

    /// A file pattern could not be compiled
    #[error("invalid file pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// An option key outside the recognized set
    #[error("unknown option `{key}` in {scope}")]
    UnknownOption { key: String, scope: OptionScope },

    /// Two rules with the same patterns set one key to different values
    #[error("override rules for `{pattern}` disagree on `{key}`")]
    ConflictingOverride { pattern: String, key: String },
}

impl ConfigError {
    pub fn is_invalid_pattern(&self) -> bool {
        matches!(self, Self::InvalidPattern { .. })
    }

    pub fn is_unknown_option(&self) -> bool {
        matches!(self, Self::UnknownOption { .. })
    }
}
