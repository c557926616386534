//! Configuration types for gnorm.
//!
//! [`Config::load`] layers an optional user TOML file over the embedded
//! defaults. [`Config::defaults`] returns the same defaults without touching
//! the filesystem (useful in tests).

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[paths]
input_suffix  = ".txt"
output_suffix = ".norm.txt"

[sections]
malformed = "preserve"
"#;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Source(#[from] config::ConfigError),
    #[error("paths.{field} must not be empty")]
    EmptySuffix { field: &'static str },
    #[error("input and output suffixes are both {0:?}; outputs would overwrite inputs")]
    IdenticalSuffixes(String),
}

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub sections: SectionsConfig,
}

/// `[paths]` section: how output paths are derived from input paths.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PathsConfig {
    #[serde(default = "default_input_suffix")]
    pub input_suffix: String,
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,
}

fn default_input_suffix() -> String { ".txt".to_string() }
fn default_output_suffix() -> String { ".norm.txt".to_string() }

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_suffix: default_input_suffix(),
            output_suffix: default_output_suffix(),
        }
    }
}

/// `[sections]` section: ranked-section handling.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct SectionsConfig {
    #[serde(default)]
    pub malformed: MalformedPolicy,
}

/// What to do with a `#`-prefixed line inside a section that is not a
/// well-formed ranked entry.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Keep the line verbatim in its slot; re-rank the parsed entries among
    /// the remaining slots.
    #[default]
    Preserve,
    /// Fail the run.
    Reject,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the built-in defaults, overlaid by `path` when given. A given
    /// path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.paths.input_suffix.is_empty() {
            return Err(ConfigError::EmptySuffix { field: "input_suffix" });
        }
        if self.paths.output_suffix.is_empty() {
            return Err(ConfigError::EmptySuffix { field: "output_suffix" });
        }
        if self.paths.input_suffix == self.paths.output_suffix {
            return Err(ConfigError::IdenticalSuffixes(self.paths.input_suffix.clone()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
