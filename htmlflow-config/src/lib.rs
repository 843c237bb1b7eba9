//! Shared configuration loader for the htmlflow tools.
//!
//! `defaults/htmlflow.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Settings are layered, later layers
//! winning key by key:
//!
//! 1. embedded defaults
//! 2. files added with [`Loader::with_optional_file`] / [`Loader::with_file`],
//!    in the order they were added
//! 3. [`Loader::set_override`] values (command-line flags)
//!
//! The result deserializes into [`FlowConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use htmlflow::{ConvertOptions, OutputFormat};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/htmlflow.default.toml");

/// Top-level configuration consumed by htmlflow applications.
#[derive(Debug, Clone, Deserialize)]
pub struct FlowConfig {
    pub convert: ConvertConfig,
    pub output: OutputConfig,
}

/// Mirrors [`ConvertOptions`].
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub max_depth: usize,
}

impl From<&ConvertConfig> for ConvertOptions {
    fn from(config: &ConvertConfig) -> Self {
        ConvertOptions::default().with_max_depth(config.max_depth)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

/// Builds a [`FlowConfig`] from the embedded defaults plus user layers.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Layer a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer a TOML file if it exists, such as a project-local `htmlflow.toml`.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    fn layer(self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        Self {
            builder: self.builder.add_source(source),
        }
    }

    /// Override a single dotted key, e.g. `convert.max_depth`.
    pub fn set_override<I>(self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        Ok(Self {
            builder: self.builder.set_override(key, value)?,
        })
    }

    pub fn build(self) -> Result<FlowConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone.
pub fn load_defaults() -> Result<FlowConfig, ConfigError> {
    Loader::new().build()
}
