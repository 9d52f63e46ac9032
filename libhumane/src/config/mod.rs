//! Application configuration.
//!
//! Defaults are layered under an optional YAML file. Only the labels used
//! for relative phrases and the preferred output format are configurable;
//! the separator and the magnitude table are fixed.

use crate::error::{HumaneError, Result};
use crate::times::{FUTURE_LABEL, PAST_LABEL};
use config::{Config as ConfigRs, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;


/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub output: Output,
}

impl Config {
    /// Parses a `Config` from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let builder = ConfigRs::builder()
            .add_source(ConfigRs::try_from(&Config::default())?)
            .add_source(File::from_str(s, FileFormat::Yaml));

        Self::from_builder(builder, None)
    }

    /// Loads a `Config` from an optional file path.
    ///
    /// With no path the defaults are returned. A given path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ConfigRs::builder().add_source(ConfigRs::try_from(&Config::default())?);

        if let Some(p) = path {
            builder = builder.add_source(File::from(p).format(FileFormat::Yaml).required(true));
        }

        Self::from_builder(builder, path)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        path: Option<&Path>,
    ) -> Result<Self> {
        let path = path.map(|p| p.display().to_string());
        builder
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| {
                HumaneError::config_with_source(
                    "Failed to deserialize configuration".to_string(),
                    path,
                    e,
                )
            })
    }
}

/// Direction labels for relative time phrases.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Labels {
    #[serde(default = "default_past_label")]
    pub past: String,

    #[serde(default = "default_future_label")]
    pub future: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            past: default_past_label(),
            future: default_future_label(),
        }
    }
}

fn default_past_label() -> String {
    PAST_LABEL.to_string()
}

fn default_future_label() -> String {
    FUTURE_LABEL.to_string()
}

/// Output formatting settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Output {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Enum for output formats.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,

    Json,

    Yaml,
}
