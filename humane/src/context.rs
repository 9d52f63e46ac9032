//! Application context that holds resolved configuration
//!
//! The context is built following the precedence order:
//! 1. Default values
//! 2. Config file values
//! 3. Environment variables
//! 4. CLI flags
//!
//! Once built, the context is passed as read-only throughout the application.

use crate::config;
use crate::format::ColorChoice;
use libhumane::Config;
use log::LevelFilter;
use std::env;
use std::path::Path;

/// Environment variable overriding the past label
pub const ENV_PAST_LABEL: &str = "HUMANE_PAST_LABEL";
/// Environment variable overriding the future label
pub const ENV_FUTURE_LABEL: &str = "HUMANE_FUTURE_LABEL";

/// How chatty the CLI is, from the number of `-v` flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum VerbosityLevel {
    #[default]
    Normal,
    Verbose,
    VeryVerbose,
    Trace,
}

impl VerbosityLevel {
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => VerbosityLevel::Normal,
            1 => VerbosityLevel::Verbose,
            2 => VerbosityLevel::VeryVerbose,
            _ => VerbosityLevel::Trace,
        }
    }

    /// Log filter used when `RUST_LOG` is not set
    pub fn level_filter(self) -> LevelFilter {
        match self {
            VerbosityLevel::Normal => LevelFilter::Warn,
            VerbosityLevel::Verbose => LevelFilter::Info,
            VerbosityLevel::VeryVerbose => LevelFilter::Debug,
            VerbosityLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Application context with resolved configuration and runtime state
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Resolved configuration
    pub config: Config,
    pub color: ColorChoice,
    pub verbosity: VerbosityLevel,
}

impl AppContext {
    /// Build context with precedence: defaults > config file > env vars > CLI flags
    pub fn build(cli_color: ColorChoice, verbosity: VerbosityLevel) -> Self {
        let config_path = config::get_config_path();
        Self::build_from(Some(config_path.as_path()), cli_color, verbosity)
    }

    /// Same as [`AppContext::build`] with an explicit config file location
    pub fn build_from(
        config_path: Option<&Path>,
        cli_color: ColorChoice,
        verbosity: VerbosityLevel,
    ) -> Self {
        // 1. Defaults, 2. config file when present
        let mut config = config::load_or_default(config_path);

        // 3. Environment variable overrides
        if let Ok(past) = env::var(ENV_PAST_LABEL) {
            log::debug!("past label from {}: {:?}", ENV_PAST_LABEL, past);
            config.labels.past = past;
        }
        if let Ok(future) = env::var(ENV_FUTURE_LABEL) {
            log::debug!("future label from {}: {:?}", ENV_FUTURE_LABEL, future);
            config.labels.future = future;
        }

        Self {
            config,
            color: cli_color,
            verbosity,
        }
    }

    /// Apply label flags given on the command line (highest priority)
    pub fn with_labels(mut self, past: Option<&str>, future: Option<&str>) -> Self {
        if let Some(past) = past {
            self.config.labels.past = past.to_string();
        }
        if let Some(future) = future {
            self.config.labels.future = future.to_string();
        }
        self
    }
}

/// Initialise `env_logger`; `RUST_LOG` wins over the `-v` count
pub fn init_logging(verbosity: VerbosityLevel) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(verbosity.level_filter());
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    builder.format_timestamp(None);
    // Ignore a second initialisation (tests build several contexts)
    let _ = builder.try_init();
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
