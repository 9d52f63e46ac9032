//! Error types for humane
//!
//! The formatting functions themselves never fail. Errors only come from
//! the edges of the library: parsing phrase templates, parsing user input
//! into numbers or instants, and loading configuration.

use thiserror::Error;

#[cfg(test)]
mod tests;

/// Main error type for humane operations
#[derive(Error, Debug)]
pub enum HumaneError {
    /// Malformed phrase template (unknown escape, dangling `%`)
    #[error("Template error in {template:?}: {message}")]
    Template { message: String, template: String },

    /// Input that could not be read as a number or an instant
    #[error("Parse error for {input:?}: {message}")]
    Parse {
        message: String,
        input: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors (invalid config file, bad values)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for humane operations
pub type Result<T> = std::result::Result<T, HumaneError>;

impl HumaneError {
    /// Creates a new template error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhumane::error::HumaneError;
    ///
    /// let err = HumaneError::template("unknown escape '%x'", "%x ago");
    /// assert!(matches!(err, HumaneError::Template { .. }));
    /// ```
    pub fn template<M: Into<String>, T: Into<String>>(message: M, template: T) -> Self {
        Self::Template {
            message: message.into(),
            template: template.into(),
        }
    }

    /// Creates a new parse error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhumane::error::HumaneError;
    ///
    /// let err = HumaneError::parse("not a number", "12a");
    /// assert!(matches!(err, HumaneError::Parse { .. }));
    /// ```
    pub fn parse<M: Into<String>, I: Into<String>>(message: M, input: I) -> Self {
        Self::Parse {
            message: message.into(),
            input: input.into(),
            source: None,
        }
    }

    /// Creates a new parse error with a source error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhumane::error::HumaneError;
    ///
    /// let source = "x".parse::<i64>().unwrap_err();
    /// let err = HumaneError::parse_with_source("not an integer", "x", source);
    /// assert!(matches!(err, HumaneError::Parse { .. }));
    /// ```
    pub fn parse_with_source<M, I, E>(message: M, input: I, source: E) -> Self
    where
        M: Into<String>,
        I: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Parse {
            message: message.into(),
            input: input.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhumane::error::HumaneError;
    ///
    /// let err = HumaneError::config("invalid config file", Some("/path/to/config.yaml"));
    /// assert!(matches!(err, HumaneError::Config { .. }));
    /// ```
    pub fn config<S: Into<String>>(message: S, path: Option<S>) -> Self {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: None,
        }
    }

    /// Creates a new configuration error with a source error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhumane::error::HumaneError;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    /// let err = HumaneError::config_with_source("failed to read config", Some("/path/to/config.yaml"), io_err);
    /// assert!(matches!(err, HumaneError::Config { .. }));
    /// ```
    pub fn config_with_source<S, E>(message: S, path: Option<S>, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: Some(Box::new(source)),
        }
    }
}

impl From<config::ConfigError> for HumaneError {
    fn from(err: config::ConfigError) -> Self {
        Self::config_with_source("Failed to build configuration", None::<&str>, err)
    }
}
