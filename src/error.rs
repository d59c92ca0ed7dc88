//! Error types for configuration loading and the command-line front end.
//!
//! Rendering never fails; only reading config files and talking to the
//! terminal can.

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Toml(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// Top-level error for the `clige` binary.
#[derive(Debug)]
pub enum CliError {
    Config(ConfigError),
    Io(std::io::Error),
    Json(serde_json::Error),
    /// Bad command-line input that clap could not catch.
    Usage(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config error: {e}"),
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::Json(e) => write!(f, "json error: {e}"),
            Self::Usage(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::Invalid("bad exit key".into());
        assert_eq!(err.to_string(), "invalid config: bad exit key");
    }

    #[test]
    fn cli_error_wraps_config_error() {
        let err: CliError = ConfigError::Invalid("x".into()).into();
        assert!(err.to_string().starts_with("config error:"));
    }

    #[test]
    fn toml_errors_convert() {
        let parse = toml::from_str::<toml::Value>("= nope").expect_err("invalid toml");
        let err: ConfigError = parse.into();
        assert!(matches!(err, ConfigError::Toml(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
