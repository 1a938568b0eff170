//! Level configuration for a `Registry`.
//!
//! Directives follow the shape of `tracing_subscriber::EnvFilter` strings:
//! a comma-separated list where a bare level sets the default and
//! `label=level` sets the minimum level of one label, e.g.
//! `debug,my.service=critical`.
use crate::error::CaptureError;
use crate::level::Level;
use std::collections::BTreeMap;

/// Environment variable read by `CaptureConfig::from_env`.
pub const LEVEL_ENV_VAR: &str = "LOG_CAPTURE_LEVEL";

/// Initial level settings of a `Registry`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureConfig {
    /// Minimum level for labels without an explicit setting.
    pub default_level: Level,
    /// Per-label minimum levels.
    pub label_levels: BTreeMap<String, Level>,
}

impl CaptureConfig {
    /// Parses a directive string.
    ///
    /// Empty segments are ignored. When several directives name the same
    /// label (or several bare levels are given), the last one wins.
    ///
    /// # Errors
    ///
    /// Returns `CaptureError::UnknownLevel` for an unrecognised level name and
    /// `CaptureError::InvalidDirective` for a directive with an empty label.
    pub fn parse(directives: &str) -> Result<Self, CaptureError> {
        let mut config = Self::default();
        for directive in directives.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            match directive.rsplit_once('=') {
                Some((label, level)) => {
                    let label = label.trim();
                    if label.is_empty() {
                        return Err(CaptureError::InvalidDirective(directive.to_string()));
                    }
                    config.label_levels.insert(label.to_string(), level.parse()?);
                }
                None => config.default_level = directive.parse()?,
            }
        }
        Ok(config)
    }

    /// Reads directives from `LOG_CAPTURE_LEVEL`.
    ///
    /// An unset or non-unicode variable yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, CaptureError> {
        match std::env::var(LEVEL_ENV_VAR) {
            Ok(directives) => Self::parse(&directives),
            Err(_) => Ok(Self::default()),
        }
    }

    /// The configured minimum level of `label`.
    pub fn level_for(&self, label: &str) -> Level {
        self.label_levels
            .get(label)
            .copied()
            .unwrap_or(self.default_level)
    }
}
