//! This module defines the `Logger` value application code logs through.
use super::{LogHandler, LoggingSystem, Record};
use crate::level::Level;
use std::fmt;

/// A labelled logger owning its own handler.
///
/// Two loggers with the same label have independent metadata and levels;
/// whatever their handlers share (such as a capture container) is decided by
/// the handler factory.
pub struct Logger {
    label: String,
    handler: Box<dyn LogHandler>,
}

impl Logger {
    /// Creates a logger whose handler is built by the installed factory.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let handler = LoggingSystem::make_handler(&label);
        Self { label, handler }
    }

    /// Creates a logger around an explicit handler, bypassing the factory.
    pub fn with_handler(label: impl Into<String>, handler: Box<dyn LogHandler>) -> Self {
        Self {
            label: label.into(),
            handler,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn log_level(&self) -> Level {
        self.handler.log_level()
    }

    pub fn set_log_level(&mut self, level: Level) {
        self.handler.set_log_level(level);
    }

    /// Whether a call at `level` would reach the handler.
    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.handler.log_level()
    }

    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.handler.metadata(key)
    }

    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.handler.set_metadata(key.into(), value.into());
    }

    pub fn remove_metadata(&mut self, key: &str) -> Option<String> {
        self.handler.remove_metadata(key)
    }

    /// Forwards a record to the handler.
    ///
    /// Prefer the `log!` family of macros, which fill in the call site.
    pub fn log(&self, record: &Record<'_>) {
        if self.is_enabled(record.level) {
            self.handler.log(record);
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("label", &self.label)
            .field("log_level", &self.handler.log_level())
            .finish_non_exhaustive()
    }
}
