//! Fallback handler writing log calls to standard error.
use super::{LogHandler, Record};
use crate::level::Level;
use crate::message::{default_format, Message};
use crate::metadata::{merge_metadata, Metadata};
use std::io::Write;

/// Writes each call as `<label>: <default format>` to standard error.
///
/// Used by `Logger::new` when no handler factory has been installed.
#[derive(Debug, Clone)]
pub struct StreamHandler {
    label: String,
    metadata: Metadata,
    log_level: Level,
}

impl StreamHandler {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            metadata: Metadata::new(),
            log_level: Level::default(),
        }
    }
}

impl LogHandler for StreamHandler {
    fn log(&self, record: &Record<'_>) {
        if record.level < self.log_level {
            return;
        }
        let message = Message::new(
            record.level,
            record.message,
            merge_metadata(&self.metadata, record.metadata),
            record.file,
            record.function,
            record.line,
        );
        let _ = writeln!(
            std::io::stderr().lock(),
            "{}: {}",
            self.label,
            default_format(&message)
        );
    }

    fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    fn set_metadata(&mut self, key: String, value: String) {
        self.metadata.insert(key, value);
    }

    fn remove_metadata(&mut self, key: &str) -> Option<String> {
        self.metadata.remove(key)
    }

    fn log_level(&self) -> Level {
        self.log_level
    }

    fn set_log_level(&mut self, level: Level) {
        self.log_level = level;
    }
}
