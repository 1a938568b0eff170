//! The handler that records log calls into a `Container`.
use super::Container;
use crate::facade::{LogHandler, Record};
use crate::level::Level;
use crate::message::Message;
use crate::metadata::{merge_metadata, Metadata};
use std::sync::Arc;

/// Records every admitted call as a `Message` in its label's container.
///
/// One handler exists per logger. The container is shared with every other
/// handler of the same label; the metadata map and level are not. The level
/// is fixed when the handler is built, so later changes made through the
/// `Registry` only affect handlers built afterwards.
#[derive(Debug, Clone)]
pub struct CapturingHandler {
    container: Arc<Container>,
    metadata: Metadata,
    log_level: Level,
}

impl CapturingHandler {
    pub fn new(container: Arc<Container>, log_level: Level) -> Self {
        Self {
            container,
            metadata: Metadata::new(),
            log_level,
        }
    }

    /// The container this handler appends to.
    pub fn container(&self) -> &Arc<Container> {
        &self.container
    }
}

impl LogHandler for CapturingHandler {
    fn log(&self, record: &Record<'_>) {
        if record.level < self.log_level {
            return;
        }
        self.container.append(Message::new(
            record.level,
            record.message,
            merge_metadata(&self.metadata, record.metadata),
            record.file,
            record.function,
            record.line,
        ));
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
