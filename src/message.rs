//! This module defines the structure for a single captured log call and its
//! default text rendering.
use crate::level::Level;
use crate::metadata::{render_metadata, Metadata, MetadataStyle};
use std::fmt;
use std::path::Path;

/// One captured log call.
///
/// Messages carry no timestamp; their order is the order in which they were
/// appended to a `Container`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    level: Level,
    message: String,
    metadata: Option<Metadata>,
    file: String,
    function: String,
    line: u32,
}

impl Message {
    /// Creates a new `Message`.
    ///
    /// # Arguments
    ///
    /// * `level` - The severity of the call.
    /// * `message` - The rendered message text.
    /// * `metadata` - The merged metadata, if any.
    /// * `file` - The source file of the call site.
    /// * `function` - The function containing the call site.
    /// * `line` - The source line of the call site.
    pub fn new(
        level: Level,
        message: impl Into<String>,
        metadata: Option<Metadata>,
        file: impl Into<String>,
        function: impl Into<String>,
        line: u32,
    ) -> Self {
        Self {
            level,
            message: message.into(),
            metadata,
            file: file.into(),
            function: function.into(),
            line,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Renders this message with a custom formatter.
    pub fn to_string_with<F>(&self, formatter: F) -> String
    where
        F: Fn(&Message) -> String,
    {
        formatter(self)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&default_format(self))
    }
}

/// The default rendering: `<level> <message>[|k=v;...]|<file name>|<function>`.
///
/// The line number is left out so that unrelated edits to a source file do
/// not break assertions.
pub fn default_format(message: &Message) -> String {
    let file = Path::new(&message.file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(&message.file);
    format!(
        "{} {}{}|{}|{}",
        message.level,
        message.message,
        render_metadata(message.metadata.as_ref(), &MetadataStyle::default()),
        file,
        message.function
    )
}
