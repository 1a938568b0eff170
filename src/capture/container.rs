//! This module provides the per-label store of captured messages.
//!
//! A `Container` is shared by every handler created for its label. Each
//! container has its own lock, so heavy logging on one label never blocks
//! readers or writers of another.
use crate::message::{default_format, Message};
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// The captured messages of a single label.
#[derive(Debug)]
pub struct Container {
    /// The label this container was created for.
    label: String,
    /// The captured messages, in append order.
    messages: Mutex<Vec<Message>>,
}

impl Container {
    /// Creates a new, empty `Container`.
    ///
    /// Containers are normally obtained through `Registry::container` so that
    /// a single instance exists per label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            messages: Mutex::new(Vec::new()),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Appends a message to the tail of the sequence.
    pub fn append(&self, message: Message) {
        self.lock().push(message);
    }

    /// Returns a copy of every message captured since the last reset.
    pub fn messages(&self) -> Vec<Message> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Discards every captured message.
    ///
    /// The container itself stays registered, so references held by tests
    /// keep receiving messages logged after the reset.
    pub fn reset(&self) {
        let discarded = std::mem::take(&mut *self.lock()).len();
        tracing::trace!(
            target: crate::LOG_TARGET,
            label = %self.label,
            discarded,
            "container reset"
        );
    }

    /// Renders the captured messages with the default format.
    pub fn rendered(&self) -> Vec<String> {
        self.rendered_with(default_format)
    }

    /// Renders the captured messages with a custom formatter.
    ///
    /// The formatter runs on a snapshot, outside the container lock, so it
    /// may itself log to this container.
    pub fn rendered_with<F>(&self, formatter: F) -> Vec<String>
    where
        F: Fn(&Message) -> String,
    {
        self.messages().iter().map(formatter).collect()
    }

    /// Prints every captured message to standard output in the default format.
    pub fn print(&self) {
        self.print_with(default_format);
    }

    /// Prints every captured message to standard output using `formatter`.
    pub fn print_with<F>(&self, formatter: F)
    where
        F: Fn(&Message) -> String,
    {
        let stdout = io::stdout();
        let _ = self.write_to(&mut stdout.lock(), formatter);
    }

    /// Writes one formatted line per captured message to `writer`.
    ///
    /// The container lock is held for the whole write, so a concurrent reset
    /// cannot interleave with the output. `formatter` must not log to this
    /// container; use `rendered_with` for formatters that do.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by `writer`.
    pub fn write_to<W, F>(&self, writer: &mut W, formatter: F) -> io::Result<()>
    where
        W: Write,
        F: Fn(&Message) -> String,
    {
        let messages = self.lock();
        for message in messages.iter() {
            writeln!(writer, "{}", formatter(message))?;
        }
        writer.flush()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Message>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
