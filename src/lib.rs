//! In-memory capture of log calls for tests.
//!
//! Call [`bootstrap`] once (it is idempotent), create loggers with
//! [`Logger::new`], and read what they logged from the [`Container`] of
//! their label:
//!
//! ```
//! use log_capture::{info, Logger};
//!
//! log_capture::bootstrap();
//! let container = log_capture::container("doc.example");
//! container.reset();
//!
//! let logger = Logger::new("doc.example");
//! info!(logger, { "newValue" => 20, "oldValue" => 0 }, "value changed");
//!
//! let messages = container.messages();
//! assert_eq!(messages.len(), 1);
//! assert!(messages[0]
//!     .to_string()
//!     .starts_with("info value changed|newValue=20;oldValue=0|"));
//! ```
//!
//! Events emitted through `tracing` can be captured the same way after
//! [`bootstrap_tracing`], using the event target as the label.
pub mod capture;
pub mod config;
pub mod error;
pub mod facade;
pub mod level;
pub mod logging;
pub mod message;
pub mod metadata;

pub use capture::{bootstrap, CapturingHandler, Container, Registry};
pub use config::CaptureConfig;
pub use error::CaptureError;
pub use facade::{LogHandler, Logger, LoggingSystem, Record, StreamHandler};
pub use level::Level;
pub use logging::{bootstrap_tracing, CaptureLayer};
pub use message::{default_format, Message};
pub use metadata::{merge, merge_metadata, MergeOutcome, Metadata, METADATA_KEY_CONFLICT};

use std::sync::Arc;

/// Target of the `tracing` events this crate emits about itself.
pub(crate) const LOG_TARGET: &str = "log_capture";

/// The container of `label` in the global registry.
pub fn container(label: &str) -> Arc<Container> {
    Registry::global().container(label)
}

/// Sets the minimum level of loggers created for `label` from now on.
pub fn set_log_level(level: Level, label: &str) {
    Registry::global().set_log_level(level, label);
}

/// The minimum level new loggers for `label` will get.
pub fn log_level(label: &str) -> Level {
    Registry::global().log_level(label)
}
