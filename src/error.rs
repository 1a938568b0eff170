//! Error type for the fallible edges of the crate.
//!
//! Capturing, reading and resetting messages never fail. Errors only arise
//! when installing global hooks or parsing level configuration.
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// A handler factory has already been installed in the `LoggingSystem`.
    #[error("a global log handler factory is already installed")]
    AlreadyBootstrapped,

    #[error("unknown log level '{0}'")]
    UnknownLevel(String),

    /// A level directive could not be parsed.
    #[error("invalid level directive '{0}'")]
    InvalidDirective(String),

    /// The global `tracing` subscriber could not be installed.
    #[error("failed to install tracing subscriber: {0}")]
    SubscriberInstall(String),
}
