//! A small logging façade with per-logger handlers.
//!
//! Each `Logger` owns a handler built by the factory installed in
//! `LoggingSystem`. Handlers implement `LogHandler`; the capture backend in
//! `crate::capture` is one implementation, `StreamHandler` is the fallback
//! used when no factory is installed.
mod logger;
mod macros;
mod stream;
mod system;

pub use logger::Logger;
pub use stream::StreamHandler;
pub use system::{HandlerFactory, LoggingSystem};

use crate::level::Level;
use crate::metadata::Metadata;

/// A single log call as seen by a handler.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub level: Level,
    /// The rendered message text.
    pub message: &'a str,
    /// Metadata passed with this call only.
    pub metadata: Option<&'a Metadata>,
    pub file: &'a str,
    pub function: &'a str,
    pub line: u32,
}

/// The capabilities a `Logger` requires from its handler.
pub trait LogHandler: Send + Sync {
    /// Handles one log call.
    ///
    /// Calls below `log_level()` must have no observable effect.
    fn log(&self, record: &Record<'_>);

    /// Returns the value of a per-logger metadata key.
    fn metadata(&self, key: &str) -> Option<&str>;

    /// Sets a per-logger metadata key, applied to every later call.
    fn set_metadata(&mut self, key: String, value: String);

    /// Removes a per-logger metadata key, returning its previous value.
    fn remove_metadata(&mut self, key: &str) -> Option<String>;

    /// The minimum level this handler records.
    fn log_level(&self) -> Level;

    fn set_log_level(&mut self, level: Level);
}

/// Reduces a `std::any::type_name` path produced by `function_name!` to the
/// name of the enclosing function.
#[doc(hidden)]
pub fn short_function_name(path: &'static str) -> &'static str {
    let path = path.strip_suffix("::f").unwrap_or(path);
    path.rsplit("::")
        .find(|segment| *segment != "{{closure}}")
        .unwrap_or(path)
}
