//! The process-wide handler factory slot.
use super::{LogHandler, StreamHandler};
use crate::error::CaptureError;
use std::sync::OnceLock;

/// Builds the handler of a new `Logger` from its label.
pub type HandlerFactory = Box<dyn Fn(&str) -> Box<dyn LogHandler> + Send + Sync>;

static FACTORY: OnceLock<HandlerFactory> = OnceLock::new();

/// Entry point for installing the global handler factory.
///
/// The factory can be installed once per process. Loggers created before
/// installation keep the fallback `StreamHandler`.
pub struct LoggingSystem;

impl LoggingSystem {
    /// Installs `factory` as the global handler factory.
    ///
    /// # Panics
    ///
    /// Panics if a factory has already been installed.
    pub fn bootstrap<F>(factory: F)
    where
        F: Fn(&str) -> Box<dyn LogHandler> + Send + Sync + 'static,
    {
        if let Err(err) = Self::try_bootstrap(factory) {
            panic!("LoggingSystem::bootstrap called more than once: {err}");
        }
    }

    /// Installs `factory` as the global handler factory.
    ///
    /// # Errors
    ///
    /// Returns `CaptureError::AlreadyBootstrapped` if a factory has already
    /// been installed; the existing factory stays in place.
    pub fn try_bootstrap<F>(factory: F) -> Result<(), CaptureError>
    where
        F: Fn(&str) -> Box<dyn LogHandler> + Send + Sync + 'static,
    {
        FACTORY
            .set(Box::new(factory))
            .map_err(|_| CaptureError::AlreadyBootstrapped)
    }

    pub fn is_bootstrapped() -> bool {
        FACTORY.get().is_some()
    }

    /// Builds a handler for `label` with the installed factory, or a
    /// `StreamHandler` when none is installed.
    pub fn make_handler(label: &str) -> Box<dyn LogHandler> {
        match FACTORY.get() {
            Some(factory) => factory(label),
            None => Box::new(StreamHandler::new(label)),
        }
    }
}
