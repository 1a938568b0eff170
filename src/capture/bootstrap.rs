//! One-time installation of the capture backend.
use super::Registry;
use crate::facade::LoggingSystem;
use std::sync::Once;

static BOOTSTRAP: Once = Once::new();

/// Routes every `Logger` created from now on into the global `Registry`.
///
/// Safe to call any number of times from any thread; only the first call
/// installs the handler factory. Loggers created before the first call keep
/// the fallback stream handler.
///
/// # Panics
///
/// Installing another factory with `LoggingSystem::bootstrap` in the same
/// process is unsupported. If that happened before the first call to this
/// function, this function panics, and so does every later call.
pub fn bootstrap() {
    BOOTSTRAP.call_once(|| {
        LoggingSystem::bootstrap(|label| Box::new(Registry::global().handler(label)));
        tracing::debug!(target: crate::LOG_TARGET, "capturing handler factory installed");
    });
}
