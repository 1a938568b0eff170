//! The in-memory capture backend.
//!
//! It includes the per-label `Container`, the `Registry` that hands
//! containers out, the `CapturingHandler` installed into the façade and the
//! `bootstrap` function that installs it.
pub mod bootstrap;
pub mod container;
pub mod handler;
pub mod registry;

pub use bootstrap::bootstrap;
pub use container::Container;
pub use handler::CapturingHandler;
pub use registry::Registry;
