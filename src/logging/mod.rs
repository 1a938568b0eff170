//! This module bridges `tracing` into the capture backend.
//!
//! It includes a `tracing` layer that records events into the containers of
//! a `Registry`, keyed by event target.
pub mod collector;

pub use collector::{bootstrap_tracing, CaptureLayer};
