//! This module provides a `tracing` layer that captures events into the
//! containers of a `Registry`.
//!
//! The event target is used as the label. Fields recorded on the enclosing
//! spans play the role of per-logger metadata and the event's own fields are
//! the per-call metadata, so the usual merge policy applies to them.
use crate::capture::Registry;
use crate::error::CaptureError;
use crate::facade::{LogHandler, Record};
use crate::level::Level;
use crate::metadata::Metadata;
use std::sync::{Arc, OnceLock};
use tracing::span::{Attributes, Id};
use tracing::{Event, Subscriber};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    registry::LookupSpan,
    Layer,
};

static TRACING_BOOTSTRAP: OnceLock<Result<(), CaptureError>> = OnceLock::new();

/// Installs a `CaptureLayer` over the global registry as the global
/// `tracing` subscriber.
///
/// Only the first call attempts the installation; later calls return its
/// outcome.
///
/// # Errors
///
/// Returns `CaptureError::SubscriberInstall` if another global subscriber
/// was installed first.
pub fn bootstrap_tracing() -> Result<(), CaptureError> {
    TRACING_BOOTSTRAP
        .get_or_init(|| CaptureLayer::init_subscriber(Arc::clone(Registry::global())))
        .clone()
}

/// A `tracing` layer that records events as captured messages.
pub struct CaptureLayer {
    registry: Arc<Registry>,
}

impl CaptureLayer {
    /// Creates a new `CaptureLayer`.
    ///
    /// # Arguments
    ///
    /// * `registry` - The `Registry` whose containers receive the events.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Initializes the global `tracing` subscriber with a `CaptureLayer`.
    ///
    /// # Errors
    ///
    /// This function will return an error if the global default subscriber
    /// cannot be set.
    pub fn init_subscriber(registry: Arc<Registry>) -> Result<(), CaptureError> {
        let subscriber = tracing_subscriber::registry().with(CaptureLayer::new(registry));

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|err| CaptureError::SubscriberInstall(err.to_string()))
    }
}

/// Fields recorded on a span, stored in its extensions.
struct SpanFields(Metadata);

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut visitor = FieldVisitor::default();
        attrs.record(&mut visitor);
        span.extensions_mut().insert(SpanFields(visitor.into_fields()));
    }

    fn on_record(&self, id: &Id, values: &tracing::span::Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut visitor = FieldVisitor::default();
        values.record(&mut visitor);
        let mut extensions = span.extensions_mut();
        if let Some(SpanFields(fields)) = extensions.get_mut::<SpanFields>() {
            fields.extend(visitor.into_fields());
        }
    }

    /// Builds a handler for the event's target, loads the span fields into
    /// it and logs the event through it.
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();
        // The crate's own diagnostics would otherwise feed back into it.
        if metadata.target() == crate::LOG_TARGET {
            return;
        }

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        let message = visitor.message.take().unwrap_or_default();

        let mut handler = self.registry.handler(metadata.target());
        if let Some(scope) = ctx.event_scope(event) {
            for span in scope.from_root() {
                if let Some(SpanFields(fields)) = span.extensions().get::<SpanFields>() {
                    for (key, value) in fields {
                        handler.set_metadata(key.clone(), value.clone());
                    }
                }
            }
        }

        // Keep only the last module path component, e.g. `collector`.
        let function = metadata
            .module_path()
            .map(|path| path.rsplit("::").next().unwrap_or(path))
            .unwrap_or_else(|| metadata.target());

        handler.log(&Record {
            level: Level::from(metadata.level()),
            message: &message,
            metadata: (!visitor.fields.is_empty()).then_some(&visitor.fields),
            file: metadata.file().unwrap_or("<unknown>"),
            function,
            line: metadata.line().unwrap_or(0),
        });
    }
}

/// A `tracing::field::Visit` implementation splitting the `message` field
/// from the remaining fields.
#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Metadata,
}

impl FieldVisitor {
    fn into_fields(self) -> Metadata {
        self.fields
    }
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        } else {
            self.fields
                .insert(field.name().to_string(), format!("{:?}", value));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields
                .insert(field.name().to_string(), value.to_string());
        }
    }
}
