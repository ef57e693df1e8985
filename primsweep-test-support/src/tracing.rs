//! Recording layer capturing spans and events so tests can assert on
//! instrumentation without parsing formatted log output.

use std::collections::HashMap;
use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Field name under which `tracing` stores an event's formatted message.
pub const MESSAGE_FIELD: &str = "message";

/// Layer that stores closed spans and emitted events for later assertions.
///
/// Clones share the same storage, so a test keeps one handle and installs
/// another on the subscriber.
///
/// # Examples
/// ```
/// use primsweep_test_support::tracing::RecordingLayer;
/// use tracing_subscriber::layer::SubscriberExt;
///
/// let layer = RecordingLayer::default();
/// let subscriber = tracing_subscriber::registry().with(layer.clone());
/// tracing::subscriber::with_default(subscriber, || {
///     let _guard = tracing::info_span!("demo.span", size = 3).entered();
///     tracing::info!("inside");
/// });
///
/// let span = layer.span_named("demo.span").expect("span recorded");
/// assert_eq!(span.field("size"), Some("3"));
/// assert_eq!(layer.messages(), vec!["inside".to_owned()]);
/// ```
#[derive(Clone, Default)]
pub struct RecordingLayer {
    spans: Arc<Mutex<Vec<SpanRecord>>>,
    events: Arc<Mutex<Vec<EventRecord>>>,
}

impl RecordingLayer {
    /// Returns the closed spans in completion order.
    #[must_use]
    pub fn spans(&self) -> Vec<SpanRecord> {
        lock(&self.spans).clone()
    }

    /// Returns the emitted events in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<EventRecord> {
        lock(&self.events).clone()
    }

    /// Returns the first closed span called `name`.
    #[must_use]
    pub fn span_named(&self, name: &str) -> Option<SpanRecord> {
        lock(&self.spans)
            .iter()
            .find(|span| span.name == name)
            .cloned()
    }

    /// Returns the message of every event that carried one.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        lock(&self.events)
            .iter()
            .filter_map(|event| event.message().map(str::to_owned))
            .collect()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A closed span with the fields recorded over its lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanRecord {
    /// Span name from the callsite metadata.
    pub name: String,
    /// Name of the enclosing span, if any.
    pub parent: Option<String>,
    /// Fields recorded at creation and through `Span::record`.
    pub fields: HashMap<String, String>,
}

impl SpanRecord {
    /// Returns the rendered value of `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// An emitted event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Level of the event.
    pub level: Level,
    /// Target from the callsite metadata.
    pub target: String,
    /// Structured fields, including the message.
    pub fields: HashMap<String, String>,
}

impl EventRecord {
    /// Returns the formatted message, if the event carried one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.fields.get(MESSAGE_FIELD).map(String::as_str)
    }

    /// Returns the rendered value of `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

struct OpenSpan(SpanRecord);

impl<S> Layer<S> for RecordingLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut record = SpanRecord {
            name: attrs.metadata().name().to_owned(),
            parent: span.parent().map(|parent| parent.name().to_owned()),
            fields: HashMap::new(),
        };
        attrs.record(&mut FieldCollector(&mut record.fields));
        span.extensions_mut().insert(OpenSpan(record));
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut extensions = span.extensions_mut();
        if let Some(OpenSpan(record)) = extensions.get_mut::<OpenSpan>() {
            values.record(&mut FieldCollector(&mut record.fields));
        }
    }

    fn on_close(&self, id: Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(&id) else {
            return;
        };
        let Some(OpenSpan(record)) = span.extensions_mut().remove::<OpenSpan>() else {
            return;
        };
        lock(&self.spans).push(record);
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut FieldCollector(&mut fields));
        lock(&self.events).push(EventRecord {
            level: *event.metadata().level(),
            target: event.metadata().target().to_owned(),
            fields,
        });
    }
}

/// Renders every visited field to a string keyed by field name.
struct FieldCollector<'a>(&'a mut HashMap<String, String>);

impl FieldCollector<'_> {
    fn put(&mut self, field: &Field, value: String) {
        self.0.insert(field.name().to_owned(), value);
    }
}

impl Visit for FieldCollector<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.put(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_owned());
    }

    fn record_bytes(&mut self, field: &Field, value: &[u8]) {
        let mut hex = String::with_capacity(value.len() * 2);
        for byte in value {
            let _ = write!(hex, "{byte:02x}");
        }
        self.put(field, hex);
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.put(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, value.to_string());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.put(field, value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn records_late_fields_and_parent() {
        let layer = RecordingLayer::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());

        tracing::subscriber::with_default(subscriber, || {
            let outer = tracing::info_span!("outer", total = tracing::field::Empty).entered();
            {
                let _inner = tracing::debug_span!("inner", flag = true).entered();
            }
            outer.record("total", 7_u64);
        });

        let inner = layer.span_named("inner").expect("inner span");
        assert_eq!(inner.parent.as_deref(), Some("outer"));
        assert_eq!(inner.field("flag"), Some("true"));

        let outer = layer.span_named("outer").expect("outer span");
        assert_eq!(outer.parent, None);
        assert_eq!(outer.field("total"), Some("7"));

        let names: Vec<String> = layer.spans().into_iter().map(|span| span.name).collect();
        assert_eq!(names, vec!["inner".to_owned(), "outer".to_owned()]);
    }

    #[test]
    fn records_event_levels_and_messages() {
        let layer = RecordingLayer::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(code = "X", "something odd");
            tracing::error!(attempts = 3_i64);
        });

        let events = layer.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].level, Level::WARN);
        assert_eq!(events[0].message(), Some("something odd"));
        assert_eq!(events[0].field("code"), Some("X"));
        assert_eq!(events[1].message(), None);
        assert_eq!(events[1].field("attempts"), Some("3"));
        assert_eq!(layer.messages(), vec!["something odd".to_owned()]);
    }
}
