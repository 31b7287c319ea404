//! Durable log sinks for status events.
//!
//! A sink is append-only and used sequentially by one logger. Sink failures
//! are reported through `tracing` and never reach the caller.

use std::path::{Path, PathBuf};

use aer_core::entities::StatusEvent;
use aer_core::enums::{EventKind, Severity};

pub trait LogSink {
    fn record(&mut self, event: &StatusEvent);
}

impl<L: LogSink + ?Sized> LogSink for Box<L> {
    fn record(&mut self, event: &StatusEvent) {
        (**self).record(event);
    }
}

/// Forwards events to the `tracing` subscriber. Details go out at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn record(&mut self, event: &StatusEvent) {
        let kind = event.kind;
        let message = event.message.as_str();
        match (kind, event.severity) {
            (EventKind::Detail, _) => tracing::debug!(%kind, "{message}"),
            (_, Severity::Error) => tracing::error!(%kind, "{message}"),
            (_, Severity::Warning) => tracing::warn!(%kind, "{message}"),
            (_, Severity::Info | Severity::Success) => {
                tracing::info!(%kind, severity = %event.severity, "{message}");
            }
        }
    }
}

/// Keeps every event in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Vec<StatusEvent>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[StatusEvent] {
        &self.events
    }

    /// Messages in write order, handy for assertions.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.events.iter().map(|event| event.message.as_str()).collect()
    }
}

impl LogSink for MemorySink {
    fn record(&mut self, event: &StatusEvent) {
        self.events.push(event.clone());
    }
}

/// Appends each event as one JSON object per line.
#[derive(Debug, Clone)]
pub struct JsonLinesSink {
    path: PathBuf,
    failures: usize,
}

impl JsonLinesSink {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            failures: 0,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of events that could not be written.
    #[must_use]
    pub const fn failures(&self) -> usize {
        self.failures
    }
}

impl LogSink for JsonLinesSink {
    fn record(&mut self, event: &StatusEvent) {
        if let Err(error) = serde_jsonlines::append_json_lines(&self.path, [event]) {
            self.failures += 1;
            tracing::warn!(
                path = %self.path.display(),
                %error,
                "failed to append status event to log file"
            );
        }
    }
}

/// Writes every event to each inner sink in order.
#[derive(Default)]
pub struct FanoutSink {
    sinks: Vec<Box<dyn LogSink>>,
}

impl FanoutSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, sink: impl LogSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl LogSink for FanoutSink {
    fn record(&mut self, event: &StatusEvent) {
        for sink in &mut self.sinks {
            sink.record(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;
    use tracing::Level;
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    use super::*;

    fn event(message: &str) -> StatusEvent {
        StatusEvent::now(EventKind::Status, Severity::Info, message)
    }

    #[test]
    fn memory_sink_keeps_order() {
        let mut sink = MemorySink::new();
        sink.record(&event("first"));
        sink.record(&event("second"));
        assert_eq!(sink.messages(), vec!["first", "second"]);
    }

    #[test]
    fn json_lines_sink_appends_one_line_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        let mut sink = JsonLinesSink::new(&path);

        sink.record(&event("loaded"));
        sink.record(&StatusEvent::now(EventKind::Detail, Severity::Info, "row 3 ok"));

        let written: Vec<StatusEvent> = serde_jsonlines::json_lines(&path)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(written[0].message, "loaded");
        assert_eq!(written[1].kind, EventKind::Detail);
        assert_eq!(sink.failures(), 0);
    }

    #[test]
    fn json_lines_sink_survives_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = JsonLinesSink::new(dir.path().join("missing").join("events.jsonl"));

        sink.record(&event("lost"));

        assert_eq!(sink.failures(), 1);
    }

    /// Records the level of every event it sees.
    #[derive(Clone, Default)]
    struct LevelCapture(Arc<Mutex<Vec<Level>>>);

    impl<S: tracing::Subscriber> Layer<S> for LevelCapture {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            self.0.lock().unwrap().push(*event.metadata().level());
        }
    }

    #[test]
    fn tracing_sink_maps_severity_to_level() {
        let capture = LevelCapture::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());

        tracing::subscriber::with_default(subscriber, || {
            let mut sink = TracingSink;
            for severity in [Severity::Info, Severity::Success, Severity::Warning, Severity::Error] {
                sink.record(&StatusEvent::now(EventKind::Status, severity, "msg"));
            }
            sink.record(&StatusEvent::now(EventKind::Progress, Severity::Info, "1/2 - rows"));
            sink.record(&StatusEvent::now(EventKind::Detail, Severity::Error, "detail"));
        });

        assert_eq!(
            *capture.0.lock().unwrap(),
            vec![
                Level::INFO,
                Level::INFO,
                Level::WARN,
                Level::ERROR,
                Level::INFO,
                Level::DEBUG,
            ]
        );
    }

    #[test]
    fn fanout_writes_to_every_sink() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        let mut fanout = FanoutSink::new()
            .with(TracingSink)
            .with(JsonLinesSink::new(&path));
        assert_eq!(fanout.len(), 2);

        fanout.record(&event("both"));

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.contains("\"both\""));
    }
}
