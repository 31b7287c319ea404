//! Terse visible status plus a verbose durable log.
//!
//! ```
//! use aer_core::enums::Severity;
//! use aer_ui::{BufferSurface, Markup, MemorySink, StatusLogger};
//!
//! let mut log = StatusLogger::new(BufferSurface::new(Markup::Html), MemorySink::new());
//! log.update_status("Processing...", Severity::Info);
//! log.show_progress(1, 100, "Loading data");
//! log.log_detail("Detailed info for the log file only");
//! assert_eq!(log.sink().events().len(), 3);
//! ```

use aer_core::entities::StatusEvent;
use aer_core::enums::{EventKind, Severity};

use crate::markup::Markup;
use crate::sink::LogSink;

/// Where the visible status line and progress indicator are drawn.
///
/// Both slots hold at most one line; every call replaces the previous value.
pub trait StatusSurface {
    fn markup(&self) -> Markup;
    fn replace_status(&mut self, line: String);
    fn replace_progress(&mut self, line: String);
}

/// Surface that keeps the current lines in memory.
#[derive(Debug, Clone)]
pub struct BufferSurface {
    markup: Markup,
    status: Option<String>,
    progress: Option<String>,
    redraws: usize,
}

impl BufferSurface {
    #[must_use]
    pub const fn new(markup: Markup) -> Self {
        Self {
            markup,
            status: None,
            progress: None,
            redraws: 0,
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    #[must_use]
    pub fn progress(&self) -> Option<&str> {
        self.progress.as_deref()
    }

    /// How many times either slot was redrawn.
    #[must_use]
    pub const fn redraws(&self) -> usize {
        self.redraws
    }
}

impl StatusSurface for BufferSurface {
    fn markup(&self) -> Markup {
        self.markup
    }

    fn replace_status(&mut self, line: String) {
        self.status = Some(line);
        self.redraws += 1;
    }

    fn replace_progress(&mut self, line: String) {
        self.progress = Some(line);
        self.redraws += 1;
    }
}

pub struct StatusLogger<S, L> {
    surface: S,
    sink: L,
}

impl<S: StatusSurface, L: LogSink> StatusLogger<S, L> {
    pub const fn new(surface: S, sink: L) -> Self {
        Self { surface, sink }
    }

    /// Replace the visible status line and log the message at `severity`.
    pub fn update_status(&mut self, message: &str, severity: Severity) {
        let line = self.surface.markup().status_line(message, severity);
        self.surface.replace_status(line);
        self.sink
            .record(&StatusEvent::now(EventKind::Status, severity, message));
    }

    /// Log only; the visible surface is untouched.
    pub fn log_detail(&mut self, message: &str) {
        self.sink
            .record(&StatusEvent::now(EventKind::Detail, Severity::Info, message));
    }

    /// Overwrite the progress indicator. A zero `total` renders 0%.
    pub fn show_progress(&mut self, current: u64, total: u64, label: &str) {
        let line = self.surface.markup().progress_line(label, current, total);
        self.surface.replace_progress(line);
        self.sink.record(&StatusEvent::now(
            EventKind::Progress,
            Severity::Info,
            format!("{current}/{total} - {label}"),
        ));
    }

    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub const fn sink(&self) -> &L {
        &self.sink
    }

    pub fn into_parts(self) -> (S, L) {
        (self.surface, self.sink)
    }
}
