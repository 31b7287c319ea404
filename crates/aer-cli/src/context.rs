use aer_config::AerConfig;
use aer_core::enums::Severity;
use aer_ui::{FanoutSink, JsonLinesSink, StatusLogger, TracingSink};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;
use crate::progress::TerminalSurface;
use crate::ui;

/// Per-invocation state handed to command handlers.
pub struct AppContext {
    pub config: AerConfig,
    pub format: OutputFormat,
    pub log: StatusLogger<TerminalSurface, FanoutSink>,
}

impl AppContext {
    #[must_use]
    pub fn new(config: AerConfig, flags: &GlobalFlags) -> Self {
        let mut sink = FanoutSink::new().with(TracingSink);
        if config.logging.has_file() {
            sink = sink.with(JsonLinesSink::new(config.logging.file.trim()));
        }
        let surface = TerminalSurface::new(ui::prefs(flags));

        Self {
            config,
            format: flags.format,
            log: StatusLogger::new(surface, sink),
        }
    }

    /// Report a load failure in the requested format and fail the command.
    pub fn fail_load(&mut self, component: &str, error: &aer_ui::UiError) -> anyhow::Result<()> {
        self.log
            .update_status(&format!("Could not load {component}: {error}"), Severity::Error);
        println!("{}", output::render_load_failure(component, error, self.format)?);
        anyhow::bail!("{component} input is invalid: {error}")
    }
}
