use aer_ui::{Markup, StatusSurface};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::ui::UiPrefs;

/// Status surface drawn on stderr with indicatif.
///
/// The status line and the progress indicator are two spinner rows whose
/// message is overwritten in place. When the status line is disabled
/// (no terminal, `--quiet`) nothing is drawn and only the log sink sees events.
pub struct TerminalSurface {
    prefs: UiPrefs,
    multi: MultiProgress,
    status: Option<ProgressBar>,
    progress: Option<ProgressBar>,
}

impl TerminalSurface {
    #[must_use]
    pub fn new(prefs: UiPrefs) -> Self {
        let target = if prefs.status_line {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };
        Self {
            prefs,
            multi: MultiProgress::with_draw_target(target),
            status: None,
            progress: None,
        }
    }

    fn row(multi: &MultiProgress, slot: &mut Option<ProgressBar>) -> ProgressBar {
        slot.get_or_insert_with(|| {
            let bar = multi.add(ProgressBar::new_spinner());
            bar.set_style(
                ProgressStyle::with_template("{msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            bar
        })
        .clone()
    }
}

impl StatusSurface for TerminalSurface {
    fn markup(&self) -> Markup {
        Markup::Terminal {
            color: self.prefs.color,
        }
    }

    fn replace_status(&mut self, line: String) {
        if self.prefs.status_line {
            Self::row(&self.multi, &mut self.status).set_message(line);
        }
    }

    fn replace_progress(&mut self, line: String) {
        if self.prefs.status_line {
            Self::row(&self.multi, &mut self.progress).set_message(line);
        }
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        if let Some(bar) = &self.progress {
            bar.finish_and_clear();
        }
        if let Some(bar) = &self.status {
            bar.finish();
        }
    }
}
