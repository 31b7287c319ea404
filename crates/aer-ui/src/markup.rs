//! Escaping and line formatting for the surfaces a status line can land on.
//!
//! Record data is untrusted: a department called `<script>` must reach an
//! HTML surface as text, and an ESC byte must not reach a terminal.

use aer_core::enums::Severity;

/// Markup language understood by a status surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    Html,
    Terminal { color: bool },
}

impl Markup {
    /// Escape untrusted text for this markup.
    #[must_use]
    pub fn escape(self, text: &str) -> String {
        match self {
            Self::Html => escape_html(text),
            Self::Terminal { .. } => sanitize_terminal(text),
        }
    }

    /// Render a status message coloured by severity.
    #[must_use]
    pub fn status_line(self, message: &str, severity: Severity) -> String {
        let text = self.escape(message);
        match self {
            Self::Html => format!("<span style='color:{};'>{text}</span>", severity.css_color()),
            Self::Terminal { color: true } => {
                format!("\u{1b}[{}m{text}\u{1b}[0m", severity.ansi_code())
            }
            Self::Terminal { color: false } => text,
        }
    }

    /// Render a progress indicator. A zero total renders as 0%.
    #[must_use]
    pub fn progress_line(self, label: &str, current: u64, total: u64) -> String {
        let text = self.escape(label);
        let percent = percent(current, total);
        match self {
            Self::Html => format!("<b>{text}</b> ({current}/{total} - {percent}%)"),
            Self::Terminal { .. } => format!("{text} ({current}/{total} - {percent}%)"),
        }
    }
}

/// Whole-number percentage, `0` when `total` is zero.
#[must_use]
pub fn percent(current: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    let scaled = u128::from(current) * 100 / u128::from(total);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

#[must_use]
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Drop control characters; line breaks and tabs collapse to a space so a
/// value cannot open a second visible line.
#[must_use]
pub fn sanitize_terminal(input: &str) -> String {
    input
        .chars()
        .filter_map(|ch| match ch {
            '\n' | '\r' | '\t' => Some(' '),
            ch if ch.is_control() => None,
            ch => Some(ch),
        })
        .collect()
}
