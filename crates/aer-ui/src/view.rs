use std::fmt::Display;

use crate::markup::sanitize_terminal;

pub(crate) const RULE: &str = "------------------------------------------------------------";

pub(crate) const fn checkbox(selected: bool) -> &'static str {
    if selected { "[x]" } else { "[ ]" }
}

/// Visible error block shown in place of a component that failed to load.
#[must_use]
pub fn render_load_error(component: &str, error: &impl Display) -> String {
    let message = sanitize_terminal(&error.to_string());
    format!(
        "!! Unable to display {component}\n{RULE}\n{message}\n{RULE}\nFix the input table and load it again."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_block_names_component_and_cause() {
        let block = render_load_error("review panel", &"row 2: unknown status category 'Active'");
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[0], "!! Unable to display review panel");
        assert_eq!(lines[2], "row 2: unknown status category 'Active'");
        assert!(lines.last().is_some_and(|line| line.starts_with("Fix the input")));
    }
}
