use std::fmt::Display;

use aer_core::responses::LoadErrorResponse;
use aer_ui::render_load_error;
use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a command result: the text view for `table`, the response otherwise.
pub fn render<T: Serialize>(view: &str, value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(view.to_string()),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a command result in the requested format.
pub fn output<T: Serialize>(view: &str, value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(view, value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render a load failure: the visible error block for `table`, a
/// [`LoadErrorResponse`] otherwise.
pub fn render_load_failure(
    component: &str,
    error: &impl Display,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let view = render_load_error(component, error);
    let response = LoadErrorResponse {
        component: component.to_string(),
        error: error.to_string(),
    };
    render(&view, &response, format)
}
