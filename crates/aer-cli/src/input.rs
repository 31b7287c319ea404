use std::path::Path;

use anyhow::{Context, bail};
use serde_json::Value;

/// Read table rows from a `.jsonl`/`.ndjson` file or a `.json` array.
pub fn load_rows(path: &Path) -> anyhow::Result<Vec<Value>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("jsonl" | "ndjson") => serde_jsonlines::json_lines(path)
            .with_context(|| format!("failed to open {}", path.display()))?
            .collect::<Result<Vec<Value>, _>>()
            .with_context(|| format!("failed to parse JSON lines in {}", path.display())),
        Some("json") => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            match serde_json::from_str::<Value>(&text)
                .with_context(|| format!("failed to parse JSON in {}", path.display()))?
            {
                Value::Array(rows) => Ok(rows),
                _ => bail!("{} must contain a JSON array of rows", path.display()),
            }
        }
        _ => bail!(
            "unsupported input '{}': expected a .jsonl, .ndjson or .json file",
            path.display()
        ),
    }
}
