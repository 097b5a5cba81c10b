// crates/cli/src/presentation.rs
use crate::error::Result;
use crate::options::OutputFormat;
use code_tally_engine::language::ExtensionTable;
use code_tally_engine::report::Report;
use std::fmt::Write;

/// Render `report` in the requested format.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => report.to_string(),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            json
        }
        OutputFormat::Yaml => serde_yaml::to_string(report)?,
    })
}

/// One line per language, in lookup order.
#[must_use]
pub fn render_languages(table: &ExtensionTable) -> String {
    let mut out = String::new();
    for (language, extensions) in table.languages().iter() {
        let _ = writeln!(out, "{language}: {}", extensions.join(", "));
    }
    out
}
