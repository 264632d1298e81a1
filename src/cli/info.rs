use anyhow::{Context, Result};
use std::fmt::{self, Write as _};
use std::path::{Path, PathBuf};

use fcsparse::{FcsFile, ParserConfig};

/// Longest value printed in full by the text summary
const MAX_VALUE_PREVIEW: usize = 100;

/// What the info command prints
#[derive(Debug, Default)]
pub struct InfoOptions {
    /// Print JSON instead of the text summary
    pub json: bool,
    /// Indent JSON output
    pub pretty: bool,
    /// Restrict output to these keywords
    pub keywords: Vec<String>,
}

/// Display information about an FCS file
pub fn run(file: PathBuf, config: &ParserConfig, options: &InfoOptions) -> Result<()> {
    let fcs = super::load(&file, config)?;

    let output = if options.json {
        render_json(&fcs, options)?
    } else {
        render_text(&fcs, &file, &options.keywords)?
    };
    print!("{}", output);

    Ok(())
}

/// JSON output: the whole file, or only the requested keywords
fn render_json(fcs: &FcsFile, options: &InfoOptions) -> Result<String> {
    let mut json = if options.keywords.is_empty() {
        if options.pretty {
            fcs.to_json_pretty()
        } else {
            fcs.to_json()
        }
    } else {
        let selected: serde_json::Map<String, serde_json::Value> = options
            .keywords
            .iter()
            .map(|k| {
                let value = fcs
                    .text()
                    .get_ignore_case(k)
                    .map_or(serde_json::Value::Null, serde_json::Value::from);
                (k.clone(), value)
            })
            .collect();
        if options.pretty {
            serde_json::to_string_pretty(&selected)
        } else {
            serde_json::to_string(&selected)
        }
    }
    .context("Failed to serialize FCS file to JSON")?;

    json.push('\n');
    Ok(json)
}

/// Human-readable summary
fn render_text(fcs: &FcsFile, path: &Path, keywords: &[String]) -> Result<String, fmt::Error> {
    let header = fcs.header();
    let text = fcs.text();
    let mut out = String::new();

    writeln!(out, "FCS File Information")?;
    writeln!(out, "====================")?;
    writeln!(out, "File: {}", path.display())?;
    writeln!(out, "Version: {}", header.version)?;
    writeln!(out)?;

    writeln!(out, "Segments:")?;
    writeln!(
        out,
        "  TEXT:     {:>10} - {:<10} ({} bytes)",
        header.text_segment_start,
        header.text_segment_end,
        header.text_segment_size()
    )?;
    writeln!(
        out,
        "  DATA:     {:>10} - {:<10} ({} bytes)",
        header.data_segment_start,
        header.data_segment_end,
        header.data_segment_size()
    )?;
    writeln!(
        out,
        "  ANALYSIS: {:>10} - {:<10} ({} bytes)",
        header.analysis_segment_start,
        header.analysis_segment_end,
        header.analysis_segment_size()
    )?;
    writeln!(out)?;

    writeln!(
        out,
        "Delimiter: {:?} (0x{:02X})",
        fcs.delimiter(),
        u32::from(fcs.delimiter())
    )?;
    if let Some(count) = text.parameter_count() {
        writeln!(out, "Parameters: {}", count)?;
    }
    if let Some(events) = text.event_count() {
        writeln!(out, "Events: {}", events)?;
    }
    writeln!(out)?;

    if keywords.is_empty() {
        writeln!(out, "Keywords ({}):", text.len())?;
        for key in text.sorted_keywords() {
            let value = text.get(key).unwrap_or_default();
            writeln!(out, "  {}: {}", key, preview(value))?;
        }
    } else {
        writeln!(out, "Keywords:")?;
        for key in keywords {
            match text.get_ignore_case(key) {
                Some(value) => writeln!(out, "  {}: {}", key, preview(value))?,
                None => writeln!(out, "  {}: <missing>", key)?,
            }
        }
    }

    Ok(out)
}

fn preview(value: &str) -> String {
    let len = value.chars().count();
    if len > MAX_VALUE_PREVIEW {
        let head: String = value.chars().take(MAX_VALUE_PREVIEW).collect();
        format!("{}... ({} chars)", head, len)
    } else {
        value.to_string()
    }
}
