//! Rendering a [`Comparison`] for display or machine consumption.

use crate::compare::{Comparison, Stats};
use crate::constant::MARK_OPEN;
use chrono::Local;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

const REPORTS_DIR: &str = "reports";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Colour scheme for highlighted spans
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HighlightColor {
    #[default]
    Blue,
    Green,
    Black,
}

impl HighlightColor {
    pub fn css_class(self) -> &'static str {
        match self {
            HighlightColor::Blue => "blue",
            HighlightColor::Green => "green",
            HighlightColor::Black => "black",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}

/// Render the comparison in the requested format
pub fn render(
    comparison: &Comparison,
    format: OutputFormat,
    color: HighlightColor,
) -> Result<String, ReportError> {
    match format {
        OutputFormat::Html => Ok(render_html(comparison, color)),
        OutputFormat::Json => render_json(comparison),
    }
}

/// Render an HTML fragment: the side-by-side table followed by the stats.
///
/// Row text is already escaped, so it is embedded as is; only the highlight
/// markers get the colour class attached.
pub fn render_html(comparison: &Comparison, color: HighlightColor) -> String {
    let mut html = String::new();
    let generated = Local::now().format("%Y-%m-%d %H:%M:%S");

    html.push_str("<div class=\"side-diff\">\n");
    html.push_str(&format!(
        "<p class=\"generated\">Generated {}</p>\n",
        generated
    ));

    if comparison.is_empty() {
        html.push_str("<p class=\"empty\">Nothing to compare.</p>\n</div>\n");
        return html;
    }

    let open_tag = format!("<em class=\"{}\">", color.css_class());

    html.push_str("<table class=\"diff\">\n");
    html.push_str("<tr><th>A</th><th>B</th></tr>\n");
    for row in &comparison.rows {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            row.text_a.replace(MARK_OPEN, &open_tag),
            row.text_b.replace(MARK_OPEN, &open_tag)
        ));
    }
    html.push_str("</table>\n");

    html.push_str("<table class=\"stats\">\n");
    html.push_str("<tr><th></th><th>A</th><th>B</th></tr>\n");
    let stats_rows: [(&str, fn(&Stats) -> usize); 4] = [
        ("Characters (no spaces)", |s| s.chars_only),
        ("Characters (with spaces)", |s| s.with_spaces),
        ("Characters (with newlines)", |s| s.with_newlines),
        ("Words", |s| s.words),
    ];
    for (label, value) in stats_rows {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            label,
            value(&comparison.stats_a),
            value(&comparison.stats_b)
        ));
    }
    html.push_str("</table>\n</div>\n");

    html
}

/// Serialize the comparison as pretty-printed JSON
pub fn render_json(comparison: &Comparison) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(comparison)?)
}

/// Write a rendered report to `path`
pub fn write_report(path: &Path, contents: &str) -> Result<(), ReportError> {
    fs::write(path, contents)?;
    info!("Report written to {:?}", path);
    Ok(())
}

/// Save a report under `data_dir/reports` with a timestamped file name
pub fn save_report(
    data_dir: &Path,
    contents: &str,
    format: OutputFormat,
) -> Result<PathBuf, ReportError> {
    let reports_dir = data_dir.join(REPORTS_DIR);
    fs::create_dir_all(&reports_dir)?;

    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let file_path = reports_dir.join(format!("{}.{}", timestamp, format.extension()));
    write_report(&file_path, contents)?;
    Ok(file_path)
}
