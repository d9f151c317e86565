use crate::models::error::{ReportError, Result};
use crate::models::report_format::ReportFormat;
use crate::models::summary::MigrationSummary;
use crate::utils::format::{format_item_estimate, format_percent, format_storage, format_thousands};
use chrono::NaiveDate;
use log::info;
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// JSON shape of a rendered report
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryReport<'a> {
    as_of: String,
    complete_percent: f64,
    #[serde(flatten)]
    summary: &'a MigrationSummary,
}

/// Renders a summary in the requested format.
pub fn render(summary: &MigrationSummary, format: ReportFormat, as_of: NaiveDate) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(summary, as_of)),
        ReportFormat::Markdown => Ok(render_markdown(summary, as_of)),
        ReportFormat::Json => render_json(summary, as_of),
    }
}

fn format_as_of(as_of: NaiveDate) -> String {
    as_of.format("%B %d, %Y").to_string()
}

fn render_text(summary: &MigrationSummary, as_of: NaiveDate) -> String {
    // Writing to a String cannot fail
    let mut out = String::new();
    let _ = writeln!(out, "Migration Statistics (as of {}):", format_as_of(as_of));
    let _ = writeln!(out, "  Total Sites: {}", summary.total_sites);
    let _ = writeln!(
        out,
        "  Complete:    {} ({})",
        summary.complete_sites,
        format_percent(summary.complete_percent())
    );
    let _ = writeln!(out, "  In Progress: {}", summary.in_progress_sites);
    let _ = writeln!(out, "  Pending:     {}", summary.pending_sites);
    if summary.unrecognized_status_sites > 0 {
        let _ = writeln!(
            out,
            "    (includes {} with an unrecognized status)",
            summary.unrecognized_status_sites
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "  Total Storage: {}", format_storage(summary.total_storage_gb));
    let _ = writeln!(out, "  Total Items:   {}", format_thousands(summary.total_items));
    out
}

fn render_markdown(summary: &MigrationSummary, as_of: NaiveDate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Migration Status");
    let _ = writeln!(out);
    let _ = writeln!(out, "_As of {}_", format_as_of(as_of));
    let _ = writeln!(out);
    let _ = writeln!(out, "- **{} Sites**", summary.total_sites);
    let _ = writeln!(out, "- **{:.2} TB of Content**", summary.total_storage_tb);
    let _ = writeln!(out, "- **{} Files**", format_item_estimate(summary.total_items));
    let _ = writeln!(out);
    let _ = writeln!(out, "| Status | Sites | Share |");
    let _ = writeln!(out, "|---|---:|---:|");
    let _ = writeln!(
        out,
        "| Complete | {} | {} |",
        summary.complete_sites,
        format_percent(summary.complete_percent())
    );
    let _ = writeln!(
        out,
        "| In Progress | {} | {} |",
        summary.in_progress_sites,
        format_percent(summary.in_progress_percent())
    );
    let _ = writeln!(
        out,
        "| Pending | {} | {} |",
        summary.pending_sites,
        format_percent(summary.pending_percent())
    );
    let _ = writeln!(out);
    if summary.unrecognized_status_sites > 0 {
        let _ = writeln!(
            out,
            "> {} pending site(s) carry an unrecognized status.",
            summary.unrecognized_status_sites
        );
        let _ = writeln!(out);
    }
    let _ = writeln!(
        out,
        "Total storage: {}. Total items: {}.",
        format_storage(summary.total_storage_gb),
        format_thousands(summary.total_items)
    );
    out
}

fn render_json(summary: &MigrationSummary, as_of: NaiveDate) -> Result<String> {
    let report = SummaryReport {
        as_of: as_of.format("%Y-%m-%d").to_string(),
        complete_percent: summary.complete_percent(),
        summary,
    };
    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}

/// Writes a rendered report to `output`, or to stdout when no path is given.
///
/// A path without an extension gets the conventional one for `format`.
/// Returns the path actually written.
pub fn write_report(
    rendered: &str,
    output: Option<&Path>,
    format: ReportFormat,
) -> Result<Option<PathBuf>> {
    let Some(path) = output else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;
        return Ok(None);
    };

    let mut path = path.to_path_buf();
    if path.extension().is_none() {
        path.set_extension(format.file_extension());
    }

    fs::write(&path, rendered).map_err(|cause| ReportError::OutputWrite {
        path: path.clone(),
        cause,
    })?;
    info!("Report written to: {}", path.display());
    Ok(Some(path))
}
