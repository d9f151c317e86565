mod models;
mod service;
mod utils;

use crate::models::mapping_file::load_mapping_document;
use crate::models::report_format::ReportFormat;
use crate::service::aggregate::summarize_document;
use crate::service::report::{render, write_report};
use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "site-migration-report")]
#[command(about = "Summarize site migration progress from a site mapping file", long_about = None)]
struct Cli {
    #[arg(
        short = 'i',
        long = "input",
        default_value = "site-mapping.json",
        env = "SITE_MIGRATION_MAPPING"
    )]
    input_file: PathBuf,

    #[arg(short = 'f', long = "format", value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    #[arg(short = 'o', long = "output")]
    output_file: Option<PathBuf>,

    #[arg(
        short = 'l',
        long = "log-level",
        default_value = "info",
        env = "LOG_LEVEL"
    )]
    log_level: String,

    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    #[arg(short = 'v', long = "validate-only")]
    validate_only: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(parse_log_level(&args.log_level, args.quiet))
        .format_timestamp_secs()
        .init();

    info!("site-migration-report starting...");

    let document = load_mapping_document(&args.input_file)
        .context("Failed to load site mapping")?;
    let summary = summarize_document(&document).with_context(|| {
        format!(
            "Failed to aggregate site mapping '{}'",
            args.input_file.display()
        )
    })?;
    debug!("Computed summary: {:?}", &summary);

    if args.validate_only {
        info!("Site mapping is valid. Exiting (--validate-only mode).");
        return Ok(());
    }

    let as_of = chrono::Local::now().date_naive();
    let rendered = render(&summary, args.format, as_of).context("Failed to render report")?;
    write_report(&rendered, args.output_file.as_deref(), args.format)
        .context("Failed to write report")?;

    Ok(())
}

fn parse_log_level(level: &str, quiet: bool) -> log::LevelFilter {
    if quiet {
        return log::LevelFilter::Warn;
    }
    match level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    }
}
