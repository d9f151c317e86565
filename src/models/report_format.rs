use clap::ValueEnum;

/// Output format of the rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Plain statistics block for the console
    Text,

    /// Headline figures plus a status table
    Markdown,

    /// Machine readable summary
    Json,
}

impl ReportFormat {
    /// Conventional file extension for this format
    pub fn file_extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Markdown => "md",
            ReportFormat::Json => "json",
        }
    }
}
