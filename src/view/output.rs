use clap::ValueEnum;

use super::dashboard::render_dashboard_page;
use crate::error::AppError;
use crate::stats::DashboardReport;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

/// # Errors
///
/// Will return `Err` if the report cannot be serialized to json
pub fn render_report(report: &DashboardReport, format: OutputFormat) -> Result<String, AppError> {
    Ok(match format {
        OutputFormat::Text => report.messages().join("\n"),
        OutputFormat::Html => render_dashboard_page("Golf dashboard", report).into_string(),
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
    })
}
