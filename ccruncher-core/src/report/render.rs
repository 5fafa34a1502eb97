use crate::index::LogEntry;
use crate::report::document::Report;
use crate::report::error::RenderError;
use crate::report::format::ReportFormat;
use crate::report::pretty::{pretty_entries, pretty_report};
use serde::Serialize;

pub fn render_report(
    report: &Report<'_>,
    format: ReportFormat,
    color: bool,
) -> Result<String, RenderError> {
    match format {
        ReportFormat::Yaml => to_yaml(report),
        ReportFormat::Json => to_json(report),
        ReportFormat::Pretty => Ok(pretty_report(report, color)),
    }
}

pub fn render_entries(
    entries: &[LogEntry],
    format: ReportFormat,
    color: bool,
) -> Result<String, RenderError> {
    match format {
        ReportFormat::Yaml => to_yaml(&entries),
        ReportFormat::Json => to_json(&entries),
        ReportFormat::Pretty => Ok(pretty_entries(entries, color)),
    }
}

impl LogEntry {
    /// A single entry, including its bound request, as a YAML document.
    pub fn render_yaml(&self) -> Result<String, RenderError> {
        to_yaml(self)
    }
}

fn to_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String, RenderError> {
    Ok(serde_yaml::to_string(value)?)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(value)?)
}
