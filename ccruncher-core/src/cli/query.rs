use crate::cli::input::load_log;
use crate::index::{CcLog, UNSPECIFIED};
use crate::logging::default_color;
use crate::report::{ReportFormat, render_entries};
use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

pub fn run_apps(path: &Path, include_unspecified: bool) -> Result<()> {
    let log = load_log(path)?;
    write_apps(&log, include_unspecified, &mut io::stdout().lock())
}

pub fn run_requests(path: &Path, app_guid: &str) -> Result<()> {
    let log = load_log(path)?;
    write_requests(&log, app_guid, &mut io::stdout().lock())
}

pub fn run_entries(path: &Path, request_id: &str, format: ReportFormat) -> Result<()> {
    let log = load_log(path)?;
    write_entries(&log, request_id, format, default_color(), &mut io::stdout().lock())
}

/// One app guid per line, sorted.
pub fn write_apps<W: Write>(log: &CcLog, include_unspecified: bool, out: &mut W) -> Result<()> {
    let mut apps = log.apps();
    apps.retain(|guid| include_unspecified || *guid != UNSPECIFIED);
    apps.sort_unstable();

    for guid in apps {
        writeln!(out, "{guid}")?;
    }
    Ok(())
}

/// Request ids for an app in first-seen order. Unknown apps print nothing.
pub fn write_requests<W: Write>(log: &CcLog, app_guid: &str, out: &mut W) -> Result<()> {
    for id in log.requests_for_app(app_guid).unwrap_or_default() {
        writeln!(out, "{id}")?;
    }
    Ok(())
}

pub fn write_entries<W: Write>(
    log: &CcLog,
    request_id: &str,
    format: ReportFormat,
    color: bool,
    out: &mut W,
) -> Result<()> {
    let entries = log.entries_for_request(request_id);
    if entries.is_empty() {
        return Ok(());
    }

    out.write_all(render_entries(entries, format, color)?.as_bytes())?;
    Ok(())
}
