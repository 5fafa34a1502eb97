use crate::index::LogEntry;
use crate::report::document::{Report, RequestReport};
use owo_colors::OwoColorize;
use std::fmt::Write;

pub fn pretty_report(report: &Report<'_>, color: bool) -> String {
    let mut out = String::new();

    for app in &report.apps {
        let header = format!("app {}", app.guid);
        if color {
            let _ = writeln!(out, "{}", header.bold());
        } else {
            let _ = writeln!(out, "{header}");
        }

        for request in &app.requests {
            out.push_str(&request_header(request, color));
            for entry in request.log_entries {
                let _ = writeln!(out, "    {}", entry_line(entry, color));
            }
        }
        out.push('\n');
    }

    out
}

pub fn pretty_entries(entries: &[LogEntry], color: bool) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(out, "{}", entry_line(entry, color));
    }
    out
}

fn request_header(request: &RequestReport<'_>, color: bool) -> String {
    let mut line = format!("  request {}", request.request_id);
    if !request.method.is_empty() {
        let _ = write!(line, " → {} {}", request.method, request.uri_path);
    }
    let _ = write!(line, " ({} entries)", request.log_entries.len());

    if color {
        format!("{}\n", line.cyan())
    } else {
        format!("{line}\n")
    }
}

fn entry_line(entry: &LogEntry, color: bool) -> String {
    let level = entry.log_level.as_deref().unwrap_or("-");
    let level = if color {
        match level {
            "error" | "fatal" => level.red().to_string(),
            "warn" => level.yellow().to_string(),
            _ => level.dimmed().to_string(),
        }
    } else {
        level.to_string()
    };

    let mut line = String::new();
    if let Some(ts) = entry.timestamp {
        let _ = write!(line, "{ts:.3} ");
    }
    let _ = write!(line, "[{level}]");
    if let Some(source) = &entry.source {
        let _ = write!(line, " {source}:");
    }
    let _ = write!(line, " {}", entry.message());
    line
}
