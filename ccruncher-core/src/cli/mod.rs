mod input;
mod query;
mod report;

#[cfg(test)]
mod tests;

pub use input::load_log;
pub use query::{run_apps, run_entries, run_requests, write_apps, write_entries, write_requests};
pub use report::{ReportOverrides, run_report, write_report};
