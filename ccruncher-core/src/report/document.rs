use crate::index::{CcLog, LogEntry, UNSPECIFIED};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub apps: Vec<AppReport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct AppReport<'a> {
    pub guid: &'a str,
    pub requests: Vec<RequestReport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RequestReport<'a> {
    pub request_id: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub method: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub uri_path: &'a str,
    pub log_entries: &'a [LogEntry],
}

impl<'a> Report<'a> {
    /// Apps are sorted by guid; requests keep first-seen order.
    pub fn build(log: &'a CcLog, include_unspecified: bool) -> Self {
        let mut guids = log.apps();
        guids.retain(|guid| include_unspecified || *guid != UNSPECIFIED);
        guids.sort_unstable();

        let apps = guids
            .into_iter()
            .map(|guid| AppReport {
                guid,
                requests: log
                    .requests_for_app(guid)
                    .unwrap_or_default()
                    .iter()
                    .map(|id| request_report(log, id))
                    .collect(),
            })
            .collect();

        Report { apps }
    }

    pub fn request_count(&self) -> usize {
        self.apps.iter().map(|a| a.requests.len()).sum()
    }
}

fn request_report<'a>(log: &'a CcLog, request_id: &'a str) -> RequestReport<'a> {
    let (method, uri_path) = log
        .request(request_id)
        .map(|r| (r.method.as_str(), r.uri_path.as_str()))
        .unwrap_or_default();

    RequestReport {
        request_id,
        method,
        uri_path,
        log_entries: log.entries_for_request(request_id),
    }
}
