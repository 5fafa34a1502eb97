use crate::index::types::{LogEntry, Request};
use std::collections::HashMap;
use std::sync::Arc;

/// The correlation index produced by one pass over a log stream.
///
/// Every request id listed under an app has at least one entry, and every
/// request id with entries is listed under exactly one app.
#[derive(Debug, Default)]
pub struct CcLog {
    pub(crate) entries: HashMap<String, Vec<LogEntry>>,
    pub(crate) request_ids: HashMap<String, Vec<String>>,
}

impl CcLog {
    /// Entries for `request_id` in input order. Unknown ids yield an empty slice.
    pub fn entries_for_request(&self, request_id: &str) -> &[LogEntry] {
        self.entries
            .get(request_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every entry in the index. Order across requests is unspecified.
    pub fn entries(&self) -> Vec<&LogEntry> {
        self.entries.values().flatten().collect()
    }

    /// Distinct app guids, including `unspecified` when it was used.
    pub fn apps(&self) -> Vec<&str> {
        self.request_ids.keys().map(String::as_str).collect()
    }

    /// Request ids for `app_guid` in first-seen order.
    pub fn requests_for_app(&self, app_guid: &str) -> Option<&[String]> {
        self.request_ids.get(app_guid).map(Vec::as_slice)
    }

    pub fn request(&self, request_id: &str) -> Option<&Arc<Request>> {
        self.entries
            .get(request_id)?
            .first()
            .and_then(|e| e.request.as_ref())
    }

    pub fn contains_request(&self, request_id: &str) -> bool {
        self.entries.contains_key(request_id)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn request_count(&self) -> usize {
        self.entries.len()
    }
}
