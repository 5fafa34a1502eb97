use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One decoded log line.
///
/// Only the fields needed for correlation and display are kept; anything else in
/// the JSON object is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<LogEntryData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lineno: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Set by the index builder, never read from input.
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub request: Option<Arc<Request>>,
}

/// Structured payload carried under `data`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntryData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_guid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_guid: Option<String>,
}

/// All entries sharing one correlation id point at the same `Request`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub request_id: String,
    pub app_guid: String,
    /// Empty when the first entry had no `Started <METHOD> "<path>` marker.
    pub method: String,
    pub uri_path: String,
}

impl LogEntry {
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }

    pub fn payload(&self) -> &LogEntryData {
        static EMPTY: LogEntryData = LogEntryData {
            request_guid: None,
            process_guid: None,
        };
        self.data.as_ref().unwrap_or(&EMPTY)
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request.as_deref().map(|r| r.request_id.as_str())
    }

    pub fn app_guid(&self) -> Option<&str> {
        self.request.as_deref().map(|r| r.app_guid.as_str())
    }

    pub fn http_method(&self) -> Option<&str> {
        self.request.as_deref().map(|r| r.method.as_str())
    }

    pub fn uri_path(&self) -> Option<&str> {
        self.request.as_deref().map(|r| r.uri_path.as_str())
    }
}
