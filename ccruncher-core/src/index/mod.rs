//! Request correlation index
//!
//! Cloud Controller style logs are a stream of JSON objects, one per line. Each line
//! belongs to some logical request, and each request was issued against some app.
//! This module reads that stream once, front to back, and groups the lines twice:
//!
//! - request id -> entries, in the order the lines arrived
//! - app guid -> request ids, in the order the requests were first seen
//!
//! Identifiers come either from structured `data` fields or from patterns in the free
//! text `message`. When neither yields anything the sentinel `unspecified` is used.
//!
//! The first line that mentions a request id decides that request's app guid, HTTP
//! method and path. Later lines for the same id reuse the same `Request`.
//!
//! The overall data processing architecture is:
//!
//! BufRead
//! IndexBuilder::ingest_line
//! LogEntry
//! extract (request id, app guid, method/path)
//! CcLog
//!

mod builder;
mod cclog;
mod constants;
mod error;
mod extract;
mod types;


pub use builder::{IndexBuilder, parse_log};
pub use cclog::CcLog;
pub use constants::UNSPECIFIED;
pub use error::ParseError;
pub use extract::{app_guid, method_and_uri_path, request_id};
pub use types::{LogEntry, LogEntryData, Request};
