use crate::index::cclog::CcLog;
use crate::index::error::ParseError;
use crate::index::extract::{app_guid, method_and_uri_path, request_id};
use crate::index::types::{LogEntry, Request};
use serde::Deserialize;
use serde_json::Value;
use std::io::BufRead;
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// Parse a whole stream into a fresh index.
///
/// Stops at the first line that cannot be read or decoded. Callers that want the
/// partial index should drive an [`IndexBuilder`] themselves.
pub fn parse_log<R: BufRead>(reader: R) -> Result<CcLog, ParseError> {
    let mut builder = IndexBuilder::new();
    builder.ingest(reader)?;
    Ok(builder.into_log())
}

/// Incrementally builds a [`CcLog`] from log lines.
///
/// A request id moves from unseen to seen exactly once, on its first entry. That
/// entry alone decides the request's app guid, method and path.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    log: CcLog,
    lines: usize,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume `reader` line by line until EOF or the first failure.
    pub fn ingest<R: BufRead>(&mut self, reader: R) -> Result<(), ParseError> {
        for line in reader.lines() {
            let line = line.map_err(|source| {
                let line = self.lines + 1;
                warn!(line, error = %source, "failed to read log line");
                ParseError::Read { line, source }
            })?;
            self.ingest_line(&line)?;
        }

        info!(
            lines = self.lines,
            requests = self.log.request_count(),
            apps = self.log.request_ids.len(),
            "log parsed"
        );

        Ok(())
    }

    /// Decode one JSON line and add it to the index.
    pub fn ingest_line(&mut self, line: &str) -> Result<(), ParseError> {
        self.lines += 1;
        let line_number = self.lines;

        // Going through `Value` lets a repeated key keep its last value.
        let entry = serde_json::from_str::<Value>(line)
            .and_then(|value| LogEntry::deserialize(value))
            .map_err(|source| {
                warn!(line = line_number, error = %source, "failed to decode log line");
                ParseError::Decode {
                    line: line_number,
                    source,
                }
            })?;

        trace!(line = line_number, "decoded log line");
        self.ingest_entry(entry);
        Ok(())
    }

    /// Bind an already decoded entry to its request and append it.
    pub fn ingest_entry(&mut self, mut entry: LogEntry) {
        let id = request_id(entry.message(), entry.payload());

        let request = match self.log.request(&id) {
            Some(existing) => Arc::clone(existing),
            None => self.register(&id, &entry),
        };

        entry.request = Some(request);
        self.log.entries.entry(id).or_default().push(entry);
    }

    fn register(&mut self, id: &str, entry: &LogEntry) -> Arc<Request> {
        let app_guid = app_guid(entry.message(), entry.payload());
        let (method, uri_path) = method_and_uri_path(entry.message());

        debug!(request_id = id, app_guid = %app_guid, method = %method, uri_path = %uri_path, "new request");

        self.log
            .request_ids
            .entry(app_guid.clone())
            .or_default()
            .push(id.to_string());

        Arc::new(Request {
            request_id: id.to_string(),
            app_guid,
            method,
            uri_path,
        })
    }

    /// Lines consumed so far, including a line that failed to decode.
    pub fn line_count(&self) -> usize {
        self.lines
    }

    pub fn log(&self) -> &CcLog {
        &self.log
    }

    pub fn into_log(self) -> CcLog {
        self.log
    }
}
