//! Identifier extraction.
//!
//! Each identifier is resolved by an ordered list of strategies. A strategy is a
//! pure function over the entry's message and structured payload; the first one
//! returning a non-empty value wins. Nothing here can fail.

use crate::index::constants::{
    APP_GUID_PATTERN, METHOD_AND_URI_PATH_PATTERN, UNSPECIFIED, VCAP_REQUEST_ID_PATTERN,
};
use crate::index::types::LogEntryData;
use once_cell::sync::Lazy;
use regex::Regex;

static VCAP_REQUEST_ID: Lazy<Regex> = Lazy::new(|| compile(VCAP_REQUEST_ID_PATTERN));
static APP_GUID: Lazy<Regex> = Lazy::new(|| compile(APP_GUID_PATTERN));
static METHOD_AND_URI_PATH: Lazy<Regex> = Lazy::new(|| compile(METHOD_AND_URI_PATH_PATTERN));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

type Strategy = for<'a> fn(&'a str, &'a LogEntryData) -> Option<&'a str>;

/// Marker in the message wins over the structured field.
const REQUEST_ID_STRATEGIES: &[Strategy] = &[request_id_from_message, request_id_from_data];

/// `/v2/apps/<guid>` in the message wins over the process guid.
const APP_GUID_STRATEGIES: &[Strategy] = &[app_guid_from_message, app_guid_from_data];

fn first_match(strategies: &[Strategy], message: &str, data: &LogEntryData) -> String {
    strategies
        .iter()
        .find_map(|strategy| strategy(message, data).filter(|s| !s.is_empty()))
        .unwrap_or(UNSPECIFIED)
        .to_string()
}

pub fn request_id(message: &str, data: &LogEntryData) -> String {
    first_match(REQUEST_ID_STRATEGIES, message, data)
}

pub fn app_guid(message: &str, data: &LogEntryData) -> String {
    first_match(APP_GUID_STRATEGIES, message, data)
}

/// Returns `(method, path)`, or two empty strings when the message is not a
/// `Started <METHOD> "<path>` access line.
pub fn method_and_uri_path(message: &str) -> (String, String) {
    METHOD_AND_URI_PATH
        .captures(message)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .unwrap_or_default()
}

//-----------------------------------------------------------------------------
// Strategies
//-----------------------------------------------------------------------------

fn request_id_from_message<'a>(message: &'a str, _data: &'a LogEntryData) -> Option<&'a str> {
    capture(&VCAP_REQUEST_ID, message)
}

fn request_id_from_data<'a>(_message: &'a str, data: &'a LogEntryData) -> Option<&'a str> {
    data.request_guid.as_deref()
}

fn app_guid_from_message<'a>(message: &'a str, _data: &'a LogEntryData) -> Option<&'a str> {
    capture(&APP_GUID, message)
}

fn app_guid_from_data<'a>(_message: &'a str, data: &'a LogEntryData) -> Option<&'a str> {
    data.process_guid.as_deref()
}

fn capture<'a>(rx: &Regex, message: &'a str) -> Option<&'a str> {
    rx.captures(message)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
