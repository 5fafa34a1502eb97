use crate::cli::{load_log, write_apps, write_entries, write_requests};
use crate::index::{CcLog, parse_log};
use crate::report::ReportFormat;
use pretty_assertions::assert_eq;
use std::fs;
use std::io::Cursor;
use tempfile::tempdir;

fn sample_log() -> CcLog {
    let lines = [
        r#"{"message":"boot","log_level":"info"}"#,
        r#"{"message":"Started GET \"/v2/apps/zeta/stats\" vcap-request-id: r1","log_level":"info"}"#,
        r#"{"message":"staged","data":{"request_guid":"r2","process_guid":"alpha"}}"#,
        r#"{"message":"Completed 200 vcap-request-id: r1","log_level":"info"}"#,
        r#"{"message":"Started GET \"/v2/apps/zeta\" vcap-request-id: r3"}"#,
    ];
    parse_log(Cursor::new(lines.join("\n"))).unwrap()
}

fn output(f: impl FnOnce(&mut Vec<u8>)) -> String {
    let mut buf = Vec::new();
    f(&mut buf);
    String::from_utf8(buf).unwrap()
}

#[test]
fn apps_are_sorted_without_unspecified() {
    let log = sample_log();

    let out = output(|buf| write_apps(&log, false, buf).unwrap());

    assert_eq!(out, "alpha\nzeta\n");
}

#[test]
fn apps_can_include_unspecified() {
    let log = sample_log();

    let out = output(|buf| write_apps(&log, true, buf).unwrap());

    assert_eq!(out, "alpha\nunspecified\nzeta\n");
}

#[test]
fn requests_follow_first_seen_order() {
    let log = sample_log();

    let out = output(|buf| write_requests(&log, "zeta", buf).unwrap());

    assert_eq!(out, "r1\nr3\n");
}

#[test]
fn requests_for_unknown_app_print_nothing() {
    let log = sample_log();

    let out = output(|buf| write_requests(&log, "ghost", buf).unwrap());

    assert_eq!(out, "");
}

#[test]
fn entries_render_in_requested_format() {
    let log = sample_log();

    let out = output(|buf| write_entries(&log, "r1", ReportFormat::Pretty, false, buf).unwrap());

    assert_eq!(
        out,
        "[info] Started GET \"/v2/apps/zeta/stats\" vcap-request-id: r1\n\
         [info] Completed 200 vcap-request-id: r1\n"
    );
}

#[test]
fn entries_for_unknown_request_print_nothing() {
    let log = sample_log();

    let out = output(|buf| write_entries(&log, "nope", ReportFormat::Yaml, false, buf).unwrap());

    assert_eq!(out, "");
}

#[test]
fn load_log_names_the_bad_line() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("badlog");
    fs::write(&path, "{\"message\":\"ok\"}\n{\"message\":\"ok\"}\nnot json\n").unwrap();

    // Act
    let err = load_log(&path).unwrap_err();

    // Assert
    let chain = format!("{err:#}");
    assert!(chain.contains("failed to decode log line 3"), "{chain}");
}

#[test]
fn load_log_reports_missing_file() {
    let dir = tempdir().unwrap();

    let err = load_log(&dir.path().join("missing.log")).unwrap_err();

    assert!(err.to_string().starts_with("could not open log file"));
}
