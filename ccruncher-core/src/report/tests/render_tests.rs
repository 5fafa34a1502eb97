use crate::index::parse_log;
use crate::report::{Report, ReportFormat, render_entries, render_report};
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::io::Cursor;
use std::str::FromStr;

const LINES: &str = concat!(
    r#"{"timestamp":10.5,"message":"Started GET \"/v2/apps/app-1/stats\" vcap-request-id: r1","log_level":"info","source":"cc.api"}"#,
    "\n",
    r#"{"timestamp":11.0,"message":"Completed 200 vcap-request-id: r1","log_level":"error","source":"cc.api"}"#,
);

#[test]
fn json_report_nests_entries_under_requests() {
    // Arrange
    let log = parse_log(Cursor::new(LINES)).unwrap();
    let report = Report::build(&log, false);

    // Act
    let out = render_report(&report, ReportFormat::Json, false).unwrap();

    // Assert
    let json: Value = serde_json::from_str(&out).unwrap();
    let request = &json["apps"][0]["requests"][0];
    assert_eq!(json["apps"][0]["guid"], "app-1");
    assert_eq!(request["request_id"], "r1");
    assert_eq!(request["method"], "GET");
    assert_eq!(request["log_entries"].as_array().unwrap().len(), 2);
    assert_eq!(request["log_entries"][1]["request"]["app_guid"], "app-1");
}

#[test]
fn yaml_report_parses_back() {
    let log = parse_log(Cursor::new(LINES)).unwrap();
    let report = Report::build(&log, false);

    let out = render_report(&report, ReportFormat::Yaml, false).unwrap();

    let yaml: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
    assert_eq!(
        yaml["apps"][0]["requests"][0]["uri_path"].as_str(),
        Some("/v2/apps/app-1/stats")
    );
}

#[test]
fn pretty_report_prints_a_timeline() {
    let log = parse_log(Cursor::new(LINES)).unwrap();
    let report = Report::build(&log, false);

    let out = render_report(&report, ReportFormat::Pretty, false).unwrap();

    assert_eq!(
        out,
        "app app-1\n\
         \x20 request r1 → GET /v2/apps/app-1/stats (2 entries)\n\
         \x20   10.500 [info] cc.api: Started GET \"/v2/apps/app-1/stats\" vcap-request-id: r1\n\
         \x20   11.000 [error] cc.api: Completed 200 vcap-request-id: r1\n\
         \n"
    );
}

#[test]
fn entry_renders_as_yaml_with_its_request() {
    let log = parse_log(Cursor::new(LINES)).unwrap();
    let entry = &log.entries_for_request("r1")[0];

    let out = entry.render_yaml().unwrap();

    let yaml: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
    assert_eq!(yaml["log_level"].as_str(), Some("info"));
    assert_eq!(yaml["request"]["request_id"].as_str(), Some("r1"));
    assert!(yaml.get("data").is_none());
}

#[test]
fn pretty_entries_skip_missing_fields() {
    let log = parse_log(Cursor::new(r#"{"message":"bare"}"#)).unwrap();

    let out = render_entries(&log.entries_for_request("unspecified"), ReportFormat::Pretty, false)
        .unwrap();

    assert_eq!(out, "[-] bare\n");
}

#[test]
fn report_format_parses_names() {
    assert_eq!(ReportFormat::from_str("yml").unwrap(), ReportFormat::Yaml);
    assert_eq!(ReportFormat::from_str("json").unwrap(), ReportFormat::Json);
    assert_eq!(ReportFormat::from_str("pretty").unwrap(), ReportFormat::Pretty);
    assert!(ReportFormat::from_str("xml").is_err());
}

#[test]
fn color_only_styles_pretty_output() {
    let log = parse_log(Cursor::new(LINES)).unwrap();
    let report = Report::build(&log, false);

    let pretty = render_report(&report, ReportFormat::Pretty, true).unwrap();
    let json_plain = render_report(&report, ReportFormat::Json, false).unwrap();
    let json_color = render_report(&report, ReportFormat::Json, true).unwrap();

    assert!(pretty.contains("\x1b["));
    assert_eq!(json_plain, json_color);
}
