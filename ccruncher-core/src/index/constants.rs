/// Sentinel used for both request ids and app guids when nothing can be extracted.
pub const UNSPECIFIED: &str = "unspecified";

pub const VCAP_REQUEST_ID_PATTERN: &str = r"vcap-request-id: ([A-Za-z0-9_\-:]+)";
pub const APP_GUID_PATTERN: &str = r"/v2/apps/([A-Za-z0-9_\-]+)";
pub const METHOD_AND_URI_PATH_PATTERN: &str = r#"Started ([A-Z]+) "([A-Za-z0-9_/\-]+)"#;
