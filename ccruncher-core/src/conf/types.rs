use crate::report::ReportFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CruncherConfig {
    /// Where to write reports. `None` means stdout.
    pub output: Option<PathBuf>,
    pub format: ReportFormat,
    /// Keep the `unspecified` app in reports.
    pub include_unspecified: bool,
}
