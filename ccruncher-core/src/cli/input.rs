use crate::index::{CcLog, parse_log};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Open and parse a whole log file. A bad line aborts with its line number.
pub fn load_log(path: &Path) -> Result<CcLog> {
    let file =
        File::open(path).with_context(|| format!("could not open log file {}", path.display()))?;

    parse_log(BufReader::new(file)).with_context(|| format!("failed to parse {}", path.display()))
}
