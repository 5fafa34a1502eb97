pub mod cli;
pub mod conf;
pub mod index;
pub mod logging;
pub mod report;

pub use index::{CcLog, IndexBuilder, LogEntry, ParseError, Request, parse_log};
