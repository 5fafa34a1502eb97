use thiserror::Error;

/// Fatal failures while ingesting a log stream. Both carry the 1-based line number.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to decode log line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read log line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::Decode { line, .. } | ParseError::Read { line, .. } => *line,
        }
    }
}
