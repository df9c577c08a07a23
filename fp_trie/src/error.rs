//! Typed errors for trie construction and comparison.

use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// A matched feature leaf has no weight on one or both sides during
    /// weighted spectrum similarity.
    MissingWeight,
    /// Percent match is undefined: the smaller total feature count is zero.
    ZeroDenominator,
    /// Aggregate statistics were read after an insert without a finalize.
    NotFinalized,
    Io(std::io::Error),
    Parse(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MissingWeight => {
                write!(f, "feature weight missing on a matched leaf")
            },
            Error::ZeroDenominator => {
                write!(f, "percent match undefined: zero total feature count")
            },
            Error::NotFinalized => {
                write!(f, "trie statistics are stale, call finalize() first")
            },
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Parse(msg) => write!(f, "pattern file parse error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl std::convert::From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl std::convert::From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Parse(e.to_string())
    }
}

impl std::convert::From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Error {
        Error::Parse(e.to_string())
    }
}
