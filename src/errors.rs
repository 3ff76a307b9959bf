//! Error types.
//!
//! `ConfigError` aborts the run before any pipeline stage starts.
//! `TargetError` is scoped to a single target: it is logged and the target is
//! skipped. Transport failures are carried as `anyhow::Error` with context.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("incompatible flags specified: {0} and {1}")]
    IncompatibleFlags(&'static str, &'static str),

    #[error("no input specified")]
    NoInput,

    #[error("{0}: must be positive")]
    NonPositive(&'static str),

    #[error("input list {path}: {source}")]
    InputList {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("proxy URL {url}: {reason}")]
    InvalidProxy { url: String, reason: String },

    #[error("output file {path}: {source}")]
    OutputFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("malformed input URL: {0:?}")]
    MalformedUrl(String),

    #[error("malformed input CIDR: {0:?}")]
    CidrBadFormat(String),
}
