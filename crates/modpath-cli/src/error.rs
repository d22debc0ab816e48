use thiserror::Error;

/// CLI error types.
#[derive(Error, Debug)]
pub enum CliError {
    /// Reading input failed.
    #[error("failed to read {source_name}: {source}")]
    Io {
        /// File name, or `stdin`.
        source_name: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A check, escape, or unescape was rejected.
    #[error(transparent)]
    Module(#[from] modpath::ModuleError),
    /// A module path with a malformed major-version suffix.
    #[error("malformed major version suffix in {0:?}")]
    InvalidSuffix(String),
    /// A version that is not a semantic version.
    #[error("malformed semantic version {0}")]
    InvalidVersion(String),
    /// Arguments that do not combine.
    #[error("{0}")]
    Usage(String),
    /// An input line that is not a module version.
    #[error("line {line}: cannot parse {text:?} as a module version")]
    BadLine {
        /// 1-based line number.
        line: usize,
        /// Offending line.
        text: String,
    },
    /// JSON encoding failed.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
