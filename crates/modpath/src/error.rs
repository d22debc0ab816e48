use std::fmt;
use thiserror::Error;

/// Path dialect a check was performed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    /// Module path (`check_path`).
    Module,
    /// Import path (`check_import_path`).
    Import,
    /// Slash-separated file path (`check_file_path`).
    File,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PathKind::Module => "module",
            PathKind::Import => "import",
            PathKind::File => "file",
        })
    }
}

/// Why a path (or a single path element) was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathReason {
    /// The path is empty.
    #[error("empty string")]
    EmptyString,
    /// The path contains `..`.
    #[error("double dot")]
    DoubleDot,
    /// The path contains `//`.
    #[error("double slash")]
    DoubleSlash,
    /// The path ends in `/`.
    #[error("trailing slash")]
    TrailingSlash,
    /// An element between separators is empty.
    #[error("empty path element")]
    EmptyElement,
    /// An element consists only of dots.
    #[error("invalid path element {0:?}")]
    InvalidElement(String),
    /// An element starts with a dot.
    #[error("leading dot in path element")]
    LeadingDot,
    /// An element ends with a dot.
    #[error("trailing dot in path element")]
    TrailingDot,
    /// A character outside the dialect's allowed class.
    #[error("invalid char {0:?}")]
    InvalidChar(char),
    /// The element prefix before its first dot is a reserved device name.
    #[error("{0:?} disallowed as path element component on Windows")]
    ReservedName(String),
    /// A module path starting with `/`.
    #[error("leading slash")]
    LeadingSlash,
    /// The first element of a module path has no dot.
    #[error("missing dot in first path element")]
    MissingDotInFirstElement,
    /// The first element of a module path starts with `-`.
    #[error("leading dash in first path element")]
    LeadingDash,
    /// A character not allowed in the first element of a module path.
    #[error("invalid char {0:?} in first path element")]
    InvalidCharInFirstElement(char),
    /// The trailing major-version suffix is malformed.
    #[error("invalid version")]
    InvalidVersionSuffix,
}

/// Errors reported by the checking and escaping functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModuleError {
    /// A path failed the grammar of its dialect.
    #[error("malformed {kind} path {path:?}: {reason}")]
    MalformedPath {
        /// Dialect that was checked.
        kind: PathKind,
        /// Offending path.
        path: String,
        /// First rule violated.
        reason: PathReason,
    },
    /// The version is not a valid semantic version.
    #[error("malformed semantic version {version}")]
    MalformedVersion {
        /// Offending version.
        version: String,
    },
    /// The version's major does not match the path's major-version suffix.
    #[error("mismatched module path {path} and version {version} (want {want})")]
    MismatchedMajor {
        /// Module path.
        path: String,
        /// Version that did not match.
        version: String,
        /// Expected major version (`"v0 or v1"` when the path has no suffix).
        want: String,
    },
    /// A version string that cannot be escaped.
    #[error("disallowed version string {version:?}")]
    DisallowedVersion {
        /// Offending version.
        version: String,
    },
    /// The input is not a structurally valid escaped path.
    #[error("invalid escaped module path {escaped:?}")]
    InvalidEscapedPath {
        /// Offending escaped path.
        escaped: String,
    },
    /// The escaped path decoded to an invalid module path.
    #[error("invalid escaped module path {escaped:?}: {source}")]
    RejectedEscapedPath {
        /// Offending escaped path.
        escaped: String,
        /// Check failure for the decoded path.
        #[source]
        source: Box<ModuleError>,
    },
    /// The input is not a structurally valid escaped version.
    #[error("invalid escaped version {escaped:?}")]
    InvalidEscapedVersion {
        /// Offending escaped version.
        escaped: String,
    },
    /// The escaped version decoded to a string that is not a valid file name.
    #[error("invalid escaped version {version:?}: {reason}")]
    RejectedEscapedVersion {
        /// Decoded version.
        version: String,
        /// First rule violated.
        reason: PathReason,
    },
    /// Non-ASCII or `!` reached the escaper after checking passed.
    #[error("internal error: inconsistency in escaping {input:?}")]
    InternalInconsistency {
        /// Input that should have been rejected earlier.
        input: String,
    },
}

impl ModuleError {
    /// Returns the path rule that failed, if this error carries one.
    pub fn reason(&self) -> Option<&PathReason> {
        match self {
            ModuleError::MalformedPath { reason, .. }
            | ModuleError::RejectedEscapedVersion { reason, .. } => Some(reason),
            ModuleError::RejectedEscapedPath { source, .. } => source.reason(),
            _ => None,
        }
    }

    pub(crate) fn malformed(kind: PathKind, path: &str, reason: PathReason) -> Self {
        ModuleError::MalformedPath {
            kind,
            path: path.to_string(),
            reason,
        }
    }
}
