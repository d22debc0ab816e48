//! Module identifiers: validation, case-safe escaping, and ordering.
//!
//! A module is named by a path and a version, like `golang.org/x/text` at
//! `v0.3.0`. This crate decides whether such a pair is legal, converts paths
//! and versions to and from the escaped form used on case-insensitive file
//! systems and in proxy URLs, and sorts lists of pairs deterministically.
//!
//! Every function is pure: no I/O, no shared mutable state.
//!
#![deny(missing_docs)]

/// Error types shared by the checking and escaping functions.
pub mod error;
/// Escaped forms of paths and versions.
pub mod escape;
/// Path grammar checks.
pub mod path;
/// Semantic-version parsing and precedence.
pub mod semver;
/// Major-version suffix splitting and matching.
pub mod split;
/// The path/version pair, pair checking, and ordering.
pub mod version;

pub use error::{ModuleError, PathKind, PathReason};
pub use escape::{escape_path, escape_version, unescape_path, unescape_version};
pub use path::{check_file_path, check_import_path, check_path, RESERVED_WINDOWS_NAMES};
pub use split::{match_path_major, split_gopkg_in, split_path_version, GOPKG_IN_PREFIX};
pub use version::{canonical_version, check, compare, sort, ModuleVersion};
