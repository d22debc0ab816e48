//! Grammar checks for module paths, import paths, and file paths.
//!
//! All three dialects share one element-by-element scan. They differ in the
//! character class allowed inside an element and in whether an element may
//! start with a dot; module paths add rules for the leading domain element
//! and the trailing major-version suffix.

use crate::error::{ModuleError, PathKind, PathReason};
use crate::split::split_path_version;

/// Reserved device names on Windows, matched case-insensitively against the
/// part of an element before its first dot.
pub const RESERVED_WINDOWS_NAMES: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Character class applied to path elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ElementClass {
    /// Directory-like elements of import and module paths.
    ImportPath,
    /// File names: wider punctuation, spaces, Unicode letters, leading dots.
    FilePath,
}

impl ElementClass {
    fn allows(self, c: char) -> bool {
        match self {
            ElementClass::ImportPath => import_path_char_ok(c),
            ElementClass::FilePath => file_name_char_ok(c),
        }
    }
}

/// Reports whether `c` may appear in the leading (domain) element of a module path.
fn first_element_char_ok(c: char) -> bool {
    matches!(c, '-' | '.' | '0'..='9' | 'a'..='z')
}

/// ASCII letters, digits, and `+ - . _ ~`.
fn import_path_char_ok(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.' | '_' | '~')
}

fn file_name_char_ok(c: char) -> bool {
    if c.is_ascii() {
        // Shell metacharacters " ' * < > ? ` | and separators / : \ stay out.
        const ALLOWED: &str = "!#$%&()+,-.=@[]^_{}~ ";
        return c.is_ascii_alphanumeric() || ALLOWED.contains(c);
    }
    c.is_alphabetic()
}

/// Checks that `path` is a valid module path.
///
/// On top of [`check_import_path`], the leading element (up to the first
/// slash) must be made of lowercase ASCII letters, digits, `.` and `-`,
/// contain at least one dot and not start with a dash, and the trailing
/// major-version suffix must be well formed (see [`split_path_version`]).
///
/// # Example
///
/// ```rust
/// use modpath::check_path;
///
/// assert!(check_path("golang.org/x/text").is_ok());
/// assert!(check_path("example.com/pkg/v2").is_ok());
/// assert!(check_path("example.com/pkg/v1").is_err());
/// assert!(check_path("Example.com/pkg").is_err());
/// ```
pub fn check_path(path: &str) -> Result<(), ModuleError> {
    let fail = |reason| Err(ModuleError::malformed(PathKind::Module, path, reason));

    if let Err(reason) = scan_path(path, ElementClass::ImportPath) {
        return fail(reason);
    }
    let first = path.split('/').next().unwrap_or_default();
    if first.is_empty() {
        return fail(PathReason::LeadingSlash);
    }
    if !first.contains('.') {
        return fail(PathReason::MissingDotInFirstElement);
    }
    if first.starts_with('-') {
        return fail(PathReason::LeadingDash);
    }
    if let Some(c) = first.chars().find(|&c| !first_element_char_ok(c)) {
        return fail(PathReason::InvalidCharInFirstElement(c));
    }
    if split_path_version(path).is_none() {
        return fail(PathReason::InvalidVersionSuffix);
    }
    Ok(())
}

/// Checks that `path` is a valid import path.
///
/// An import path is one or more non-empty elements separated by single
/// slashes. Elements use ASCII letters, digits and `+ - . _ ~`, must not
/// start or end with a dot, and must not be a reserved Windows device name
/// up to their first dot.
pub fn check_import_path(path: &str) -> Result<(), ModuleError> {
    scan_path(path, ElementClass::ImportPath)
        .map_err(|reason| ModuleError::malformed(PathKind::Import, path, reason))
}

/// Checks that `path` is a valid slash-separated file path.
///
/// Same as [`check_import_path`] except that elements may start with a dot
/// and may also contain Unicode letters, spaces and `! # $ % & ( ) , = @ [ ] ^ { }`.
pub fn check_file_path(path: &str) -> Result<(), ModuleError> {
    scan_path(path, ElementClass::FilePath)
        .map_err(|reason| ModuleError::malformed(PathKind::File, path, reason))
}

fn scan_path(path: &str, class: ElementClass) -> Result<(), PathReason> {
    if path.is_empty() {
        return Err(PathReason::EmptyString);
    }
    if path.contains("..") {
        return Err(PathReason::DoubleDot);
    }
    if path.contains("//") {
        return Err(PathReason::DoubleSlash);
    }
    if path.ends_with('/') {
        return Err(PathReason::TrailingSlash);
    }
    path.split('/').try_for_each(|elem| check_element(elem, class))
}

/// Checks a single path element.
pub(crate) fn check_element(elem: &str, class: ElementClass) -> Result<(), PathReason> {
    if elem.is_empty() {
        return Err(PathReason::EmptyElement);
    }
    if elem.bytes().all(|b| b == b'.') {
        return Err(PathReason::InvalidElement(elem.to_string()));
    }
    if elem.starts_with('.') && class == ElementClass::ImportPath {
        return Err(PathReason::LeadingDot);
    }
    if elem.ends_with('.') {
        return Err(PathReason::TrailingDot);
    }
    if let Some(c) = elem.chars().find(|&c| !class.allows(c)) {
        return Err(PathReason::InvalidChar(c));
    }

    let short = elem.split('.').next().unwrap_or(elem);
    if RESERVED_WINDOWS_NAMES
        .iter()
        .any(|name| name.eq_ignore_ascii_case(short))
    {
        return Err(PathReason::ReservedName(short.to_string()));
    }
    Ok(())
}
