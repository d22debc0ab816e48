//! Major-version suffixes of module paths.
//!
//! Most paths carry a major version of 2 or more as a final `/vN` element.
//! Paths served by `gopkg.in` instead end in `.vN` (any N, including 0 and
//! 1), optionally followed by `-unstable`, and must always carry one.

use crate::semver;

/// Fixed prefix of the legacy `.vN` dialect.
pub const GOPKG_IN_PREFIX: &str = "gopkg.in/";

const UNSTABLE_SUFFIX: &str = "-unstable";

/// Splits `path` into `(prefix, path_major)` with `prefix + path_major == path`.
///
/// `path_major` is empty when the path carries no major-version suffix, or
/// `/vN` for N >= 2. `gopkg.in/` paths are handled by [`split_gopkg_in`].
/// Returns `None` when the final element looks like a major version but is
/// malformed, as in `example.com/pkg/v1`, `example.com/pkg/v0` or
/// `example.com/pkg/v2.1`.
///
/// # Example
///
/// ```rust
/// use modpath::split_path_version;
///
/// assert_eq!(split_path_version("example.com/pkg/v2"), Some(("example.com/pkg", "/v2")));
/// assert_eq!(split_path_version("example.com/pkg"), Some(("example.com/pkg", "")));
/// assert_eq!(split_path_version("example.com/pkg/v1"), None);
/// ```
pub fn split_path_version(path: &str) -> Option<(&str, &str)> {
    if path.starts_with(GOPKG_IN_PREFIX) {
        return split_gopkg_in(path);
    }

    let bytes = path.as_bytes();
    let mut i = bytes.len();
    let mut dot = false;
    while i > 0 && (bytes[i - 1].is_ascii_digit() || bytes[i - 1] == b'.') {
        if bytes[i - 1] == b'.' {
            dot = true;
        }
        i -= 1;
    }
    if i <= 1 || i == bytes.len() || bytes[i - 1] != b'v' || bytes[i - 2] != b'/' {
        return Some((path, ""));
    }

    let (prefix, path_major) = path.split_at(i - 2);
    if dot || path_major.len() <= 2 || path_major.as_bytes()[2] == b'0' || path_major == "/v1" {
        return None;
    }
    Some((prefix, path_major))
}

/// Like [`split_path_version`], but only for `gopkg.in/` paths.
///
/// The path must end in `.vN` or `.vN-unstable`. `N` must not have a leading
/// zero, except for `.v0` itself.
pub fn split_gopkg_in(path: &str) -> Option<(&str, &str)> {
    if !path.starts_with(GOPKG_IN_PREFIX) {
        return None;
    }
    let bytes = path.as_bytes();
    let mut i = bytes.len();
    if path.ends_with(UNSTABLE_SUFFIX) {
        i -= UNSTABLE_SUFFIX.len();
    }
    while i > 0 && bytes[i - 1].is_ascii_digit() {
        i -= 1;
    }
    if i <= 1 || bytes[i - 1] != b'v' || bytes[i - 2] != b'.' {
        return None;
    }

    let (prefix, path_major) = path.split_at(i - 2);
    if path_major.len() <= 2 || (path_major.as_bytes()[2] == b'0' && path_major != ".v0") {
        return None;
    }
    Some((prefix, path_major))
}

/// Reports whether the semantic version `v` matches the path major version
/// `path_major` produced by [`split_path_version`].
///
/// An empty `path_major` accepts `v0` and `v1` versions, and any version
/// whose build metadata is `+incompatible`.
pub fn match_path_major(v: &str, path_major: &str) -> bool {
    let mut path_major = path_major;
    if path_major.starts_with(".v") {
        path_major = path_major.strip_suffix(UNSTABLE_SUFFIX).unwrap_or(path_major);
    }
    if v.starts_with("v0.0.0-") && path_major == ".v1" {
        // Old pseudo-versions for gopkg.in .v1 paths were generated as v0.0.0-.
        return true;
    }
    let Some(m) = semver::major(v) else {
        return false;
    };
    if path_major.is_empty() {
        return m == "v0" || m == "v1" || semver::build(v) == "+incompatible";
    }
    (path_major.starts_with('/') || path_major.starts_with('.')) && &path_major[1..] == m
}

/// Renders the major version a path expects, for error messages.
pub(crate) fn expected_major(path_major: &str) -> String {
    if path_major.is_empty() {
        return "v0 or v1".to_string();
    }
    let major = path_major.strip_suffix(UNSTABLE_SUFFIX).unwrap_or(path_major);
    major[1..].to_string()
}
