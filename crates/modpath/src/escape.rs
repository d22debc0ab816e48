//! Case-safe escaped forms of module paths and versions.
//!
//! Module paths appear in download-cache directories and proxy URLs, neither
//! of which can be trusted to keep `rsc.io/QUOTE` and `rsc.io/quote` apart.
//! The escaped form replaces every uppercase ASCII letter with `!` followed
//! by its lowercase equivalent, so the result never needs two casings:
//!
//! ```text
//! github.com/Azure/azure-sdk-for-go  ->  github.com/!azure/azure-sdk-for-go
//! github.com/GoogleCloudPlatform/x   ->  github.com/!google!cloud!platform/x
//! ```
//!
//! Checked paths never contain `!`, so no escape for a literal `!` exists.

use crate::error::ModuleError;
use crate::path::{check_element, check_path, ElementClass};
use tracing::debug;

/// Returns the escaped form of a module path.
///
/// # Errors
///
/// Fails with the [`check_path`] error if `path` is not a valid module path.
pub fn escape_path(path: &str) -> Result<String, ModuleError> {
    check_path(path)?;
    escape_string(path)
}

/// Returns the escaped form of a module version.
///
/// Versions need not be semantic versions, but must be valid file names and
/// must not contain `!`.
pub fn escape_version(v: &str) -> Result<String, ModuleError> {
    if check_element(v, ElementClass::FilePath).is_err() || v.contains('!') {
        return Err(ModuleError::DisallowedVersion {
            version: v.to_string(),
        });
    }
    escape_string(v)
}

fn escape_string(s: &str) -> Result<String, ModuleError> {
    // The loop below is only injective over ASCII without '!'.
    if s.chars().any(|c| c == '!' || !c.is_ascii()) {
        debug!(input = s, "unescapable input passed validation");
        return Err(ModuleError::InternalInconsistency {
            input: s.to_string(),
        });
    }

    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            escaped.push('!');
            escaped.push(c.to_ascii_lowercase());
        } else {
            escaped.push(c);
        }
    }
    Ok(escaped)
}

/// Returns the module path for an escaped path.
///
/// # Errors
///
/// Fails if `escaped` is not a well-formed escaped string, or if it decodes
/// to something that is not a valid module path.
pub fn unescape_path(escaped: &str) -> Result<String, ModuleError> {
    let path = unescape_string(escaped).ok_or_else(|| ModuleError::InvalidEscapedPath {
        escaped: escaped.to_string(),
    })?;
    check_path(&path).map_err(|err| ModuleError::RejectedEscapedPath {
        escaped: escaped.to_string(),
        source: Box::new(err),
    })?;
    Ok(path)
}

/// Returns the version for an escaped version.
///
/// # Errors
///
/// Fails if `escaped` is not a well-formed escaped string, or if it decodes
/// to something that is not a valid file name.
pub fn unescape_version(escaped: &str) -> Result<String, ModuleError> {
    let v = unescape_string(escaped).ok_or_else(|| ModuleError::InvalidEscapedVersion {
        escaped: escaped.to_string(),
    })?;
    if let Err(reason) = check_element(&v, ElementClass::FilePath) {
        return Err(ModuleError::RejectedEscapedVersion { version: v, reason });
    }
    Ok(v)
}

fn unescape_string(escaped: &str) -> Option<String> {
    let mut out = String::with_capacity(escaped.len());
    let mut bang = false;
    for c in escaped.chars() {
        if !c.is_ascii() {
            return None;
        }
        if bang {
            bang = false;
            if !c.is_ascii_lowercase() {
                return None;
            }
            out.push(c.to_ascii_uppercase());
            continue;
        }
        match c {
            '!' => bang = true,
            'A'..='Z' => return None,
            _ => out.push(c),
        }
    }
    if bang {
        return None;
    }
    Some(out)
}
