use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::ModuleError;
use crate::path::check_path;
use crate::semver;
use crate::split::{expected_major, match_path_major, split_path_version};

/// A module path and version pair, both in plain (unescaped) form.
///
/// Nothing is enforced at construction; [`ModuleVersion::check`] validates
/// the pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleVersion {
    /// Module path, like `golang.org/x/text` or `rsc.io/quote/v2`.
    #[serde(rename = "Path")]
    pub path: String,
    /// Module version, by convention in canonical semantic-version form.
    #[serde(rename = "Version", default, skip_serializing_if = "String::is_empty")]
    pub version: String,
}

impl ModuleVersion {
    /// Creates a pair without validation.
    pub fn new(path: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            version: version.into(),
        }
    }

    /// Checks that the pair is valid; see [`check`].
    pub fn check(&self) -> Result<(), ModuleError> {
        check(&self.path, &self.version)
    }
}

impl fmt::Display for ModuleVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.path, self.version)
    }
}

impl FromStr for ModuleVersion {
    type Err = Infallible;

    /// Parses `path@version`; without an `@` the version is empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.split_once('@') {
            Some((path, version)) => Self::new(path, version),
            None => Self::new(s, ""),
        })
    }
}

impl PartialOrd for ModuleVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ModuleVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

/// Checks that a module path and version pair is valid.
///
/// The path must be a valid module path, the version a valid semantic
/// version, and the two must correspond: `yaml/v2` only goes with `v2.x.y`
/// versions, while an unsuffixed path goes with `v0` and `v1`.
///
/// # Example
///
/// ```rust
/// use modpath::{check, ModuleError};
///
/// assert!(check("example.com/pkg/v2", "v2.0.0").is_ok());
/// let err = check("example.com/pkg/v2", "v1.0.0").unwrap_err();
/// assert!(matches!(err, ModuleError::MismatchedMajor { ref want, .. } if want == "v2"));
/// ```
pub fn check(path: &str, version: &str) -> Result<(), ModuleError> {
    check_path(path)?;
    if !semver::is_valid(version) {
        return Err(ModuleError::MalformedVersion {
            version: version.to_string(),
        });
    }
    let path_major = split_path_version(path).map_or("", |(_, major)| major);
    if !match_path_major(version, path_major) {
        let want = expected_major(path_major);
        debug!(path, version, want = %want, "major version mismatch");
        return Err(ModuleError::MismatchedMajor {
            path: path.to_string(),
            version: version.to_string(),
            want,
        });
    }
    Ok(())
}

/// Returns the canonical form of `v`, keeping a `+incompatible` build suffix
/// that [`semver::canonical`] would otherwise drop.
pub fn canonical_version(v: &str) -> Option<String> {
    let mut cv = semver::canonical(v)?;
    if semver::build(v) == "+incompatible" {
        cv.push_str("+incompatible");
    }
    Some(cv)
}

/// Orders pairs by path, then by version.
///
/// A version may carry a tie-breaking suffix after a slash, as in
/// `v0.0.1/go.mod`: the part before the slash is compared by semantic-version
/// precedence, the suffix as a plain string. Remaining ties are broken by the
/// raw version string so that the order is total.
pub fn compare(a: &ModuleVersion, b: &ModuleVersion) -> Ordering {
    a.path.cmp(&b.path).then_with(|| {
        let (va, fa) = split_version_tag(&a.version);
        let (vb, fb) = split_version_tag(&b.version);
        let semantic = if va == vb {
            Ordering::Equal
        } else {
            semver::compare(va, vb)
        };
        semantic
            .then_with(|| fa.cmp(fb))
            .then_with(|| a.version.cmp(&b.version))
    })
}

fn split_version_tag(v: &str) -> (&str, &str) {
    match v.find('/') {
        Some(k) => v.split_at(k),
        None => (v, ""),
    }
}

/// Sorts `list` with [`compare`].
pub fn sort(list: &mut [ModuleVersion]) {
    list.sort_by(compare);
}
