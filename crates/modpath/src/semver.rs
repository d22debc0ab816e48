//! Semantic versions in the `v`-prefixed dialect used by module versions.
//!
//! Accepted forms are `vMAJOR`, `vMAJOR.MINOR` and
//! `vMAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`. The two shorthand forms
//! stand for `vMAJOR.0.0` and `vMAJOR.MINOR.0`.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

static SEMVER: LazyLock<Regex> = LazyLock::new(|| {
    let num = r"0|[1-9][0-9]*";
    let ident = r"(?:0|[1-9][0-9]*|[0-9]*[A-Za-z-][0-9A-Za-z-]*)";
    let pattern = format!(
        r"^v({num})(?:\.({num})(?:\.({num})(-{ident}(?:\.{ident})*)?(\+[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?)?)?$"
    );
    Regex::new(&pattern).expect("invalid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Parsed<'a> {
    major: &'a str,
    minor: &'a str,
    patch: &'a str,
    prerelease: &'a str,
    build: &'a str,
}

fn parse(v: &str) -> Option<Parsed<'_>> {
    let caps = SEMVER.captures(v)?;
    let group = |i: usize| caps.get(i).map(|m| m.as_str());
    Some(Parsed {
        major: group(1)?,
        minor: group(2).unwrap_or("0"),
        patch: group(3).unwrap_or("0"),
        prerelease: group(4).unwrap_or(""),
        build: group(5).unwrap_or(""),
    })
}

/// Reports whether `v` is a valid semantic version.
pub fn is_valid(v: &str) -> bool {
    parse(v).is_some()
}

/// Returns the major version prefix of `v` (`"v2"` for `"v2.1.0"`).
pub fn major(v: &str) -> Option<&str> {
    let p = parse(v)?;
    Some(&v[..1 + p.major.len()])
}

/// Returns the prerelease suffix of `v` including its `-`, or `""`.
pub fn prerelease(v: &str) -> &str {
    parse(v).map_or("", |p| p.prerelease)
}

/// Returns the build metadata of `v` including its `+`, or `""`.
pub fn build(v: &str) -> &str {
    parse(v).map_or("", |p| p.build)
}

/// Returns the canonical form of `v`: shorthand filled in, build metadata dropped.
pub fn canonical(v: &str) -> Option<String> {
    let p = parse(v)?;
    Some(format!(
        "v{}.{}.{}{}",
        p.major, p.minor, p.patch, p.prerelease
    ))
}

/// Compares two versions by semantic-version precedence.
///
/// Invalid versions are equal to each other and less than every valid version.
/// Build metadata does not participate.
pub fn compare(a: &str, b: &str) -> Ordering {
    match (parse(a), parse(b)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(pa), Some(pb)) => compare_int(pa.major, pb.major)
            .then_with(|| compare_int(pa.minor, pb.minor))
            .then_with(|| compare_int(pa.patch, pb.patch))
            .then_with(|| compare_prerelease(pa.prerelease, pb.prerelease)),
    }
}

// Both sides are digit strings without leading zeros.
fn compare_int(x: &str, y: &str) -> Ordering {
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}

fn compare_prerelease(x: &str, y: &str) -> Ordering {
    if x == y {
        return Ordering::Equal;
    }
    if x.is_empty() {
        return Ordering::Greater;
    }
    if y.is_empty() {
        return Ordering::Less;
    }
    let xs: Vec<&str> = x[1..].split('.').collect();
    let ys: Vec<&str> = y[1..].split('.').collect();
    for (dx, dy) in xs.iter().zip(&ys) {
        if dx == dy {
            continue;
        }
        let (nx, ny) = (is_num(dx), is_num(dy));
        return match (nx, ny) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (true, true) => compare_int(dx, dy),
            (false, false) => dx.cmp(dy),
        };
    }
    xs.len().cmp(&ys.len())
}

fn is_num(ident: &str) -> bool {
    !ident.is_empty() && ident.bytes().all(|b| b.is_ascii_digit())
}
