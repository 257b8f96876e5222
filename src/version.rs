//! Semantic version triples used to tag fix notes
//!
//! Only `MAJOR.MINOR.PATCH` is modeled, optionally prefixed with `v`.
//! Pre-release and build metadata are rejected rather than ignored.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{self, FixnotesError};

/// A `major.minor.patch` version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl SemanticVersion {
    /// Create a version from its components
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

/// Component-wise: the first differing component of major, minor, patch decides
impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SemanticVersion {
    type Err = FixnotesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.strip_prefix('v').unwrap_or(s);
        let parts: Vec<&str> = body.split('.').collect();
        if parts.len() != 3 {
            return Err(error::version::invalid(
                s,
                "expected exactly three components (major.minor.patch)",
            ));
        }

        let major = parse_component(s, "major", parts[0])?;
        let minor = parse_component(s, "minor", parts[1])?;
        let patch = parse_component(s, "patch", parts[2])?;

        Ok(Self::new(major, minor, patch))
    }
}

/// Parse a version string such as `v0.110.0` or `0.110.0`
pub fn parse_version(s: &str) -> crate::error::Result<SemanticVersion> {
    s.parse()
}

fn parse_component(input: &str, label: &str, part: &str) -> Result<u64, FixnotesError> {
    // `u64::from_str` accepts a leading '+', so check digits first
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(error::version::invalid(
            input,
            format!("{label} component '{part}' is not a non-negative integer"),
        ));
    }

    part.parse::<u64>().map_err(|e| {
        error::version::invalid(input, format!("{label} component '{part}': {e}"))
    })
}
