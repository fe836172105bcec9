// ============================================================================
// Environment Setup Core - Schema Version
// File: crates/envsetup-core/src/domain/version.rs
// Description: Bundle schema versions and upgrade ranges
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A `major.minor.micro` schema version, ordered numerically. Serialized as
/// its dotted text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SchemaVersion {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
}

impl SchemaVersion {
    pub const INITIAL: SchemaVersion = SchemaVersion::new(0, 0, 0);

    pub const fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self { major, minor, micro }
    }
}

impl FromStr for SchemaVersion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidVersion(s.to_string());

        let mut parts = s.trim().split('.');
        let mut next = || -> Result<u32, DomainError> {
            parts
                .next()
                .ok_or_else(invalid)?
                .parse::<u32>()
                .map_err(|_| invalid())
        };

        let version = SchemaVersion::new(next()?, next()?, next()?);

        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(version)
    }
}

impl TryFrom<String> for SchemaVersion {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SchemaVersion> for String {
    fn from(version: SchemaVersion) -> Self {
        version.to_string()
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

/// The `(from, to)` pair a set of steps is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionRange {
    pub from: SchemaVersion,
    pub to: SchemaVersion,
}

impl VersionRange {
    pub fn new(from: SchemaVersion, to: SchemaVersion) -> Self {
        Self { from, to }
    }

    pub fn parse(from: &str, to: &str) -> Result<Self, DomainError> {
        Ok(Self::new(from.parse()?, to.parse()?))
    }

    /// Already applied when the installed version has reached `to`.
    pub fn is_applied(&self, installed: SchemaVersion) -> bool {
        self.to <= installed
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let version: SchemaVersion = "1.2.0".parse().unwrap();
        assert_eq!(version, SchemaVersion::new(1, 2, 0));
        assert_eq!(version.to_string(), "1.2.0");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["", "1", "1.2", "1.2.3.4", "1.x.0", "-1.0.0"] {
            assert!(
                matches!(input.parse::<SchemaVersion>(), Err(DomainError::InvalidVersion(_))),
                "expected {:?} to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_ordering_is_numeric() {
        let v1_2: SchemaVersion = "1.2.0".parse().unwrap();
        let v1_10: SchemaVersion = "1.10.0".parse().unwrap();
        assert!(v1_2 < v1_10);
        assert!(SchemaVersion::INITIAL < v1_2);
    }

    #[test]
    fn test_range_is_applied() {
        let range = VersionRange::parse("1.0.0", "1.1.0").unwrap();
        assert!(!range.is_applied(SchemaVersion::new(1, 0, 0)));
        assert!(range.is_applied(SchemaVersion::new(1, 1, 0)));
        assert!(range.is_applied(SchemaVersion::new(2, 0, 0)));
    }
}
