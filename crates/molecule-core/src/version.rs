//! Platform version identifiers and inclusive version ranges.
//!
//! Hosts report their version in several shapes:
//! - `1.8` / `1.12.2` (bare release)
//! - `1.12.2-R0.1-SNAPSHOT` (API version)
//! - `git-Spigot-21fe707-741a1bd (MC: 1.9.4)` (server version banner)
//!
//! All of them resolve to a [`VersionId`].

use crate::error::CapabilityError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

lazy_static! {
    /// Release embedded in a server banner
    static ref MC_BANNER: Regex = Regex::new(r"\(MC:\s*(\d+)\.(\d+)(?:\.(\d+))?\)").unwrap();

    /// First dotted release anywhere in the string
    static ref DOTTED: Regex = Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").unwrap();
}

/// A release identifier, ordered by `(major, minor, patch)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VersionId {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl VersionId {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }

    /// Extract the release from a host version string.
    ///
    /// Prefers the `(MC: x.y.z)` banner form, then the first dotted number.
    pub fn parse_platform(raw: &str) -> Result<Self, CapabilityError> {
        let captures = MC_BANNER
            .captures(raw)
            .or_else(|| DOTTED.captures(raw))
            .ok_or_else(|| CapabilityError::UnsupportedVersion(raw.to_string()))?;

        let part = |idx: usize| -> Result<u32, CapabilityError> {
            match captures.get(idx) {
                Some(m) => m
                    .as_str()
                    .parse()
                    .map_err(|_| CapabilityError::UnsupportedVersion(raw.to_string())),
                None => Ok(0),
            }
        };

        Ok(Self::new(part(1)?, part(2)?, part(3)?))
    }
}

impl FromStr for VersionId {
    type Err = CapabilityError;

    /// Strict `major.minor[.patch]` parsing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsupported = || CapabilityError::UnsupportedVersion(s.to_string());
        let mut parts = s.trim().split('.');

        let major = parts.next().and_then(|p| p.parse().ok()).ok_or_else(unsupported)?;
        let minor = parts.next().and_then(|p| p.parse().ok()).ok_or_else(unsupported)?;
        let patch = match parts.next() {
            Some(p) => p.parse().map_err(|_| unsupported())?,
            None => 0,
        };
        if parts.next().is_some() {
            return Err(unsupported());
        }

        Ok(Self::new(major, minor, patch))
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Inclusive span of releases sharing one wire layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionRange {
    min: VersionId,
    max: VersionId,
}

impl VersionRange {
    pub fn new(min: VersionId, max: VersionId) -> Result<Self, CapabilityError> {
        if min > max {
            return Err(CapabilityError::InvalidRange {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(Self { min, max })
    }

    /// Parse both bounds with [`VersionId::from_str`].
    pub fn parse(min: &str, max: &str) -> Result<Self, CapabilityError> {
        Self::new(min.parse()?, max.parse()?)
    }

    pub fn min(&self) -> VersionId {
        self.min
    }

    pub fn max(&self) -> VersionId {
        self.max
    }

    pub fn contains(&self, version: &VersionId) -> bool {
        self.min <= *version && *version <= self.max
    }

    pub fn intersects(&self, other: &VersionRange) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_parse() {
        assert_eq!("1.9.4".parse::<VersionId>().unwrap(), VersionId::new(1, 9, 4));
        assert_eq!("1.8".parse::<VersionId>().unwrap(), VersionId::new(1, 8, 0));
        assert!("1.x".parse::<VersionId>().is_err());
        assert!("1.2.3.4".parse::<VersionId>().is_err());
        assert!("".parse::<VersionId>().is_err());
    }

    #[test]
    fn test_platform_strings() {
        assert_eq!(
            VersionId::parse_platform("git-Spigot-21fe707-741a1bd (MC: 1.9.4)").unwrap(),
            VersionId::new(1, 9, 4)
        );
        assert_eq!(
            VersionId::parse_platform("1.12.2-R0.1-SNAPSHOT").unwrap(),
            VersionId::new(1, 12, 2)
        );
        assert_eq!(
            VersionId::parse_platform("git-Paper-445 (MC: 1.16)").unwrap(),
            VersionId::new(1, 16, 0)
        );
    }

    #[test]
    fn test_unparsable_platform_string() {
        let err = VersionId::parse_platform("unknown build").unwrap_err();
        assert_eq!(err, CapabilityError::UnsupportedVersion("unknown build".into()));
    }

    #[test]
    fn test_ordering() {
        assert!(VersionId::new(1, 9, 0) > VersionId::new(1, 8, 9));
        assert!(VersionId::new(1, 10, 0) > VersionId::new(1, 9, 4));
        assert!(VersionId::new(2, 0, 0) > VersionId::new(1, 18, 2));
    }

    #[test]
    fn test_range_bounds() {
        let range = VersionRange::parse("1.8.0", "1.8.9").unwrap();
        assert!(range.contains(&VersionId::new(1, 8, 0)));
        assert!(range.contains(&VersionId::new(1, 8, 9)));
        assert!(!range.contains(&VersionId::new(1, 9, 0)));
        assert!(VersionRange::parse("1.9.0", "1.8.0").is_err());
    }

    #[test]
    fn test_range_intersection() {
        let a = VersionRange::parse("1.8.0", "1.8.9").unwrap();
        let b = VersionRange::parse("1.8.9", "1.9.4").unwrap();
        let c = VersionRange::parse("1.9.0", "1.9.9").unwrap();
        assert!(a.intersects(&b));
        assert!(b.intersects(&c));
        assert!(!a.intersects(&c));
        assert_eq!(a.to_string(), "[1.8.0, 1.8.9]");
    }
}
