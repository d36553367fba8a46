use crate::domain::identifier::{BuildIdentifier, Identifier};
use crate::domain::{scanner, validate};
use crate::error::{Component, ParseError, ValidationError};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Semantic version: `major.minor.patch[-pre][+build]`
///
/// Equality, hashing and ordering follow precedence, so build metadata is
/// ignored: `1.0.0+a == 1.0.0+b`.
#[derive(Debug, Clone, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: Vec<Identifier>,
    pub build: Vec<BuildIdentifier>,
}

impl Version {
    /// Create a release version with no pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre: Vec::new(),
            build: Vec::new(),
        }
    }

    /// Parse a version string strictly (see [`scanner::parse`])
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        scanner::parse(s)
    }

    /// Parse a version string after tolerant normalization (see [`scanner::parse_tolerant`])
    pub fn parse_tolerant(s: &str) -> Result<Self, ParseError> {
        scanner::parse_tolerant(s)
    }

    /// Parse strictly into a heap allocation
    pub fn parse_boxed(s: &str) -> Result<Box<Self>, ParseError> {
        scanner::parse(s).map(Box::new)
    }

    /// Parse a version that is known to be valid, such as a literal.
    ///
    /// # Panics
    /// If `s` is not a valid version string.
    pub fn must_parse(s: &str) -> Self {
        match scanner::parse(s) {
            Ok(v) => v,
            Err(e) => panic!("invalid version '{}': {}", s, e),
        }
    }

    /// Check every grammar invariant on a value that may have been built by hand
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::validate(self)
    }

    /// Whether this version carries a pre-release tag
    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }

    /// Precedence comparison. Build metadata is never consulted.
    pub fn compare(&self, other: &Version) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| compare_pre_release(&self.pre, &other.pre))
    }

    /// `major += 1`, lower fields reset, tags cleared
    pub fn increment_major(&mut self) -> Result<(), ValidationError> {
        self.major = bump(self.major, Component::Major)?;
        self.minor = 0;
        self.patch = 0;
        self.clear_tags();
        Ok(())
    }

    /// `minor += 1`, patch reset, tags cleared
    pub fn increment_minor(&mut self) -> Result<(), ValidationError> {
        self.minor = bump(self.minor, Component::Minor)?;
        self.patch = 0;
        self.clear_tags();
        Ok(())
    }

    /// `patch += 1`, tags cleared
    pub fn increment_patch(&mut self) -> Result<(), ValidationError> {
        self.patch = bump(self.patch, Component::Patch)?;
        self.clear_tags();
        Ok(())
    }

    /// The `major.minor.patch` core, without pre-release or build metadata
    pub fn finalize(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    fn clear_tags(&mut self) {
        self.pre.clear();
        self.build.clear();
    }
}

fn bump(value: u64, field: Component) -> Result<u64, ValidationError> {
    value
        .checked_add(1)
        .ok_or(ValidationError::Overflow { field })
}

/// A release (empty list) outranks any pre-release; otherwise compare
/// identifier by identifier, and a strict prefix is the lesser.
fn compare_pre_release(a: &[Identifier], b: &[Identifier]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // slice ordering is lexicographic and treats a prefix as lesser
        (false, false) => a.cmp(b),
    }
}

/// Strictly parse `input` and return only its `major.minor.patch` core.
///
/// # Example
/// ```
/// # use semverkit::finalize_version;
/// assert_eq!(finalize_version("1.2.3-alpha.1+123.456").unwrap(), "1.2.3");
/// assert!(finalize_version("1.2-alpha").is_err());
/// ```
pub fn finalize_version(input: &str) -> Result<String, ParseError> {
    scanner::parse(input).map(|v| v.finalize())
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre.hash(state);
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        scanner::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if let Some((first, rest)) = self.pre.split_first() {
            write!(f, "-{}", first)?;
            for id in rest {
                write!(f, ".{}", id)?;
            }
        }

        if let Some((first, rest)) = self.build.split_first() {
            write!(f, "+{}", first)?;
            for id in rest {
                write!(f, ".{}", id)?;
            }
        }

        Ok(())
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Version, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(VersionVisitor)
    }
}

struct VersionVisitor;

impl<'de> Visitor<'de> for VersionVisitor {
    type Value = Version;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a semantic version string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        scanner::parse(value).map_err(de::Error::custom)
    }
}
