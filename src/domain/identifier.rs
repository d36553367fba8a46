//! Dot-separated identifiers of the pre-release and build metadata tags
//!
//! Pre-release identifiers carry precedence: numeric ones compare by value,
//! alphanumeric ones compare by bytes, and numeric sorts before alphanumeric.
//! Build identifiers are kept as written and never take part in ordering.

use crate::error::{ParseError, Section};
use std::fmt;
use std::str::FromStr;

/// True for the characters allowed in any identifier: `[0-9A-Za-z-]`
pub(crate) fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

pub(crate) fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// A single pre-release identifier
///
/// Variant order matters for the derived `Ord`: every numeric identifier has
/// lower precedence than every alphanumeric one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Identifier {
    /// Digits only, no leading zero unless the identifier is `0`
    Numeric(u64),
    /// Contains at least one letter or hyphen
    AlphaNumeric(String),
}

impl Identifier {
    /// Parse a pre-release identifier
    ///
    /// # Arguments
    /// * `s` - A single identifier, without surrounding dots
    ///
    /// # Returns
    /// * `Ok(Identifier)` - Numeric when `s` is all digits, alphanumeric otherwise
    /// * `Err` - If `s` is empty, has a character outside `[0-9A-Za-z-]`,
    ///   is numeric with a leading zero, or does not fit in a `u64`
    pub fn new(s: &str) -> Result<Self, ParseError> {
        if s.is_empty() {
            return Err(ParseError::EmptyIdentifier(Section::PreRelease));
        }

        if !s.chars().all(is_identifier_char) {
            return Err(ParseError::InvalidCharacter {
                section: Section::PreRelease,
                identifier: s.to_string(),
            });
        }

        if !is_all_digits(s) {
            return Ok(Identifier::AlphaNumeric(s.to_string()));
        }

        if s.len() > 1 && s.starts_with('0') {
            return Err(ParseError::LeadingZeroIdentifier(s.to_string()));
        }

        s.parse::<u64>()
            .map(Identifier::Numeric)
            .map_err(|_| ParseError::Overflow(s.to_string()))
    }

    /// Whether this identifier compares numerically
    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }

    /// The numeric value, if any
    pub fn as_numeric(&self) -> Option<u64> {
        match self {
            Identifier::Numeric(n) => Some(*n),
            Identifier::AlphaNumeric(_) => None,
        }
    }
}

impl FromStr for Identifier {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Identifier::new(s)
    }
}

impl From<u64> for Identifier {
    fn from(n: u64) -> Self {
        Identifier::Numeric(n)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::AlphaNumeric(s) => write!(f, "{}", s),
        }
    }
}

/// A single build metadata identifier, kept exactly as written
///
/// Leading zeros are allowed (`001` stays `001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildIdentifier(String);

impl BuildIdentifier {
    /// Parse a build metadata identifier
    ///
    /// Fails if `s` is empty or contains a character outside `[0-9A-Za-z-]`.
    pub fn new(s: &str) -> Result<Self, ParseError> {
        if s.is_empty() {
            return Err(ParseError::EmptyIdentifier(Section::Build));
        }
        if !s.chars().all(is_identifier_char) {
            return Err(ParseError::InvalidCharacter {
                section: Section::Build,
                identifier: s.to_string(),
            });
        }
        Ok(BuildIdentifier(s.to_string()))
    }

    /// Build an identifier without checking it.
    ///
    /// The result may break the build grammar; `Version::validate` catches that.
    pub fn new_unchecked(s: impl Into<String>) -> Self {
        BuildIdentifier(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for BuildIdentifier {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuildIdentifier::new(s)
    }
}

impl fmt::Display for BuildIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
