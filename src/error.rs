use std::fmt;

use thiserror::Error;

/// One of the three mandatory numeric fields of a version core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Major => write!(f, "major"),
            Component::Minor => write!(f, "minor"),
            Component::Patch => write!(f, "patch"),
        }
    }
}

/// The dot-separated tag a failing identifier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    PreRelease,
    Build,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::PreRelease => write!(f, "pre-release"),
            Section::Build => write!(f, "build metadata"),
        }
    }
}

/// Failure to read a version string. Every variant names the rule that failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("version string is empty")]
    Empty,

    #[error("missing {0} version")]
    MissingComponent(Component),

    #[error("unexpected component after patch version: '{0}'")]
    UnexpectedComponent(String),

    #[error("invalid {field} version: '{value}'")]
    InvalidNumber { field: Component, value: String },

    #[error("{field} version must not contain leading zeros: '{value}'")]
    LeadingZero { field: Component, value: String },

    #[error("numeric identifier overflow: '{0}'")]
    Overflow(String),

    #[error("{0} identifier must not be empty")]
    EmptyIdentifier(Section),

    #[error("invalid character in {section} identifier: '{identifier}'")]
    InvalidCharacter { section: Section, identifier: String },

    #[error("numeric pre-release identifier must not contain leading zeros: '{0}'")]
    LeadingZeroIdentifier(String),

    #[error("short version cannot contain pre-release or build metadata: '{0}'")]
    ShortVersionWithTag(String),
}

/// An already-built version breaks one of the grammar's invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{section} identifier at position {index} must not be empty")]
    EmptyIdentifier { section: Section, index: usize },

    #[error("invalid character in {section} identifier: '{identifier}'")]
    InvalidCharacter { section: Section, identifier: String },

    #[error("pre-release identifier '{identifier}' is all digits and must be numeric")]
    NumericText { identifier: String },

    #[error("{field} version overflow")]
    Overflow { field: Component },
}

/// Unified error type for semverkit operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Version parsing error: {0}")]
    Parse(#[from] ParseError),

    #[error("Version validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in semverkit
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
