pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

pub use domain::{
    finalize_version, parse, parse_tolerant, sort, sort_descending, sorted, validate,
    BuildIdentifier, Identifier, Version,
};
pub use error::{Error, ParseError, Result, ValidationError};
