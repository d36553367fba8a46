//! Version values and the pure operations over them

pub mod identifier;
pub mod scanner;
pub mod sort;
pub mod validate;
pub mod version;

pub use identifier::{BuildIdentifier, Identifier};
pub use scanner::{parse, parse_tolerant};
pub use sort::{sort, sort_descending, sorted};
pub use validate::validate;
pub use version::{finalize_version, Version};
