//! User interface module - terminal output for the CLI.

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_status, display_success, format_breakdown, format_error,
    format_ordering, format_status, format_success,
};
