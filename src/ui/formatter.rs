//! Pure formatting functions for CLI output.
//!
//! The `format_*` functions build strings and are testable without a
//! terminal; the `display_*` functions print them.

use console::style;
use std::cmp::Ordering;

use crate::domain::Version;

/// Format an error message with a red prefix.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold(), message)
}

/// Format a success message with a green checkmark.
pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

/// Format a status message with a yellow arrow.
pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

/// Describe each field of a version on one line.
///
/// # Example
/// `1.2.3-rc.1+b7` -> `major=1 minor=2 patch=3 pre=[rc, 1] build=[b7]`
pub fn format_breakdown(version: &Version) -> String {
    let pre: Vec<String> = version.pre.iter().map(|id| id.to_string()).collect();
    let build: Vec<&str> = version.build.iter().map(|id| id.as_str()).collect();
    format!(
        "major={} minor={} patch={} pre=[{}] build=[{}]",
        version.major,
        version.minor,
        version.patch,
        pre.join(", "),
        build.join(", ")
    )
}

/// Numeric form of an ordering: `-1`, `0` or `1`.
pub fn format_ordering(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "-1",
        Ordering::Equal => "0",
        Ordering::Greater => "1",
    }
}

/// Print an error message to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Print a success message to stdout.
pub fn display_success(message: &str) {
    println!("{}", format_success(message));
}

/// Print a status message to stderr, leaving stdout to command results.
pub fn display_status(message: &str) {
    eprintln!("{}", format_status(message));
}
