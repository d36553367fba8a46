//! Command implementations behind the `semverkit` binary
//!
//! Each command returns the lines to print, keeping argument parsing in
//! `main.rs` and making the commands callable without clap.

pub mod commands;

pub use commands::{
    read_version, run_bump, run_compare, run_finalize, run_parse, run_sort, run_validate,
    SkippedInput, SortArgs, SortOutcome, ValidationOutcome, VersionBump,
};
