use crate::config::SortOrder;
use crate::domain::{self, Version};
use crate::error::{ParseError, Result};
use crate::ui;

/// Which core field to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

/// Arguments for the `sort` command
///
/// Mirrors the CLI flags after they have been merged with the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SortArgs {
    pub versions: Vec<String>,
    pub order: SortOrder,
    pub dedup: bool,
    pub skip_invalid: bool,
    pub tolerant: bool,
}

/// Result of checking a single input with `validate`
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationOutcome {
    pub input: String,
    pub error: Option<ParseError>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// An input dropped by `sort --skip-invalid`
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedInput {
    pub input: String,
    pub error: ParseError,
}

/// Output of the `sort` command
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SortOutcome {
    /// Canonical versions in the requested order
    pub lines: Vec<String>,
    /// Inputs left out because they did not parse
    pub skipped: Vec<SkippedInput>,
}

/// Read one command-line input, strictly or tolerantly.
pub fn read_version(input: &str, tolerant: bool) -> std::result::Result<Version, ParseError> {
    if tolerant {
        domain::parse_tolerant(input)
    } else {
        domain::parse(input)
    }
}

/// Canonical form of each input, optionally followed by its field breakdown.
///
/// Stops at the first input that does not parse.
pub fn run_parse(inputs: &[String], tolerant: bool, explain: bool) -> Result<Vec<String>> {
    let mut lines = Vec::with_capacity(inputs.len());
    for input in inputs {
        let version = read_version(input, tolerant)?;
        if explain {
            lines.push(format!("{}  {}", version, ui::format_breakdown(&version)));
        } else {
            lines.push(version.to_string());
        }
    }
    Ok(lines)
}

/// Check every input and report each one, valid or not.
pub fn run_validate(inputs: &[String], tolerant: bool) -> Vec<ValidationOutcome> {
    inputs
        .iter()
        .map(|input| ValidationOutcome {
            input: input.clone(),
            error: read_version(input, tolerant).err(),
        })
        .collect()
}

/// `-1`, `0` or `1` for the precedence of `a` against `b`.
pub fn run_compare(a: &str, b: &str, tolerant: bool) -> Result<String> {
    let left = read_version(a, tolerant)?;
    let right = read_version(b, tolerant)?;
    Ok(ui::format_ordering(left.compare(&right)).to_string())
}

/// Sorted canonical versions, one per line, plus any inputs that were skipped.
pub fn run_sort(args: &SortArgs) -> Result<SortOutcome> {
    let mut versions = Vec::with_capacity(args.versions.len());
    let mut skipped = Vec::new();
    for input in &args.versions {
        match read_version(input, args.tolerant) {
            Ok(v) => versions.push(v),
            Err(error) if args.skip_invalid => skipped.push(SkippedInput {
                input: input.clone(),
                error,
            }),
            Err(e) => return Err(e.into()),
        }
    }

    match args.order {
        SortOrder::Ascending => domain::sort(&mut versions),
        SortOrder::Descending => domain::sort_descending(&mut versions),
    }

    if args.dedup {
        versions.dedup();
    }

    Ok(SortOutcome {
        lines: versions.iter().map(|v| v.to_string()).collect(),
        skipped,
    })
}

/// The input with one core field incremented and its tags cleared.
pub fn run_bump(input: &str, bump: VersionBump, tolerant: bool) -> Result<String> {
    let mut version = read_version(input, tolerant)?;
    match bump {
        VersionBump::Major => version.increment_major()?,
        VersionBump::Minor => version.increment_minor()?,
        VersionBump::Patch => version.increment_patch()?,
    }
    Ok(version.to_string())
}

/// The `major.minor.patch` core of a strictly parsed input.
pub fn run_finalize(input: &str) -> Result<String> {
    Ok(domain::finalize_version(input)?)
}
