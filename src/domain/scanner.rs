//! Grammar scanner for version strings
//!
//! ```text
//! version     = core ["-" pre-release] ["+" build]
//! core        = numeric-id "." numeric-id "." numeric-id
//! pre-release = pr-id *("." pr-id)
//! build       = build-id *("." build-id)
//! ```
//!
//! Each field is read by a small validating sub-parser; the first failure is
//! returned and nothing is partially built.

use crate::domain::identifier::{is_all_digits, BuildIdentifier, Identifier};
use crate::domain::version::Version;
use crate::error::{Component, ParseError};

/// Parse a version string strictly.
///
/// # Arguments
/// * `input` - Text such as `1.2.3`, `1.0.0-rc.1` or `1.0.0+build.5`
///
/// # Returns
/// * `Ok(Version)` - The parsed value
/// * `Err(ParseError)` - Naming the field and rule that failed
pub fn parse(input: &str) -> Result<Version, ParseError> {
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    // Build metadata starts at the first '+'; hyphens after it are ordinary characters.
    let (rest, build) = match input.split_once('+') {
        Some((rest, build)) => (rest, Some(build)),
        None => (input, None),
    };

    // The core holds only digits and dots, so the first '-' opens the pre-release.
    let (core, pre) = match rest.split_once('-') {
        Some((core, pre)) => (core, Some(pre)),
        None => (rest, None),
    };

    let (major, minor, patch) = parse_core(core)?;
    let pre = match pre {
        Some(text) => parse_pre_release(text)?,
        None => Vec::new(),
    };
    let build = match build {
        Some(text) => parse_build(text)?,
        None => Vec::new(),
    };

    Ok(Version {
        major,
        minor,
        patch,
        pre,
        build,
    })
}

/// Parse a version string, accepting common deviations in the core.
///
/// Before strict parsing: surrounding whitespace is trimmed, one leading
/// `v`/`V` is removed, leading zeros are dropped from each core component and
/// missing minor/patch components are filled with `0`. The pre-release and
/// build grammar are not relaxed, and a short core followed by a tag is
/// rejected.
pub fn parse_tolerant(input: &str) -> Result<Version, ParseError> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix(['v', 'V']).unwrap_or(trimmed);

    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let tag_start = trimmed.find(['-', '+']).unwrap_or(trimmed.len());
    let (core, tags) = trimmed.split_at(tag_start);

    let mut parts: Vec<String> = core.splitn(3, '.').map(strip_leading_zeros).collect();
    if parts.len() < 3 {
        if !tags.is_empty() {
            return Err(ParseError::ShortVersionWithTag(input.to_string()));
        }
        parts.resize(3, "0".to_string());
    }

    let normalized = format!("{}{}", parts.join("."), tags);
    parse(&normalized)
}

/// `"01"` -> `"1"`, `"000"` -> `"0"`; parts not starting with `0` are kept as typed.
fn strip_leading_zeros(part: &str) -> String {
    if !part.starts_with('0') {
        return part.to_string();
    }
    let stripped = part.trim_start_matches('0');
    if stripped.starts_with(|c: char| c.is_ascii_digit()) {
        stripped.to_string()
    } else {
        format!("0{}", stripped)
    }
}

fn parse_core(core: &str) -> Result<(u64, u64, u64), ParseError> {
    let mut parts = core.split('.');

    let major = parse_numeric(parts.next(), Component::Major)?;
    let minor = parse_numeric(parts.next(), Component::Minor)?;
    let patch = parse_numeric(parts.next(), Component::Patch)?;

    if let Some(extra) = parts.next() {
        return Err(ParseError::UnexpectedComponent(extra.to_string()));
    }

    Ok((major, minor, patch))
}

fn parse_numeric(text: Option<&str>, field: Component) -> Result<u64, ParseError> {
    let text = text.ok_or(ParseError::MissingComponent(field))?;

    if !is_all_digits(text) {
        return Err(ParseError::InvalidNumber {
            field,
            value: text.to_string(),
        });
    }

    if text.len() > 1 && text.starts_with('0') {
        return Err(ParseError::LeadingZero {
            field,
            value: text.to_string(),
        });
    }

    text.parse::<u64>()
        .map_err(|_| ParseError::Overflow(text.to_string()))
}

fn parse_pre_release(text: &str) -> Result<Vec<Identifier>, ParseError> {
    text.split('.').map(Identifier::new).collect()
}

fn parse_build(text: &str) -> Result<Vec<BuildIdentifier>, ParseError> {
    text.split('.').map(BuildIdentifier::new).collect()
}
