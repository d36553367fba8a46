//! Ordering of version lists by precedence
//!
//! Versions that differ only in build metadata are equal, and their relative
//! order after sorting is unspecified.

use crate::domain::version::Version;

/// Sort in place, lowest precedence first
pub fn sort(versions: &mut [Version]) {
    versions.sort_unstable_by(|a, b| a.compare(b));
}

/// Sort in place, highest precedence first
pub fn sort_descending(versions: &mut [Version]) {
    versions.sort_unstable_by(|a, b| b.compare(a));
}

/// Collect and sort, lowest precedence first
pub fn sorted<I>(versions: I) -> Vec<Version>
where
    I: IntoIterator<Item = Version>,
{
    let mut versions: Vec<Version> = versions.into_iter().collect();
    sort(&mut versions);
    versions
}
