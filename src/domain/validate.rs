use crate::domain::identifier::{is_all_digits, is_identifier_char, Identifier};
use crate::domain::version::Version;
use crate::error::{Section, ValidationError};

/// Re-check the grammar on a version that may not have come from the scanner.
///
/// The core numbers are always in range for `u64`, so only the identifier
/// lists need checking. The first violation is returned; nothing is corrected.
pub fn validate(version: &Version) -> Result<(), ValidationError> {
    for (index, id) in version.pre.iter().enumerate() {
        // numeric identifiers are valid by construction
        if let Identifier::AlphaNumeric(text) = id {
            check_text(text, Section::PreRelease, index)?;
            if is_all_digits(text) {
                return Err(ValidationError::NumericText {
                    identifier: text.clone(),
                });
            }
        }
    }

    for (index, id) in version.build.iter().enumerate() {
        check_text(id.as_str(), Section::Build, index)?;
    }

    Ok(())
}

fn check_text(text: &str, section: Section, index: usize) -> Result<(), ValidationError> {
    if text.is_empty() {
        return Err(ValidationError::EmptyIdentifier { section, index });
    }
    if !text.chars().all(is_identifier_char) {
        return Err(ValidationError::InvalidCharacter {
            section,
            identifier: text.to_string(),
        });
    }
    Ok(())
}
