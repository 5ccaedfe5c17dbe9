//! Character variety sections - mixed case, digits and symbols.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::charset::CharacterClasses;
use crate::rating::Advice;

/// Mixed case present but digits and symbols not both present.
///
/// # Returns
/// - `Some(Advice::AddDigitsAndSymbols)` if the password only lacks digits or symbols
/// - `None` otherwise
pub fn mixed_case_section(password: &SecretString) -> SectionResult {
    let classes = CharacterClasses::of(password.expose_secret());
    if classes.has_mixed_case() && !(classes.digit && classes.symbol) {
        return Some(Advice::AddDigitsAndSymbols);
    }
    None
}

/// All four character classes present.
pub fn complete_section(password: &SecretString) -> SectionResult {
    if CharacterClasses::of(password.expose_secret()).is_complete() {
        return Some(Advice::AllGood);
    }
    None
}
