//! Length section - rejects passwords shorter than the minimum.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::generator::MIN_LENGTH;
use crate::rating::Advice;

/// Checks if the password meets the minimum length, counted in characters.
///
/// # Returns
/// - `Some(Advice::TooShort)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(Advice::TooShort);
    }
    None
}
