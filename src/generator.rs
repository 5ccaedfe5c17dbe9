//! Random password generation.

use rand::{CryptoRng, Rng};
use secrecy::SecretString;
use thiserror::Error;

use crate::charset::ALPHABET;

/// Shortest password the generator will produce.
pub const MIN_LENGTH: usize = 8;

/// Upper bound offered by the front end. Not enforced by [`generate`].
pub const MAX_UI_LENGTH: usize = 32;

/// Length used when the caller has no preference.
pub const DEFAULT_LENGTH: usize = 12;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Password length must be at least {minimum} characters (requested {requested})")]
    InvalidLength { requested: usize, minimum: usize },
}

/// Generates a random password of `length` characters.
///
/// Characters are drawn independently and uniformly from
/// [`ALPHABET`](crate::charset::ALPHABET) using the thread-local CSPRNG.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidLength`] if `length` is below [`MIN_LENGTH`].
pub fn generate(length: usize) -> Result<SecretString, GenerateError> {
    generate_with_rng(length, &mut rand::thread_rng())
}

/// Same as [`generate`], drawing from the given generator.
pub fn generate_with_rng<R>(length: usize, rng: &mut R) -> Result<SecretString, GenerateError>
where
    R: Rng + CryptoRng,
{
    if length < MIN_LENGTH {
        #[cfg(feature = "tracing")]
        tracing::warn!("rejected generation request for {} characters", length);
        return Err(GenerateError::InvalidLength {
            requested: length,
            minimum: MIN_LENGTH,
        });
    }

    let password: String = (0..length)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!("generated password of {} characters", length);

    Ok(SecretString::new(password.into()))
}
