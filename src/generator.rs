//! Random password generation.

use rand::Rng;
use secrecy::SecretString;
use thiserror::Error;

/// Characters a generated password is drawn from.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                              abcdefghijklmnopqrstuvwxyz\
                              0123456789\
                              !@#$%^&*()_+~";

pub const DEFAULT_LENGTH: usize = 12;
pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 20;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length must be between {min} and {max} characters, got {requested}")]
    LengthOutOfRange {
        requested: usize,
        min: usize,
        max: usize,
    },
}

/// Source of alphabet indices for the generator.
///
/// Implemented for every [`rand::Rng`]; tests can implement it directly to
/// script the exact characters produced.
pub trait RandomSource {
    /// Returns an index uniformly distributed in `0..bound`.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

/// Generates a 12-character password using the thread-local CSPRNG.
pub fn generate_password() -> SecretString {
    generate_password_with(&mut rand::rng())
}

/// Generates a 12-character password from the given random source.
pub fn generate_password_with<S: RandomSource + ?Sized>(source: &mut S) -> SecretString {
    sample(DEFAULT_LENGTH, source)
}

/// Generates a password of `length` characters.
///
/// # Errors
///
/// Returns [`GeneratorError::LengthOutOfRange`] if `length` is outside
/// `MIN_LENGTH..=MAX_LENGTH`.
pub fn generate_password_of_length<S: RandomSource + ?Sized>(
    length: usize,
    source: &mut S,
) -> Result<SecretString, GeneratorError> {
    check_length(length)?;
    Ok(sample(length, source))
}

pub(crate) fn check_length(length: usize) -> Result<(), GeneratorError> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        #[cfg(feature = "tracing")]
        tracing::warn!("Rejected password length {}", length);
        return Err(GeneratorError::LengthOutOfRange {
            requested: length,
            min: MIN_LENGTH,
            max: MAX_LENGTH,
        });
    }
    Ok(())
}

pub(crate) fn sample<S: RandomSource + ?Sized>(length: usize, source: &mut S) -> SecretString {
    let password: String = (0..length)
        .map(|_| ALPHABET[source.next_index(ALPHABET.len())] as char)
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!("Generated password of {} characters", length);

    SecretString::new(password.into())
}
