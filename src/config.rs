//! Runtime configuration read from environment variables.

use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

use crate::generator::{self, DEFAULT_LENGTH, RandomSource};

pub const GENERATED_LENGTH_VAR: &str = "PWD_GENERATED_LENGTH";
pub const DEBOUNCE_MS_VAR: &str = "PWD_DEBOUNCE_MS";

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    generated_length: usize,
    debounce: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generated_length: DEFAULT_LENGTH,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}

impl Config {
    /// Builds the configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_GENERATED_LENGTH`: length of generated passwords (default: 12,
    ///   allowed: 8 to 20)
    /// - `PWD_DEBOUNCE_MS`: keystroke debounce for async evaluation
    ///   (default: 300)
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but cannot be parsed, or if the
    /// length is outside the allowed range.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(raw) = read_var(GENERATED_LENGTH_VAR) {
            let length = parse::<usize>(GENERATED_LENGTH_VAR, &raw)?;
            generator::check_length(length).map_err(|e| ConfigError::InvalidValue {
                key: GENERATED_LENGTH_VAR,
                value: raw.clone(),
                reason: e.to_string(),
            })?;
            config.generated_length = length;
        }

        if let Some(raw) = read_var(DEBOUNCE_MS_VAR) {
            config.debounce = Duration::from_millis(parse::<u64>(DEBOUNCE_MS_VAR, &raw)?);
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Config loaded: generated length {}, debounce {:?}",
            config.generated_length,
            config.debounce
        );

        Ok(config)
    }

    pub fn generated_length(&self) -> usize {
        self.generated_length
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Generates a password of the configured length with the thread-local CSPRNG.
    pub fn generate_password(&self) -> SecretString {
        self.generate_password_with(&mut rand::rng())
    }

    /// Generates a password of the configured length from `source`.
    pub fn generate_password_with<S: RandomSource + ?Sized>(&self, source: &mut S) -> SecretString {
        // Length is validated in from_env.
        generator::sample(self.generated_length, source)
    }
}

fn read_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
