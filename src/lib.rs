//! Password strength meter and generator
//!
//! This library scores passwords against five simple rules, lists hints
//! for the rules a password misses, and generates random passwords.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_GENERATED_LENGTH`: Length of passwords generated through [`Config`]
//!   (default: `12`, allowed: `8` to `20`)
//! - `PWD_DEBOUNCE_MS`: Debounce for async evaluation (default: `300`)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{generate_password, generate_suggestions, score_strength};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! let password = SecretString::new("Abcdefgh".to_string().into());
//!
//! let strength = score_strength(&password);
//! assert_eq!(strength.label(), "Weak");
//! assert_eq!(strength.color(), "#f97316");
//!
//! let hints = generate_suggestions(&password);
//! assert_eq!(hints, vec!["Include numbers.", "Use special characters."]);
//!
//! let generated = generate_password();
//! assert_eq!(generated.expose_secret().len(), 12);
//! ```

// Internal modules
mod config;
mod evaluator;
mod generator;
mod history;
mod sections;
mod strength;

// Public API
pub use config::{Config, ConfigError};
pub use evaluator::{PasswordEvaluation, evaluate_password, generate_suggestions, score_strength};
pub use generator::{
    ALPHABET, DEFAULT_LENGTH, GeneratorError, MAX_LENGTH, MIN_LENGTH, RandomSource,
    generate_password, generate_password_of_length, generate_password_with,
};
pub use history::PasswordHistory;
pub use strength::{MAX_SCORE, StrengthResult, StrengthTier};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_tx;
