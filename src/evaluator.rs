//! Password evaluator - scoring and improvement hints.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::run_sections;
use crate::strength::{StrengthResult, StrengthTier};

/// Strength and hints for one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub strength: StrengthResult,
    pub suggestions: Vec<String>,
}

impl PasswordEvaluation {
    pub fn score(&self) -> u8 {
        self.strength.score()
    }

    pub fn tier(&self) -> StrengthTier {
        self.strength.tier()
    }

    pub fn label(&self) -> &'static str {
        self.strength.label()
    }

    pub fn color(&self) -> &'static str {
        self.strength.color()
    }

    pub fn percent(&self) -> u8 {
        self.strength.percent()
    }
}

/// Scores a password by counting the rules it satisfies.
///
/// Any input is valid; the empty password scores 0 ("Very Weak").
pub fn score_strength(password: &SecretString) -> StrengthResult {
    let report = run_sections(password.expose_secret());
    StrengthResult::new(report.passed)
}

/// Lists one hint per failed rule, in the order
/// length, uppercase, lowercase, digit, symbol.
///
/// Returns an empty list when every rule holds.
pub fn generate_suggestions(password: &SecretString) -> Vec<String> {
    run_sections(password.expose_secret())
        .hints
        .into_iter()
        .map(String::from)
        .collect()
}

/// Scores a password and collects its hints in a single pass.
pub fn evaluate_password(password: &SecretString) -> PasswordEvaluation {
    let report = run_sections(password.expose_secret());
    let strength = StrengthResult::new(report.passed);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "password evaluated: score {}/{} ({})",
        strength.score(),
        crate::strength::MAX_SCORE,
        strength.label()
    );

    PasswordEvaluation {
        strength,
        suggestions: report.hints.into_iter().map(String::from).collect(),
    }
}

/// Debounced evaluation that sends the result via channel.
///
/// Waits `debounce` first so that fast typing only produces one evaluation.
/// Nothing is sent if `token` is cancelled before the wait ends.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    debounce: Duration,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    tokio::time::sleep(debounce).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation cancelled during debounce");
        return;
    }

    let evaluation = evaluate_password(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_score_empty_password() {
        let result = score_strength(&secret(""));
        assert_eq!(result.score(), 0);
        assert_eq!(result.label(), "Very Weak");
        assert_eq!(result.color(), "#dc2626");
    }

    #[test]
    fn test_score_short_without_classes() {
        for pwd in ["", "       ", "\t"] {
            // whitespace counts as a symbol
            let expected = if pwd.is_empty() { 0 } else { 1 };
            let result = score_strength(&secret(pwd));
            assert_eq!(result.score(), expected, "password {:?}", pwd);
            assert_eq!(result.tier(), StrengthTier::VeryWeak);
        }
    }

    #[test]
    fn test_score_strong() {
        let result = score_strength(&secret("Abcdef12!"));
        assert_eq!(result.score(), 5);
        assert_eq!(result.label(), "Strong");
        assert_eq!(result.color(), "#16a34a");
    }

    #[test]
    fn test_score_lowercase_only() {
        let result = score_strength(&secret("abcdefgh"));
        assert_eq!(result.score(), 2);
        assert_eq!(result.label(), "Very Weak");
    }

    #[test]
    fn test_score_upper_and_lower() {
        let result = score_strength(&secret("Abcdefgh"));
        assert_eq!(result.score(), 3);
        assert_eq!(result.label(), "Weak");
        assert_eq!(result.color(), "#f97316");
    }

    #[test]
    fn test_score_upper_lower_digit() {
        let result = score_strength(&secret("Abcdefg1"));
        assert_eq!(result.score(), 4);
        assert_eq!(result.label(), "Moderate");
        assert_eq!(result.color(), "#facc15");
    }

    #[test]
    fn test_suggestions_empty_password() {
        let suggestions = generate_suggestions(&secret(""));
        assert_eq!(
            suggestions,
            vec![
                "Use at least 8 characters.",
                "Add uppercase letters.",
                "Include lowercase letters.",
                "Include numbers.",
                "Use special characters.",
            ]
        );
    }

    #[test]
    fn test_suggestions_all_rules_satisfied() {
        assert!(generate_suggestions(&secret("Abcdefg1!")).is_empty());
    }

    #[test]
    fn test_suggestions_only_symbol_missing() {
        assert_eq!(
            generate_suggestions(&secret("Abcdefg1")),
            vec!["Use special characters."]
        );
    }

    #[test]
    fn test_score_and_suggestions_are_idempotent() {
        for pwd in ["", "abc", "Abcdefg1", "Abcdef12!", "ünïcödé 123"] {
            let pwd = secret(pwd);
            assert_eq!(score_strength(&pwd), score_strength(&pwd));
            assert_eq!(generate_suggestions(&pwd), generate_suggestions(&pwd));
        }
    }

    #[test]
    fn test_score_plus_suggestions_is_five() {
        for pwd in ["", "a", "ABCDEFGH", "Abcdefg1", "Abcdef12!", "12345678"] {
            let pwd = secret(pwd);
            let score = score_strength(&pwd).score() as usize;
            assert_eq!(score + generate_suggestions(&pwd).len(), 5);
        }
    }

    #[test]
    fn test_evaluate_matches_separate_calls() {
        let pwd = secret("Abcdefgh");
        let evaluation = evaluate_password(&pwd);
        assert_eq!(evaluation.strength, score_strength(&pwd));
        assert_eq!(evaluation.suggestions, generate_suggestions(&pwd));
        assert_eq!(evaluation.tier(), StrengthTier::Weak);
        assert_eq!(evaluation.percent(), 60);
    }
}
