//! Password rule sections
//!
//! Each section checks one quality predicate and, when it fails, names the
//! hint shown to the user.

mod length;
mod variety;

pub use length::length_section;
pub use variety::{digit_section, lowercase_section, symbol_section, uppercase_section};

/// Result type for section functions.
/// - `Some(hint)` - Predicate failed, with the improvement hint
/// - `None` - Predicate holds
pub type SectionResult = Option<&'static str>;

/// A rule section, named for logging.
pub type Section = (&'static str, fn(&str) -> SectionResult);

/// All sections in rule-check order.
pub const SECTIONS: [Section; 5] = [
    ("length", length_section),
    ("uppercase", uppercase_section),
    ("lowercase", lowercase_section),
    ("digit", digit_section),
    ("symbol", symbol_section),
];

/// Outcome of running every section once over a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleReport {
    /// Number of sections that passed, in `0..=5`.
    pub passed: u8,
    /// Hints of the failed sections, in rule-check order.
    pub hints: Vec<&'static str>,
}

/// Runs every section in order.
pub fn run_sections(password: &str) -> RuleReport {
    let mut passed = 0;
    let mut hints = Vec::new();

    for (_name, section_fn) in SECTIONS {
        match section_fn(password) {
            Some(hint) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("section {} failed", _name);
                hints.push(hint);
            }
            None => passed += 1,
        }
    }

    RuleReport { passed, hints }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_sections_empty() {
        let report = run_sections("");
        assert_eq!(report.passed, 0);
        assert_eq!(report.hints.len(), 5);
    }

    #[test]
    fn test_run_sections_all_pass() {
        let report = run_sections("Abcdefg1!");
        assert_eq!(report.passed, 5);
        assert!(report.hints.is_empty());
    }

    #[test]
    fn test_run_sections_order() {
        let report = run_sections("ABCDEFGH");
        assert_eq!(report.passed, 2);
        assert_eq!(
            report.hints,
            vec![
                "Include lowercase letters.",
                "Include numbers.",
                "Use special characters."
            ]
        );
    }
}
