//! Strength tiers and the result of scoring a password.

use std::fmt;

/// Highest score a password can reach, one point per satisfied rule.
pub const MAX_SCORE: u8 = 5;

/// Discrete strength category derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
}

impl StrengthTier {
    /// Maps a score to its tier. Scores above [`MAX_SCORE`] count as `Strong`.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthTier::VeryWeak,
            3 => StrengthTier::Weak,
            4 => StrengthTier::Moderate,
            _ => StrengthTier::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::VeryWeak => "Very Weak",
            StrengthTier::Weak => "Weak",
            StrengthTier::Moderate => "Moderate",
            StrengthTier::Strong => "Strong",
        }
    }

    /// Display color as a `#rrggbb` hex string.
    pub fn color(self) -> &'static str {
        match self {
            StrengthTier::VeryWeak => "#dc2626",
            StrengthTier::Weak => "#f97316",
            StrengthTier::Moderate => "#facc15",
            StrengthTier::Strong => "#16a34a",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score of a password together with its tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthResult {
    score: u8,
    tier: StrengthTier,
}

impl StrengthResult {
    pub fn new(score: u8) -> Self {
        let score = score.min(MAX_SCORE);
        Self {
            score,
            tier: StrengthTier::from_score(score),
        }
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn tier(&self) -> StrengthTier {
        self.tier
    }

    pub fn label(&self) -> &'static str {
        self.tier.label()
    }

    pub fn color(&self) -> &'static str {
        self.tier.color()
    }

    /// Score as a percentage, for progress bars.
    pub fn percent(&self) -> u8 {
        self.score * 20
    }
}
