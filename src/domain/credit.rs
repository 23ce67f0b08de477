use rand::Rng;
use serde::{Deserialize, Serialize};

/// Lowest score the bank records.
pub const MIN_CREDIT_SCORE: u16 = 300;
/// Highest score the bank records.
pub const MAX_CREDIT_SCORE: u16 = 800;

/// A credit score in the `300..=800` range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct CreditScore(u16);

impl CreditScore {
    /// Clamps `score` into the supported range.
    pub fn new(score: u16) -> Self {
        Self(score.clamp(MIN_CREDIT_SCORE, MAX_CREDIT_SCORE))
    }

    /// Draws a uniformly random score, as the signup flow does.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self(rng.gen_range(MIN_CREDIT_SCORE..=MAX_CREDIT_SCORE))
    }

    pub fn value(&self) -> u16 {
        self.0
    }

    /// Maps the score onto its rating tier.
    pub fn rating(&self) -> CreditRating {
        match self.0 {
            750..=800 => CreditRating::Excellent,
            700..=749 => CreditRating::Good,
            650..=699 => CreditRating::Fair,
            550..=649 => CreditRating::Poor,
            _ => CreditRating::Bad,
        }
    }
}

/// A band of credit-score values mapping to a loan multiplier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CreditRating {
    Excellent,
    Good,
    Fair,
    Poor,
    Bad,
}

impl CreditRating {
    /// Factor applied to a positive balance to cap loan requests.
    pub fn loan_multiplier(&self) -> f64 {
        match self {
            CreditRating::Excellent => 5.0,
            CreditRating::Good => 4.0,
            CreditRating::Fair => 3.0,
            CreditRating::Poor => 2.0,
            CreditRating::Bad => 0.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CreditRating::Excellent => "EXCELLENT",
            CreditRating::Good => "GOOD",
            CreditRating::Fair => "FAIR",
            CreditRating::Poor => "POOR",
            CreditRating::Bad => "BAD",
        }
    }
}
