//! Strength ratings and the advice attached to each verdict.

use std::fmt;

/// Coarse strength label returned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthRating {
    Weak,
    Moderate,
    Strong,
}

impl StrengthRating {
    /// Lower-case name, used as the display style key.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthRating::Weak => "weak",
            StrengthRating::Moderate => "moderate",
            StrengthRating::Strong => "strong",
        }
    }
}

impl fmt::Display for StrengthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthRating::Weak => write!(f, "Weak"),
            StrengthRating::Moderate => write!(f, "Moderate"),
            StrengthRating::Strong => write!(f, "Strong"),
        }
    }
}

/// Which rule decided the rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advice {
    TooShort,
    AddDigitsAndSymbols,
    MissingClasses,
    AllGood,
}

impl Advice {
    pub fn rating(&self) -> StrengthRating {
        match self {
            Advice::TooShort | Advice::MissingClasses => StrengthRating::Weak,
            Advice::AddDigitsAndSymbols => StrengthRating::Moderate,
            Advice::AllGood => StrengthRating::Strong,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Advice::TooShort => "Password must be at least 8 characters long.",
            Advice::AddDigitsAndSymbols => "Consider adding digits and special characters.",
            Advice::MissingClasses => {
                "Password must contain uppercase, lowercase, numbers, and symbols."
            }
            Advice::AllGood => "This is a strong password!",
        }
    }
}

/// Outcome of [`classify`](crate::classify).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub rating: StrengthRating,
    pub advice: Advice,
}

impl PasswordEvaluation {
    pub fn message(&self) -> &'static str {
        self.advice.message()
    }
}

impl From<Advice> for PasswordEvaluation {
    fn from(advice: Advice) -> Self {
        PasswordEvaluation { rating: advice.rating(), advice }
    }
}

/// Fixed hints shown alongside the checker.
pub const TIPS: [&str; 5] = [
    "Use at least 12-16 characters.",
    "Include uppercase and lowercase letters.",
    "Add numbers and special characters.",
    "Avoid using personal information.",
    "Do not reuse old passwords.",
];
