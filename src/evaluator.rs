//! Password strength classifier - main evaluation logic.

use secrecy::SecretString;

use crate::rating::{Advice, PasswordEvaluation};
use crate::sections::{SectionResult, complete_section, length_section, mixed_case_section};

/// Classifies a password as weak, moderate or strong.
///
/// Rules are applied in order and the first match wins:
/// 1. shorter than 8 characters: weak
/// 2. upper and lower case, but not both digits and symbols: moderate
/// 3. upper, lower, digit and symbol: strong
/// 4. anything else: weak
///
/// Deterministic and free of side effects.
pub fn classify(password: &SecretString) -> PasswordEvaluation {
    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&SecretString) -> SectionResult); 3] = [
        ("length", length_section),
        ("mixed_case", mixed_case_section),
        ("complete", complete_section),
    ];

    let advice = sections
        .iter()
        .find_map(|(_section_name, section_fn)| {
            let verdict = section_fn(password);
            #[cfg(feature = "tracing")]
            if verdict.is_some() {
                tracing::trace!("section {} decided the rating", _section_name);
            }
            verdict
        })
        .unwrap_or(Advice::MissingClasses);

    let evaluation = PasswordEvaluation::from(advice);

    #[cfg(feature = "tracing")]
    tracing::debug!(rating = %evaluation.rating, "password classified");

    evaluation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::StrengthRating;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_classify_short_password() {
        let evaluation = classify(&secret("abc"));
        assert_eq!(evaluation.rating, StrengthRating::Weak);
        assert_eq!(
            evaluation.message(),
            "Password must be at least 8 characters long."
        );
    }

    #[test]
    fn test_classify_short_beats_variety() {
        // All four classes, but only 7 characters
        let evaluation = classify(&secret("Ab1!Ab1"));
        assert_eq!(evaluation.advice, Advice::TooShort);
    }

    #[test]
    fn test_classify_moderate_without_symbol() {
        let evaluation = classify(&secret("Abc12345"));
        assert_eq!(evaluation.rating, StrengthRating::Moderate);
        assert_eq!(
            evaluation.message(),
            "Consider adding digits and special characters."
        );
    }

    #[test]
    fn test_classify_moderate_letters_only() {
        let evaluation = classify(&secret("AbcdEfgh"));
        assert_eq!(evaluation.rating, StrengthRating::Moderate);
    }

    #[test]
    fn test_classify_strong() {
        let evaluation = classify(&secret("Abc123!@"));
        assert_eq!(evaluation.rating, StrengthRating::Strong);
        assert_eq!(evaluation.message(), "This is a strong password!");
    }

    #[test]
    fn test_classify_missing_case_is_weak() {
        let cases = ["abc123!@#", "ABC123!@#", "12345678", "!@#$%^&*", "abcdefgh"];
        for pwd in cases {
            let evaluation = classify(&secret(pwd));
            assert_eq!(evaluation.rating, StrengthRating::Weak, "for {pwd}");
            assert_eq!(
                evaluation.message(),
                "Password must contain uppercase, lowercase, numbers, and symbols.",
                "for {pwd}"
            );
        }
    }

    #[test]
    fn test_classify_unlisted_symbol_does_not_count() {
        // '-' is not in the symbol set, so this only has letters and digits
        let evaluation = classify(&secret("Abc123-_"));
        assert_eq!(evaluation.rating, StrengthRating::Moderate);
    }

    #[test]
    fn test_classify_empty_falls_into_length_rule() {
        let evaluation = classify(&secret(""));
        assert_eq!(evaluation.advice, Advice::TooShort);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let pwd = secret("Tr0ub4dor&3");
        assert_eq!(classify(&pwd), classify(&pwd));
    }
}
