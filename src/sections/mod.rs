//! Classification rules
//!
//! Each section checks one rule. Sections run in precedence order and the
//! first one that returns a verdict decides the rating.

mod length;
mod variety;

pub use length::length_section;
pub use variety::{complete_section, mixed_case_section};

/// Result type for section functions.
/// - `Some(advice)` - Section decided the verdict
/// - `None` - Section does not apply, try the next one
pub type SectionResult = Option<crate::rating::Advice>;
