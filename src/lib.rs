//! Password strength checking and generation library
//!
//! This library classifies passwords against a fixed rule set, generates
//! random passwords and remembers which passwords were already used in a
//! session.
//!
//! # Features
//!
//! - `cli` (default): Builds the `pwd-check` terminal front end
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_check::{classify, generate, HistoryTracker, InsertOutcome, StrengthRating};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abc123!@".to_string().into());
//! let evaluation = classify(&password);
//! assert_eq!(evaluation.rating, StrengthRating::Strong);
//! println!("{}", evaluation.message());
//!
//! let generated = generate(16).expect("16 is a valid length");
//!
//! let mut history = HistoryTracker::new();
//! assert_eq!(history.try_insert(&generated), InsertOutcome::Inserted);
//! assert_eq!(history.try_insert(&generated), InsertOutcome::AlreadyPresent);
//! ```

pub mod charset;
mod evaluator;
mod generator;
mod history;
mod rating;
mod sections;
mod session;

// Public API
pub use evaluator::classify;
pub use generator::{
    DEFAULT_LENGTH, GenerateError, MAX_UI_LENGTH, MIN_LENGTH, generate, generate_with_rng,
};
pub use history::{HISTORY_CAPACITY, HistoryTracker, InsertOutcome};
pub use rating::{Advice, PasswordEvaluation, StrengthRating, TIPS};
pub use session::{SaveOutcome, Session, SessionError};
