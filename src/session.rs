//! Per-user session wiring the checker, generator and history together.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::evaluator::classify;
use crate::generator::{GenerateError, generate};
use crate::history::{HISTORY_CAPACITY, HistoryTracker, InsertOutcome};
use crate::rating::{PasswordEvaluation, StrengthRating};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Please enter a password.")]
    EmptyInput,
    #[error("Enter a password first.")]
    EmptyInputToSave,
}

/// Result of [`Session::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    AlreadyUsed,
}

impl SaveOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SaveOutcome::Saved => "Password saved successfully!",
            SaveOutcome::AlreadyUsed => "This password has already been used! Choose a new one.",
        }
    }

    /// Rating whose display style the outcome is rendered with.
    pub fn style(&self) -> StrengthRating {
        match self {
            SaveOutcome::Saved => StrengthRating::Strong,
            SaveOutcome::AlreadyUsed => StrengthRating::Weak,
        }
    }
}

impl From<InsertOutcome> for SaveOutcome {
    fn from(outcome: InsertOutcome) -> Self {
        match outcome {
            InsertOutcome::Inserted => SaveOutcome::Saved,
            InsertOutcome::AlreadyPresent => SaveOutcome::AlreadyUsed,
        }
    }
}

/// State owned by a single user. Each user gets their own instance.
#[derive(Debug, Default)]
pub struct Session {
    history: HistoryTracker,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies `password`, rejecting empty input.
    pub fn check(&self, password: &SecretString) -> Result<PasswordEvaluation, SessionError> {
        if password.expose_secret().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!("check rejected: empty input");
            return Err(SessionError::EmptyInput);
        }
        Ok(classify(password))
    }

    /// Records `password` as used, rejecting empty input.
    pub fn save(&mut self, password: &SecretString) -> Result<SaveOutcome, SessionError> {
        if password.expose_secret().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!("save rejected: empty input");
            return Err(SessionError::EmptyInputToSave);
        }
        Ok(self.history.try_insert(password).into())
    }

    pub fn generate(&self, length: usize) -> Result<SecretString, GenerateError> {
        generate(length)
    }

    pub fn stored_count(&self) -> usize {
        self.history.count()
    }

    pub fn stored_summary(&self) -> String {
        format!(
            "Stored Passwords Count: {}/{}",
            self.history.count(),
            HISTORY_CAPACITY
        )
    }

    pub fn history(&self) -> &HistoryTracker {
        &self.history
    }
}
