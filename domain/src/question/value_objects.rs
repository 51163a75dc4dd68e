//! Validated field types for the question aggregate (Value Objects).
//!
//! Each newtype enforces its length or range invariant at construction, so
//! any instance you hold is valid for its entire lifetime:
//!
//! - [`QuestionTitle`] — 1 to 200 characters
//! - [`Points`] — 1 to 100 inclusive
//! - [`MaxSelections`] — at least 1, defaults to 1
//! - [`ChoiceText`] — 1 to 100 characters
//!
//! Lengths are counted in characters, not bytes, so multibyte text is
//! measured the way an author would expect.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Title of a question (1–200 characters).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionTitle(String);

impl QuestionTitle {
    /// Maximum title length in characters.
    pub const MAX_CHARS: usize = 200;

    /// Create a validated title.
    pub fn new(title: impl Into<String>) -> Result<Self, DomainError> {
        let title = title.into();
        let chars = title.chars().count();
        if chars == 0 {
            return Err(DomainError::Validation(
                "question title must not be empty".to_string(),
            ));
        }
        if chars > Self::MAX_CHARS {
            return Err(DomainError::Validation(format!(
                "question title must be at most {} characters, got {}",
                Self::MAX_CHARS,
                chars
            )));
        }
        Ok(Self(title))
    }

    /// Get the title text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QuestionTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Points awarded for a question (1–100 inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Points(u32);

impl Points {
    /// Minimum allowed points.
    pub const MIN: u32 = 1;
    /// Maximum allowed points.
    pub const MAX: u32 = 100;

    /// Create a validated points value.
    pub fn new(points: u32) -> Result<Self, DomainError> {
        if !(Self::MIN..=Self::MAX).contains(&points) {
            return Err(DomainError::Validation(format!(
                "points must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                points
            )));
        }
        Ok(Self(points))
    }

    /// Get the raw value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Default for Points {
    fn default() -> Self {
        Self(1)
    }
}

/// How many choices may be selected at once (at least 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MaxSelections(u32);

impl MaxSelections {
    /// Create a validated selection limit.
    pub fn new(max_selections: u32) -> Result<Self, DomainError> {
        if max_selections == 0 {
            return Err(DomainError::Validation(
                "max_selections must be at least 1".to_string(),
            ));
        }
        Ok(Self(max_selections))
    }

    /// Get the raw value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Default for MaxSelections {
    fn default() -> Self {
        Self(1)
    }
}

/// Display text of a choice (1–100 characters).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceText(String);

impl ChoiceText {
    /// Maximum text length in characters.
    pub const MAX_CHARS: usize = 100;

    /// Create a validated choice text.
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        let chars = text.chars().count();
        if chars == 0 {
            return Err(DomainError::Validation(
                "choice text must not be empty".to_string(),
            ));
        }
        if chars > Self::MAX_CHARS {
            return Err(DomainError::Validation(format!(
                "choice text must be at most {} characters, got {}",
                Self::MAX_CHARS,
                chars
            )));
        }
        Ok(Self(text))
    }

    /// Get the text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChoiceText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
