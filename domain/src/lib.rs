//! Domain model for quiz questions.
//!
//! This crate contains the core business logic: the [`Question`] aggregate,
//! its owned [`Choice`] records, and the invariants guarding both. It has no
//! dependencies on storage or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question (Aggregate Root)
//!
//! A question owns an ordered set of choices and is the only way to create,
//! mutate, or remove them. Construction and every mutation validate their
//! inputs up front; a failed call leaves the question unchanged.
//!
//! ## Choice (Owned Child)
//!
//! A validated record with an id unique within its question, assigned
//! sequentially starting at 1 and never reused, even after removal.
//!
//! # Example
//!
//! ```
//! use quiz_domain::Question;
//!
//! let mut question = Question::new("What year did Rust 1.0 ship?")?;
//! question.add_choice("2010", false)?;
//! question.add_choice("2015", true)?;
//!
//! question.set_correct_choices([2.into()]);
//! assert_eq!(question.correct_choices().count(), 1);
//! # Ok::<(), quiz_domain::DomainError>(())
//! ```

pub mod core;
pub mod question;

// Re-export commonly used types
pub use core::{
    error::DomainError,
    id::{ChoiceId, QuestionId, QuestionIdSource, SequentialIdSource},
};
pub use question::{
    entities::{Choice, Question},
    value_objects::{ChoiceText, MaxSelections, Points, QuestionTitle},
};
