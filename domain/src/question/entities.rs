//! Question aggregate entities.
//!
//! [`Question`] is the aggregate root: it owns its [`Choice`]s, hands out
//! their ids, and is the only place a choice can be created, mutated, or
//! removed. [`Choice`] itself is a read-only record of validated state.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::DomainError;
use crate::core::id::{ChoiceId, QuestionId, QuestionIdSource};
use crate::question::value_objects::{ChoiceText, MaxSelections, Points, QuestionTitle};

/// A selectable answer owned by a [`Question`] (Entity).
///
/// Choices are created through [`Question::add_choice`] only. Id and text
/// never change after creation; the correctness flag is reassigned through
/// [`Question::set_correct_choices`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    id: ChoiceId,
    text: ChoiceText,
    is_correct: bool,
}

impl Choice {
    fn new(id: ChoiceId, text: ChoiceText, is_correct: bool) -> Self {
        Self {
            id,
            text,
            is_correct,
        }
    }

    /// Id of this choice, unique within its question.
    pub fn id(&self) -> ChoiceId {
        self.id
    }

    /// Display text of this choice.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Whether this choice is currently marked correct.
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

/// A quiz question and its choices (Aggregate Root).
///
/// All invariants live here: field validation on construction, sequential
/// choice ids that are never reused, and the selection-count limit. Every
/// fallible operation validates before touching state, so a failed call
/// leaves the question unchanged.
///
/// # Example
///
/// ```
/// use quiz_domain::Question;
///
/// let mut question = Question::new("Which of these are crustaceans?")?
///     .with_points(10)?
///     .with_max_selections(2)?;
///
/// question.add_choice("Crab", true)?;
/// question.add_choice("Octopus", false)?;
/// question.add_choice("Lobster", true)?;
///
/// let picked = question.select_choices([1.into(), 3.into()])?;
/// assert_eq!(picked.len(), 2);
/// # Ok::<(), quiz_domain::DomainError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    title: QuestionTitle,
    points: Points,
    max_selections: MaxSelections,
    choices: Vec<Choice>,
    // Monotonic; removal never rewinds it, so choice ids are never reused.
    next_choice_id: u32,
}

impl Question {
    /// Create a question with default points (1) and selection limit (1).
    ///
    /// The id comes from the shared process-wide counter; use
    /// [`Question::new_with_source`] to control id allocation.
    pub fn new(title: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self::with_id(QuestionId::fresh(), QuestionTitle::new(title)?))
    }

    /// Create a question drawing its id from the given source.
    pub fn new_with_source(
        ids: &impl QuestionIdSource,
        title: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self::with_id(ids.next_id(), QuestionTitle::new(title)?))
    }

    fn with_id(id: QuestionId, title: QuestionTitle) -> Self {
        Self {
            id,
            title,
            points: Points::default(),
            max_selections: MaxSelections::default(),
            choices: Vec::new(),
            next_choice_id: 1,
        }
    }

    /// Set the points awarded for this question (1–100).
    pub fn with_points(mut self, points: u32) -> Result<Self, DomainError> {
        self.points = Points::new(points)?;
        Ok(self)
    }

    /// Set how many choices may be selected at once (at least 1).
    pub fn with_max_selections(mut self, max_selections: u32) -> Result<Self, DomainError> {
        self.max_selections = MaxSelections::new(max_selections)?;
        Ok(self)
    }

    /// Process-unique id of this question.
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Title text.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Points awarded for a correct answer.
    pub fn points(&self) -> u32 {
        self.points.value()
    }

    /// Maximum number of choices selectable at once.
    pub fn max_selections(&self) -> u32 {
        self.max_selections.value()
    }

    /// All choices in insertion order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Look up a choice by id.
    pub fn choice(&self, id: ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == id)
    }

    /// Choices currently marked correct, in insertion order.
    pub fn correct_choices(&self) -> impl Iterator<Item = &Choice> {
        self.choices.iter().filter(|c| c.is_correct)
    }

    /// Add a choice with the next sequential id and return it.
    ///
    /// Ids start at 1 and are never reused, even after removal.
    pub fn add_choice(
        &mut self,
        text: impl Into<String>,
        is_correct: bool,
    ) -> Result<Choice, DomainError> {
        let text = ChoiceText::new(text)?;
        let id = ChoiceId::new(self.next_choice_id);
        self.next_choice_id += 1;

        let choice = Choice::new(id, text, is_correct);
        self.choices.push(choice.clone());
        debug!(question = %self.id, choice = %id, "added choice");
        Ok(choice)
    }

    /// Remove the choice with the given id, returning it.
    ///
    /// Remaining choices keep their ids and relative order.
    pub fn remove_choice_by_id(&mut self, id: ChoiceId) -> Result<Choice, DomainError> {
        let index = self
            .choices
            .iter()
            .position(|c| c.id == id)
            .ok_or(DomainError::ChoiceNotFound(id))?;
        debug!(question = %self.id, choice = %id, "removed choice");
        Ok(self.choices.remove(index))
    }

    /// Remove every choice. Idempotent; does not rewind id assignment.
    pub fn remove_all_choices(&mut self) {
        self.choices.clear();
    }

    /// Validate a selection against the `max_selections` limit.
    ///
    /// Returns the deduplicated set of requested ids; duplicates count once
    /// toward the limit. Ids are not checked against the owned choices —
    /// existence is the caller's concern.
    pub fn select_choices(
        &self,
        ids: impl IntoIterator<Item = ChoiceId>,
    ) -> Result<HashSet<ChoiceId>, DomainError> {
        let selected: HashSet<ChoiceId> = ids.into_iter().collect();
        let limit = self.max_selections.value() as usize;
        if selected.len() > limit {
            return Err(DomainError::Validation(format!(
                "cannot select {} choices, at most {} allowed",
                selected.len(),
                limit
            )));
        }
        Ok(selected)
    }

    /// Mark exactly the given ids correct and every other choice incorrect.
    ///
    /// Total reassignment: prior flags are overwritten. Ids that match no
    /// owned choice are ignored.
    pub fn set_correct_choices(&mut self, ids: impl IntoIterator<Item = ChoiceId>) {
        let correct: HashSet<ChoiceId> = ids.into_iter().collect();
        for choice in &mut self.choices {
            choice.is_correct = correct.contains(&choice.id);
        }
    }
}
