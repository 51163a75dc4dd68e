//! The question subdomain — aggregate root and validated field types.
//!
//! - [`entities::Question`] — aggregate root owning its choices
//! - [`entities::Choice`] — read-only child record
//! - [`value_objects`] — validated title, points, and text newtypes

pub mod entities;
pub mod value_objects;

pub use entities::{Choice, Question};
