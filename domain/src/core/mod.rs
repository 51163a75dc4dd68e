//! Core domain concepts shared across the crate.
//!
//! - [`error::DomainError`] — domain-level errors
//! - [`id`] — question and choice identifier types and id allocation

pub mod error;
pub mod id;
