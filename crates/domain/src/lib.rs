//! charforge domain - character attributes for a tabletop role-playing game
//! creator.
//!
//! A [`CharacterBase`] owns one [`AttributeSet`] of six scores, each kept in
//! `[0, 20]`, and a [`Race`] label. Scores change only through bounded
//! increment/decrement operations that fail with a [`DomainError`] and leave
//! the character untouched.

pub mod aggregates;
pub mod error;
pub mod value_objects;

pub use aggregates::{CharacterBase, DEFAULT_STEP};
pub use error::DomainError;
pub use value_objects::{validate_score, Attribute, AttributeSet, Race, MAX_SCORE, MIN_SCORE};
