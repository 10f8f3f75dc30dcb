//! Value objects - Immutable objects defined by their attributes

mod attribute;
mod attribute_set;
mod race;

pub use attribute::Attribute;
pub use attribute_set::{validate_score, AttributeSet, MAX_SCORE, MIN_SCORE};
pub use race::Race;
