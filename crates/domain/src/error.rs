//! Unified error types for the domain layer
//!
//! Every failure the attribute model can produce is a variant of
//! [`DomainError`], so callers match on one type regardless of which
//! operation failed.

use thiserror::Error;

use crate::value_objects::{Attribute, Race};

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Constructor input had missing, extra or duplicated fields
    #[error("Malformed attributes: {0}")]
    Shape(String),

    /// A resulting attribute score would fall outside [0,20]
    #[error("Attribute {attribute} must be on the bound [0,20], got {value}")]
    AttributeBounds { attribute: Attribute, value: i64 },

    /// Name does not resolve to one of the six attributes
    #[error("Invalid attribute '{name}'. Allowed are: {}", Attribute::names().join(", "))]
    UnknownAttribute { name: String },

    /// Increment/decrement amount was not a positive integer
    #[error("Provide a positive integer, got {amount}")]
    InvalidMagnitude { amount: i64 },

    /// Label does not resolve to one of the nine races
    #[error("Invalid race '{label}'. Allowed are: {}", Race::labels().join(", "))]
    UnknownRace { label: String },
}

impl DomainError {
    /// Creates a shape error for malformed constructor input.
    ///
    /// # Example
    /// ```ignore
    /// if seen.contains(&attribute) {
    ///     return Err(DomainError::shape(format!("{attribute} supplied twice")));
    /// }
    /// ```
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }

    /// Create a bounds error for the given attribute and rejected value
    pub fn attribute_bounds(attribute: Attribute, value: i64) -> Self {
        Self::AttributeBounds { attribute, value }
    }

    /// Create an unknown attribute error
    pub fn unknown_attribute(name: impl Into<String>) -> Self {
        Self::UnknownAttribute { name: name.into() }
    }

    /// Create an invalid magnitude error
    pub fn invalid_magnitude(amount: i64) -> Self {
        Self::InvalidMagnitude { amount }
    }

    /// Create an unknown race error
    pub fn unknown_race(label: impl Into<String>) -> Self {
        Self::UnknownRace {
            label: label.into(),
        }
    }

    /// Whether this is a bound violation.
    pub fn is_bounds(&self) -> bool {
        matches!(self, Self::AttributeBounds { .. })
    }

    /// Whether this is an unknown attribute name.
    pub fn is_unknown_attribute(&self) -> bool {
        matches!(self, Self::UnknownAttribute { .. })
    }

    /// Whether this is a non-positive increment/decrement amount.
    pub fn is_invalid_magnitude(&self) -> bool {
        matches!(self, Self::InvalidMagnitude { .. })
    }
}
