//! CharacterBase aggregate - a race plus the attribute scores it owns
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: the attribute set is only reachable read-only
//! - **Valid by construction**: `new()` takes an already validated `AttributeSet`
//! - **Check-then-write**: every mutation validates before committing, so a
//!   failed call leaves the character exactly as it was

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{Attribute, AttributeSet, Race};

/// Amount applied by a single step of increment/decrement.
pub const DEFAULT_STEP: i64 = 1;

/// The base of every playable character.
///
/// # Invariants
///
/// - Every attribute score stays within `[0, 20]` across all mutations
///
/// # Example
///
/// ```
/// use charforge_domain::{AttributeSet, CharacterBase, Race, DEFAULT_STEP};
///
/// let attrs = AttributeSet::new(8, 8, 8, 8, 8, 8).unwrap();
/// let mut character = CharacterBase::new(attrs, Race::Dragonborn);
///
/// character.increment_attr("strength", DEFAULT_STEP).unwrap();
/// character.increment_attr("strength", 2).unwrap();
/// assert_eq!(character.attributes().strength(), 11);
///
/// character.decrement_attr("strength", 3).unwrap();
/// assert_eq!(character.attributes().strength(), 8);
///
/// // Going below zero is rejected and nothing changes
/// assert!(character.decrement_attr("strength", 9).is_err());
/// assert_eq!(character.attributes().strength(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterBase {
    attributes: AttributeSet,
    race: Race,
}

impl CharacterBase {
    pub fn new(attributes: AttributeSet, race: Race) -> Self {
        Self { attributes, race }
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    /// Returns the character's current attribute scores.
    #[inline]
    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    #[inline]
    pub fn race(&self) -> Race {
        self.race
    }

    // =========================================================================
    // Name-addressed mutations
    // =========================================================================

    /// Raise the attribute called `name` by `amount`, returning the new score.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidMagnitude` if `amount` is not positive
    /// - `DomainError::UnknownAttribute` if `name` is not an attribute
    /// - `DomainError::AttributeBounds` if the result would exceed 20
    pub fn increment_attr(&mut self, name: &str, amount: i64) -> Result<u8, DomainError> {
        ensure_positive(amount)?;
        self.modify_attr(name, amount)
    }

    /// Lower the attribute called `name` by `amount`, returning the new score.
    ///
    /// `amount` is a magnitude: pass `3` to subtract three.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidMagnitude` if `amount` is not positive
    /// - `DomainError::UnknownAttribute` if `name` is not an attribute
    /// - `DomainError::AttributeBounds` if the result would drop below 0
    pub fn decrement_attr(&mut self, name: &str, amount: i64) -> Result<u8, DomainError> {
        ensure_positive(amount)?;
        self.modify_attr(name, -amount)
    }

    // =========================================================================
    // Typed mutations
    // =========================================================================

    /// Same as [`increment_attr`](Self::increment_attr) for an already resolved attribute.
    pub fn increment(&mut self, attribute: Attribute, amount: i64) -> Result<u8, DomainError> {
        ensure_positive(amount)?;
        self.apply_delta(attribute, amount)
    }

    /// Same as [`decrement_attr`](Self::decrement_attr) for an already resolved attribute.
    pub fn decrement(&mut self, attribute: Attribute, amount: i64) -> Result<u8, DomainError> {
        ensure_positive(amount)?;
        self.apply_delta(attribute, -amount)
    }

    /// Resolve `name` and shift its score by `delta`.
    pub(crate) fn modify_attr(&mut self, name: &str, delta: i64) -> Result<u8, DomainError> {
        let attribute: Attribute = name.parse()?;
        self.apply_delta(attribute, delta)
    }

    fn apply_delta(&mut self, attribute: Attribute, delta: i64) -> Result<u8, DomainError> {
        let current = self.attributes.get(attribute);
        // Saturated results are far outside [0,20] and fail the bound check.
        let target = i64::from(current).saturating_add(delta);

        if let Err(err) = self.attributes.set(attribute, target) {
            tracing::warn!(
                attribute = %attribute,
                current,
                delta,
                "Rejected attribute change: {}",
                err
            );
            return Err(err);
        }

        let score = self.attributes.get(attribute);
        tracing::debug!(
            attribute = %attribute,
            race = %self.race,
            old = current,
            new = score,
            "Modified attribute"
        );
        Ok(score)
    }
}

fn ensure_positive(amount: i64) -> Result<(), DomainError> {
    if amount <= 0 {
        return Err(DomainError::invalid_magnitude(amount));
    }
    Ok(())
}
