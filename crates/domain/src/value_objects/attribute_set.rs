//! AttributeSet - the six bounded ability scores of a character
//!
//! Every score lies in `[MIN_SCORE, MAX_SCORE]` at all times. All write paths
//! (constructors, setters, deserialisation) go through [`validate_score`].

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Attribute;

/// Lowest score an attribute may hold.
pub const MIN_SCORE: u8 = 0;

/// Highest score an attribute may hold.
pub const MAX_SCORE: u8 = 20;

/// Check a candidate score against `[MIN_SCORE, MAX_SCORE]`.
///
/// # Errors
///
/// Returns `DomainError::AttributeBounds` naming `attribute` if `value` is out
/// of range.
pub fn validate_score(attribute: Attribute, value: i64) -> Result<u8, DomainError> {
    u8::try_from(value)
        .ok()
        .filter(|score| (MIN_SCORE..=MAX_SCORE).contains(score))
        .ok_or_else(|| DomainError::attribute_bounds(attribute, value))
}

/// The six ability scores of a character.
///
/// # Invariants
///
/// - Every score is within `[0, 20]`
///
/// # Example
///
/// ```
/// use charforge_domain::{Attribute, AttributeSet};
///
/// let mut attrs = AttributeSet::new(8, 14, 12, 10, 13, 15).unwrap();
/// assert_eq!(attrs.dexterity(), 14);
///
/// attrs.set(Attribute::Wisdom, 20).unwrap();
/// assert_eq!(attrs.get(Attribute::Wisdom), 20);
///
/// // Out-of-range writes are rejected and leave the score alone
/// assert!(attrs.set_wisdom(21).is_err());
/// assert_eq!(attrs.wisdom(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAttributeSet")]
pub struct AttributeSet {
    strength: u8,
    dexterity: u8,
    constitution: u8,
    intelligence: u8,
    wisdom: u8,
    charisma: u8,
}

macro_rules! score_accessors {
    ($($field:ident, $setter:ident => $attribute:ident;)*) => {
        $(
            #[inline]
            pub fn $field(&self) -> u8 {
                self.$field
            }

            /// Set this score, rejecting values outside `[0, 20]`.
            pub fn $setter(&mut self, value: i64) -> Result<(), DomainError> {
                self.set(Attribute::$attribute, value)
            }
        )*
    };
}

impl AttributeSet {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a set from all six scores.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AttributeBounds` for the first score outside
    /// `[0, 20]`; no set is produced.
    pub fn new(
        strength: i64,
        dexterity: i64,
        constitution: i64,
        intelligence: i64,
        wisdom: i64,
        charisma: i64,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            strength: validate_score(Attribute::Strength, strength)?,
            dexterity: validate_score(Attribute::Dexterity, dexterity)?,
            constitution: validate_score(Attribute::Constitution, constitution)?,
            intelligence: validate_score(Attribute::Intelligence, intelligence)?,
            wisdom: validate_score(Attribute::Wisdom, wisdom)?,
            charisma: validate_score(Attribute::Charisma, charisma)?,
        })
    }

    /// Create a set from `(name, score)` pairs.
    ///
    /// Exactly the six attribute names must be supplied, each once.
    ///
    /// # Errors
    ///
    /// - `DomainError::Shape` for an unrecognised, duplicated or missing name
    /// - `DomainError::AttributeBounds` for a score outside `[0, 20]`
    pub fn from_scores<I, S>(scores: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let mut slots: [Option<u8>; 6] = [None; 6];

        for (name, value) in scores {
            let name = name.as_ref();
            let attribute: Attribute = name
                .parse()
                .map_err(|_| DomainError::shape(format!("unexpected field '{}'", name)))?;
            let slot = &mut slots[attribute as usize];
            if slot.is_some() {
                return Err(DomainError::shape(format!(
                    "{} supplied more than once",
                    attribute
                )));
            }
            *slot = Some(validate_score(attribute, value)?);
        }

        let missing: Vec<&str> = Attribute::ALL
            .iter()
            .filter(|attribute| slots[**attribute as usize].is_none())
            .map(|attribute| attribute.as_str())
            .collect();
        if !missing.is_empty() {
            return Err(DomainError::shape(format!(
                "missing {}",
                missing.join(", ")
            )));
        }

        let [Some(strength), Some(dexterity), Some(constitution), Some(intelligence), Some(wisdom), Some(charisma)] =
            slots
        else {
            return Err(DomainError::shape("incomplete attribute set"));
        };

        Ok(Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        })
    }

    // =========================================================================
    // Per-field accessors
    // =========================================================================

    score_accessors! {
        strength, set_strength => Strength;
        dexterity, set_dexterity => Dexterity;
        constitution, set_constitution => Constitution;
        intelligence, set_intelligence => Intelligence;
        wisdom, set_wisdom => Wisdom;
        charisma, set_charisma => Charisma;
    }

    // =========================================================================
    // Attribute-addressed access
    // =========================================================================

    /// Current score of `attribute`.
    pub fn get(&self, attribute: Attribute) -> u8 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Constitution => self.constitution,
            Attribute::Intelligence => self.intelligence,
            Attribute::Wisdom => self.wisdom,
            Attribute::Charisma => self.charisma,
        }
    }

    /// Overwrite the score of `attribute`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AttributeBounds` if `value` is outside `[0, 20]`;
    /// the stored score is unchanged.
    pub fn set(&mut self, attribute: Attribute, value: i64) -> Result<(), DomainError> {
        let score = validate_score(attribute, value)?;
        *self.slot_mut(attribute) = score;
        Ok(())
    }

    /// Iterate `(attribute, score)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, u8)> + '_ {
        Attribute::ALL
            .into_iter()
            .map(move |attribute| (attribute, self.get(attribute)))
    }

    /// Sum of all six scores.
    pub fn total(&self) -> u32 {
        self.iter().map(|(_, score)| u32::from(score)).sum()
    }

    fn slot_mut(&mut self, attribute: Attribute) -> &mut u8 {
        match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Dexterity => &mut self.dexterity,
            Attribute::Constitution => &mut self.constitution,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Wisdom => &mut self.wisdom,
            Attribute::Charisma => &mut self.charisma,
        }
    }
}

/// Unvalidated wire shape; every field required, nothing extra.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAttributeSet {
    strength: i64,
    dexterity: i64,
    constitution: i64,
    intelligence: i64,
    wisdom: i64,
    charisma: i64,
}

impl TryFrom<RawAttributeSet> for AttributeSet {
    type Error = DomainError;

    fn try_from(raw: RawAttributeSet) -> Result<Self, Self::Error> {
        Self::new(
            raw.strength,
            raw.dexterity,
            raw.constitution,
            raw.intelligence,
            raw.wisdom,
            raw.charisma,
        )
    }
}
