//! Attribute value object - the six ability scores a character carries.
//!
//! Provides type safety for attribute references instead of using magic
//! strings like "strength", "dexterity".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Character attributes tracked by an [`AttributeSet`](super::AttributeSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    /// Physical power
    Strength,
    /// Agility and reflexes
    Dexterity,
    /// Endurance and health
    Constitution,
    /// Reasoning and memory
    Intelligence,
    /// Perception and insight
    Wisdom,
    /// Force of personality
    Charisma,
}

impl Attribute {
    /// All attributes in canonical order.
    pub const ALL: [Attribute; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// Returns the lowercase name used for lookups (e.g., "strength").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Constitution => "constitution",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
            Self::Charisma => "charisma",
        }
    }

    /// Returns the capitalised name (e.g., "Strength").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }

    /// Every valid lookup name, in canonical order.
    pub fn names() -> [&'static str; 6] {
        Self::ALL.map(|attribute| attribute.as_str())
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strength" => Ok(Self::Strength),
            "dexterity" => Ok(Self::Dexterity),
            "constitution" => Ok(Self::Constitution),
            "intelligence" => Ok(Self::Intelligence),
            "wisdom" => Ok(Self::Wisdom),
            "charisma" => Ok(Self::Charisma),
            _ => Err(DomainError::unknown_attribute(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_as_str() {
        assert_eq!(Attribute::Strength.as_str(), "strength");
        assert_eq!(Attribute::Dexterity.as_str(), "dexterity");
        assert_eq!(Attribute::Constitution.as_str(), "constitution");
        assert_eq!(Attribute::Intelligence.as_str(), "intelligence");
        assert_eq!(Attribute::Wisdom.as_str(), "wisdom");
        assert_eq!(Attribute::Charisma.as_str(), "charisma");
    }

    #[test]
    fn test_attribute_from_str() {
        assert_eq!(Attribute::from_str("strength"), Ok(Attribute::Strength));
        assert_eq!(Attribute::from_str("wisdom"), Ok(Attribute::Wisdom));
        assert!(Attribute::from_str("str").is_err());
        assert!(Attribute::from_str("blah")
            .unwrap_err()
            .is_unknown_attribute());
    }

    #[test]
    fn test_attribute_from_str_is_exact() {
        for name in ["Strength", " strength", "strength ", "WISDOM", " WISDOM "] {
            assert_eq!(
                Attribute::from_str(name),
                Err(DomainError::unknown_attribute(name))
            );
        }
    }

    #[test]
    fn test_every_name_parses_back() {
        for attribute in Attribute::ALL {
            assert_eq!(attribute.as_str().parse::<Attribute>(), Ok(attribute));
        }
    }

    #[test]
    fn test_attribute_display() {
        assert_eq!(format!("{}", Attribute::Charisma), "charisma");
        assert_eq!(Attribute::Charisma.display_name(), "Charisma");
    }

    #[test]
    fn test_attribute_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Attribute::Dexterity).unwrap();
        assert_eq!(json, "\"dexterity\"");
        let parsed: Attribute = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Attribute::Dexterity);
        assert!(serde_json::from_str::<Attribute>("\"luck\"").is_err());
    }
}
