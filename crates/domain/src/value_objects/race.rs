//! Race labels available at character creation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Playable races. Carried on a character as a label only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    Dragonborn,
    Dwarf,
    Elf,
    Gnome,
    #[serde(rename = "Half-Elf")]
    HalfElf,
    #[serde(rename = "Half-Orc")]
    HalfOrc,
    Halfling,
    Human,
    Tiefling,
}

impl Race {
    pub const ALL: [Race; 9] = [
        Self::Dragonborn,
        Self::Dwarf,
        Self::Elf,
        Self::Gnome,
        Self::HalfElf,
        Self::HalfOrc,
        Self::Halfling,
        Self::Human,
        Self::Tiefling,
    ];

    /// Returns the display label (e.g., "Half-Elf").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dragonborn => "Dragonborn",
            Self::Dwarf => "Dwarf",
            Self::Elf => "Elf",
            Self::Gnome => "Gnome",
            Self::HalfElf => "Half-Elf",
            Self::HalfOrc => "Half-Orc",
            Self::Halfling => "Halfling",
            Self::Human => "Human",
            Self::Tiefling => "Tiefling",
        }
    }

    pub fn labels() -> [&'static str; 9] {
        Self::ALL.map(|race| race.label())
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Race {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|race| race.label() == s)
            .ok_or_else(|| DomainError::unknown_race(s))
    }
}
