//! Creator configuration

use std::env;

use anyhow::{bail, Context, Result};

use charforge_domain::{Attribute, AttributeSet, Race};

/// Score every attribute starts at when `CHARFORGE_ATTRIBUTES` is unset.
pub const DEFAULT_SCORE: i64 = 8;

/// Whether an adjustment raises or lowers a score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increment,
    Decrement,
}

/// One `name+amount` / `name-amount` entry of `CHARFORGE_ADJUSTMENTS`.
///
/// The name is kept as written so it is resolved by the character itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjustment {
    pub attribute: String,
    pub direction: Direction,
    pub amount: i64,
}

/// Creator configuration loaded from environment
#[derive(Debug, Clone)]
pub struct CreatorConfig {
    /// Race of the created character
    pub race: Race,
    /// Starting scores
    pub attributes: AttributeSet,
    /// Adjustments applied in order after creation
    pub adjustments: Vec<Adjustment>,
}

impl CreatorConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let race = match lookup("CHARFORGE_RACE") {
            Some(label) => label
                .parse::<Race>()
                .context("CHARFORGE_RACE must be a known race")?,
            None => Race::Human,
        };

        let attributes = match lookup("CHARFORGE_ATTRIBUTES") {
            Some(raw) => parse_attributes(&raw)
                .context("CHARFORGE_ATTRIBUTES must list all six attributes as name=value")?,
            None => default_attributes()?,
        };

        let adjustments = match lookup("CHARFORGE_ADJUSTMENTS") {
            Some(raw) => parse_adjustments(&raw)
                .context("CHARFORGE_ADJUSTMENTS must be name+amount or name-amount entries")?,
            None => Vec::new(),
        };

        Ok(Self {
            race,
            attributes,
            adjustments,
        })
    }
}

fn default_attributes() -> Result<AttributeSet> {
    let scores = Attribute::names().map(|name| (name, DEFAULT_SCORE));
    Ok(AttributeSet::from_scores(scores)?)
}

fn entries(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// Parse `strength=8,dexterity=14,...` into a validated set.
pub fn parse_attributes(raw: &str) -> Result<AttributeSet> {
    let mut scores = Vec::new();
    for entry in entries(raw) {
        let Some((name, value)) = entry.split_once('=') else {
            bail!("expected name=value, got '{}'", entry);
        };
        let value: i64 = value
            .trim()
            .parse()
            .with_context(|| format!("score for '{}' is not an integer", name.trim()))?;
        scores.push((name.trim(), value));
    }
    Ok(AttributeSet::from_scores(scores)?)
}

/// Parse `strength+2,wisdom-1` into adjustments.
pub fn parse_adjustments(raw: &str) -> Result<Vec<Adjustment>> {
    entries(raw).map(parse_adjustment).collect()
}

fn parse_adjustment(entry: &str) -> Result<Adjustment> {
    let Some(split) = entry.find(|c: char| c == '+' || c == '-') else {
        bail!("expected name+amount or name-amount, got '{}'", entry);
    };
    let (name, rest) = entry.split_at(split);
    let direction = if rest.starts_with('+') {
        Direction::Increment
    } else {
        Direction::Decrement
    };
    let amount: i64 = rest[1..]
        .trim()
        .parse()
        .with_context(|| format!("amount in '{}' is not an integer", entry))?;

    Ok(Adjustment {
        attribute: name.trim().to_string(),
        direction,
        amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CreatorConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.race, Race::Human);
        assert!(config.attributes.iter().all(|(_, score)| score == 8));
        assert!(config.adjustments.is_empty());
    }

    #[test]
    fn test_full_config() {
        let config = CreatorConfig::from_lookup(lookup_from(&[
            ("CHARFORGE_RACE", "Half-Orc"),
            (
                "CHARFORGE_ATTRIBUTES",
                "strength=15, dexterity=14, constitution=13, intelligence=12, wisdom=10, charisma=8",
            ),
            ("CHARFORGE_ADJUSTMENTS", "strength+2, charisma-1"),
        ]))
        .unwrap();

        assert_eq!(config.race, Race::HalfOrc);
        assert_eq!(
            config.attributes,
            AttributeSet::new(15, 14, 13, 12, 10, 8).unwrap()
        );
        assert_eq!(
            config.adjustments,
            vec![
                Adjustment {
                    attribute: "strength".to_string(),
                    direction: Direction::Increment,
                    amount: 2,
                },
                Adjustment {
                    attribute: "charisma".to_string(),
                    direction: Direction::Decrement,
                    amount: 1,
                },
            ]
        );
    }

    #[test]
    fn test_unknown_race_is_rejected() {
        for label in ["Orc", "half-orc"] {
            let err = CreatorConfig::from_lookup(lookup_from(&[("CHARFORGE_RACE", label)]))
                .unwrap_err();
            assert!(format!("{:#}", err).contains("CHARFORGE_RACE"));
        }
    }

    #[test]
    fn test_out_of_range_attribute_is_rejected() {
        let err = parse_attributes(
            "strength=21,dexterity=8,constitution=8,intelligence=8,wisdom=8,charisma=8",
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("bound [0,20]"));
    }

    #[test]
    fn test_missing_attribute_is_rejected() {
        let err = parse_attributes("strength=8").unwrap_err();
        assert!(format!("{:#}", err).contains("missing"));
    }

    #[test]
    fn test_malformed_attribute_entries() {
        assert!(parse_attributes("strength").is_err());
        assert!(parse_attributes("strength=high").is_err());
    }

    #[test]
    fn test_adjustments_keep_names_verbatim() {
        let adjustments = parse_adjustments("luck+1").unwrap();
        assert_eq!(adjustments[0].attribute, "luck");
    }

    #[test]
    fn test_miscased_adjustment_name_reaches_the_domain_unchanged() {
        let adjustments = parse_adjustments("Strength+1").unwrap();
        assert_eq!(adjustments[0].attribute, "Strength");
    }

    #[test]
    fn test_adjustment_amount_sign_is_kept_for_the_domain() {
        // "wisdom+-2" parses; the character rejects the non-positive amount.
        let adjustments = parse_adjustments("wisdom+-2").unwrap();
        assert_eq!(adjustments[0].direction, Direction::Increment);
        assert_eq!(adjustments[0].amount, -2);
    }

    #[test]
    fn test_malformed_adjustments() {
        assert!(parse_adjustments("strength").is_err());
        assert!(parse_adjustments("strength+").is_err());
        assert!(parse_adjustments("strength+x").is_err());
    }
}
