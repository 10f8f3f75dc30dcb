//! Builds a character from a [`CreatorConfig`] and applies its adjustments.

use charforge_domain::{CharacterBase, DomainError};

use crate::config::{Adjustment, CreatorConfig, Direction};

/// Outcome of one configured adjustment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustmentOutcome {
    pub adjustment: Adjustment,
    pub result: Result<u8, DomainError>,
}

/// Create the configured character and apply every adjustment in order.
///
/// A rejected adjustment leaves the character unchanged and does not stop the
/// ones after it.
pub fn create(config: CreatorConfig) -> (CharacterBase, Vec<AdjustmentOutcome>) {
    let mut character = CharacterBase::new(config.attributes, config.race);
    tracing::info!(race = %character.race(), "Created character");

    let outcomes = config
        .adjustments
        .into_iter()
        .map(|adjustment| {
            let result = apply(&mut character, &adjustment);
            AdjustmentOutcome { adjustment, result }
        })
        .collect();

    (character, outcomes)
}

fn apply(character: &mut CharacterBase, adjustment: &Adjustment) -> Result<u8, DomainError> {
    match adjustment.direction {
        Direction::Increment => character.increment_attr(&adjustment.attribute, adjustment.amount),
        Direction::Decrement => character.decrement_attr(&adjustment.attribute, adjustment.amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charforge_domain::{Attribute, AttributeSet, Race};

    fn config(adjustments: &str) -> CreatorConfig {
        CreatorConfig {
            race: Race::Elf,
            attributes: AttributeSet::new(8, 8, 8, 8, 8, 8).unwrap(),
            adjustments: crate::config::parse_adjustments(adjustments).unwrap(),
        }
    }

    #[test]
    fn test_applies_adjustments_in_order() {
        let (character, outcomes) = create(config("strength+1, strength+2, strength-3"));
        let results: Vec<_> = outcomes.into_iter().map(|o| o.result).collect();
        assert_eq!(results, vec![Ok(9), Ok(11), Ok(8)]);
        assert_eq!(character.attributes().strength(), 8);
        assert_eq!(character.race(), Race::Elf);
    }

    #[test]
    fn test_rejected_adjustments_do_not_stop_the_rest() {
        let (character, outcomes) = create(config("strength-9, luck+1, wisdom+0, wisdom+12"));

        assert_eq!(
            outcomes[0].result,
            Err(DomainError::attribute_bounds(Attribute::Strength, -1))
        );
        assert!(outcomes[1].result.as_ref().unwrap_err().is_unknown_attribute());
        assert!(outcomes[2].result.as_ref().unwrap_err().is_invalid_magnitude());
        assert_eq!(outcomes[3].result, Ok(20));

        assert_eq!(character.attributes().strength(), 8);
        assert_eq!(character.attributes().wisdom(), 20);
    }

    #[test]
    fn test_miscased_attribute_name_is_unknown() {
        let (character, outcomes) = create(config("Strength+1, WISDOM-1"));
        assert_eq!(
            outcomes[0].result,
            Err(DomainError::unknown_attribute("Strength"))
        );
        assert_eq!(
            outcomes[1].result,
            Err(DomainError::unknown_attribute("WISDOM"))
        );
        assert_eq!(character.attributes().strength(), 8);
        assert_eq!(character.attributes().wisdom(), 8);
    }
}
