//! Shared rules for mapping inventory entries to host item fields
//!
//! Each function is a stateless transform over one item record; the
//! item-specific parsers compose them.

use crate::domain::dictionary;
use crate::domain::entities::{ItemData, ItemDefinition, Proficiency};
use crate::domain::services::version;
use crate::domain::value_objects::{ConsumableUses, LimitedUses};

/// Host system version that switched the rarity field to a dropdown of
/// lowercase values
const RARITY_DROPDOWN_VERSION: &str = "1.4.2";

/// Rarity string in the casing the host system version expects
pub fn item_rarity(definition: &ItemDefinition, system_version: &str) -> String {
    let rarity_dropdown = version::at_least(system_version, RARITY_DROPDOWN_VERSION);
    match &definition.rarity {
        Some(rarity) if rarity_dropdown => rarity.to_lowercase(),
        Some(rarity) => rarity.clone(),
        None => String::new(),
    }
}

/// True only when the item supports attunement and is currently attuned
pub fn is_attuned(item: &ItemData) -> bool {
    if item.definition.can_attune == Some(true) {
        item.is_attuned
    } else {
        false
    }
}

/// True only when the item supports equipping and is currently equipped
pub fn is_equipped(item: &ItemData) -> bool {
    if item.definition.can_equip == Some(true) {
        item.equipped
    } else {
        false
    }
}

/// Limited-use block for the host schema
///
/// Remaining value is max minus the used count, defaulting to max when the
/// service omitted the count. Items without a limited-use descriptor get a
/// zeroed block.
pub fn limited_uses(item: &ItemData) -> LimitedUses {
    match &item.limited_use {
        Some(limited_use) => {
            let reset = limited_use.reset_type.and_then(dictionary::reset_type);
            LimitedUses {
                max: limited_use.max_uses,
                value: match limited_use.number_used {
                    Some(used) => limited_use.max_uses - used,
                    None => limited_use.max_uses,
                },
                per: Some(reset.map(|reset| reset.value.to_string()).unwrap_or_default()),
                description: limited_use.reset_type_description.clone(),
            }
        }
        None => LimitedUses {
            value: 0,
            max: 0,
            per: None,
            description: None,
        },
    }
}

/// Consumable-use block for the host schema
///
/// Wraps [`limited_uses`], defaulting the reset schedule to "charges" and
/// marking the item auto-destroyed on depletion. Items without a
/// limited-use descriptor are single-charge consumables.
pub fn consumable_uses(item: &ItemData) -> ConsumableUses {
    match &item.limited_use {
        Some(_) => {
            let uses = limited_uses(item);
            let per = match uses.per.as_deref() {
                Some("") | None => "charges".to_string(),
                Some(per) => per.to_string(),
            };
            ConsumableUses {
                value: uses.value,
                max: uses.max,
                per,
                auto_use: false,
                auto_destroy: true,
            }
        }
        None => ConsumableUses {
            value: 1,
            max: 1,
            per: "charges".to_string(),
            auto_use: false,
            auto_destroy: true,
        },
    }
}

/// Whether the character is proficient with this weapon
///
/// Proficiency in the broad weapon class ("Simple Weapons" / "Martial
/// Weapons") covers any weapon whose type string names that class; failing
/// that, an exact proficiency in the item's specific type counts.
pub fn weapon_proficient(
    item: &ItemData,
    weapon_type: &str,
    proficiencies: &[Proficiency],
) -> bool {
    let holds = |name: &str| proficiencies.iter().any(|proficiency| proficiency.name == name);

    if holds("Simple Weapons") && weapon_type.contains("simple") {
        true
    } else if holds("Martial Weapons") && weapon_type.contains("martial") {
        true
    } else {
        item.definition
            .kind
            .as_deref()
            .map(holds)
            .unwrap_or(false)
    }
}

/// Sum of the magical attack bonuses the item grants
pub fn magical_bonus(item: &ItemData) -> i32 {
    item.definition
        .granted_modifiers
        .iter()
        .filter(|modifier| {
            modifier.kind == "bonus" && modifier.sub_type.as_deref() == Some("magic")
        })
        .filter_map(|modifier| modifier.value)
        .filter(|value| *value != 0)
        .sum()
}

/// Attunement tier: 2 attuned, 1 attunable, 0 otherwise
pub fn attunement_tier(item: &ItemData) -> i32 {
    if item.is_attuned {
        2
    } else if item.definition.can_attune == Some(true) {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{LimitedUse, Modifier};
    use crate::domain::value_objects::DefinitionId;

    fn definition() -> ItemDefinition {
        ItemDefinition {
            id: DefinitionId::new(1),
            name: "Longsword".to_string(),
            kind: Some("Longsword".to_string()),
            rarity: None,
            can_attune: None,
            can_equip: None,
            granted_modifiers: vec![],
        }
    }

    fn item() -> ItemData {
        ItemData {
            definition: definition(),
            equipped: false,
            is_attuned: false,
            limited_use: None,
        }
    }

    fn proficiencies(names: &[&str]) -> Vec<Proficiency> {
        names
            .iter()
            .map(|name| Proficiency { name: name.to_string() })
            .collect()
    }

    #[test]
    fn test_rarity_lowercased_for_dropdown_versions() {
        let mut def = definition();
        def.rarity = Some("Very Rare".to_string());
        assert_eq!(item_rarity(&def, "1.4.2"), "very rare");
        assert_eq!(item_rarity(&def, "1.5.0"), "very rare");
        assert_eq!(item_rarity(&def, "1.4.1"), "Very Rare");
    }

    #[test]
    fn test_rarity_empty_when_absent() {
        assert_eq!(item_rarity(&definition(), "1.4.2"), "");
    }

    #[test]
    fn test_attuned_requires_capability() {
        let mut it = item();
        it.is_attuned = true;
        assert!(!is_attuned(&it));
        it.definition.can_attune = Some(true);
        assert!(is_attuned(&it));
    }

    #[test]
    fn test_equipped_requires_capability() {
        let mut it = item();
        it.equipped = true;
        assert!(!is_equipped(&it));
        it.definition.can_equip = Some(true);
        assert!(is_equipped(&it));
    }

    #[test]
    fn test_limited_uses_subtracts_used_count() {
        let mut it = item();
        it.limited_use = Some(LimitedUse {
            max_uses: 5,
            number_used: Some(2),
            reset_type: Some(2),
            reset_type_description: None,
        });
        let uses = limited_uses(&it);
        assert_eq!(uses.max, 5);
        assert_eq!(uses.value, 3);
        assert_eq!(uses.per.as_deref(), Some("lr"));
    }

    #[test]
    fn test_limited_uses_defaults_to_max_when_count_absent() {
        let mut it = item();
        it.limited_use = Some(LimitedUse {
            max_uses: 5,
            number_used: None,
            reset_type: None,
            reset_type_description: None,
        });
        let uses = limited_uses(&it);
        assert_eq!(uses.max, 5);
        assert_eq!(uses.value, 5);
        assert_eq!(uses.per.as_deref(), Some(""));
    }

    #[test]
    fn test_limited_uses_zeroed_without_block() {
        let uses = limited_uses(&item());
        assert_eq!(uses.value, 0);
        assert_eq!(uses.max, 0);
        assert_eq!(uses.per, None);
    }

    #[test]
    fn test_consumable_uses_defaults_per_to_charges() {
        let mut it = item();
        it.limited_use = Some(LimitedUse {
            max_uses: 3,
            number_used: Some(1),
            reset_type: None,
            reset_type_description: None,
        });
        let uses = consumable_uses(&it);
        assert_eq!(uses.per, "charges");
        assert_eq!(uses.value, 2);
        assert!(!uses.auto_use);
        assert!(uses.auto_destroy);
    }

    #[test]
    fn test_consumable_uses_fixed_default_without_block() {
        let uses = consumable_uses(&item());
        assert_eq!(
            uses,
            ConsumableUses {
                value: 1,
                max: 1,
                per: "charges".to_string(),
                auto_use: false,
                auto_destroy: true,
            }
        );
    }

    #[test]
    fn test_weapon_proficiency_by_class() {
        let it = item();
        assert!(weapon_proficient(
            &it,
            "martial-melee",
            &proficiencies(&["Martial Weapons"])
        ));
        assert!(weapon_proficient(
            &it,
            "simple-ranged",
            &proficiencies(&["Simple Weapons"])
        ));
        assert!(!weapon_proficient(
            &it,
            "martial-melee",
            &proficiencies(&["Simple Weapons"])
        ));
    }

    #[test]
    fn test_weapon_proficiency_by_specific_type() {
        let it = item();
        assert!(weapon_proficient(
            &it,
            "martial-melee",
            &proficiencies(&["Longsword"])
        ));
    }

    #[test]
    fn test_magical_bonus_sums_magic_bonuses_only() {
        let mut it = item();
        it.definition.granted_modifiers = vec![
            Modifier {
                kind: "bonus".to_string(),
                sub_type: Some("magic".to_string()),
                restriction: None,
                value: Some(1),
            },
            Modifier {
                kind: "bonus".to_string(),
                sub_type: Some("magic".to_string()),
                restriction: None,
                value: Some(2),
            },
            Modifier {
                kind: "bonus".to_string(),
                sub_type: Some("saving-throws".to_string()),
                restriction: None,
                value: Some(4),
            },
            Modifier {
                kind: "bonus".to_string(),
                sub_type: Some("magic".to_string()),
                restriction: None,
                value: Some(0),
            },
        ];
        assert_eq!(magical_bonus(&it), 3);
    }

    #[test]
    fn test_attunement_tiers() {
        let mut it = item();
        assert_eq!(attunement_tier(&it), 0);
        it.definition.can_attune = Some(true);
        assert_eq!(attunement_tier(&it), 1);
        it.is_attuned = true;
        assert_eq!(attunement_tier(&it), 2);
    }
}
