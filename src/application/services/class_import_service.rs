//! Class Import Service - maps character classes to host item records
//!
//! Each class on the character becomes one item: citation string, merged
//! class/subclass description, hit dice, chosen skill proficiencies, saving
//! throws and spellcasting metadata, layered over the host's blank class
//! template. One class failing to parse never blocks its siblings.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{instrument, warn};

use crate::application::dto::{
    ClassItem, ClassItemData, ClassItemFlags, DescriptionBlock, SkillProficiencies,
    SpellcastingBlock,
};
use crate::application::ports::outbound::{SpellcastingPort, TemplatePort};
use crate::domain::dictionary;
use crate::domain::entities::{CharacterClass, CharacterData};
use crate::domain::services::{modifiers, sources};
use crate::domain::value_objects::{ComponentId, ImporterFlags};

pub struct ClassImportService {
    templates: Arc<dyn TemplatePort>,
    spellcasting: Arc<dyn SpellcastingPort>,
}

impl ClassImportService {
    pub fn new(templates: Arc<dyn TemplatePort>, spellcasting: Arc<dyn SpellcastingPort>) -> Self {
        Self {
            templates,
            spellcasting,
        }
    }

    /// One item per class the character has
    #[instrument(skip(self, character), fields(classes = character.classes.len()))]
    pub fn parse_classes(&self, character: &CharacterData) -> Vec<ClassItem> {
        let mut items = Vec::new();
        for class in &character.classes {
            match self.parse_class(character, class) {
                Ok(item) => items.push(item),
                Err(error) => {
                    warn!(class = %class.definition.name, %error, "skipping class that failed to parse");
                }
            }
        }
        items
    }

    fn parse_class(
        &self,
        character: &CharacterData,
        class: &CharacterClass,
    ) -> Result<ClassItem> {
        let template = self
            .templates
            .item_template("class")
            .context("loading blank class template")?;
        let mut data: ClassItemData = serde_json::from_value(template)
            .context("class template does not match the host schema")?;

        data.description = DescriptionBlock {
            value: class.definition.description.clone(),
            chat: class.definition.description.clone(),
            unidentified: false,
        };
        data.levels = class.level;
        data.source = class_sources(class);

        if let Some(subclass) = class
            .subclass_definition
            .as_ref()
            .filter(|subclass| !subclass.name.is_empty())
        {
            data.subclass = Some(subclass.name.clone());
            data.description
                .value
                .push_str(&format!("<p><strong>{}</strong></p>", subclass.name));
            data.description.value.push_str(&subclass.description);
        }

        data.hit_dice = format!("d{}", class.definition.hit_dice);
        data.hit_dice_used = class.hit_dice_used;
        data.skills = class_skills(character, class);
        data.saves = class_saves(character);

        if class.casts_spells() {
            if let Some(progression) = dictionary::spell_progression(&class.definition.name) {
                data.spellcasting = Some(SpellcastingBlock {
                    progression: progression.value.to_string(),
                    ability: self.spellcasting.spellcasting_ability(class),
                });
            }
        }

        Ok(ClassItem {
            name: class.definition.name.clone(),
            kind: "class".to_string(),
            data,
            flags: ClassItemFlags {
                ddbimporter: ImporterFlags {
                    id: class.id,
                    definition_id: class.definition.id,
                    entity_type_id: class.entity_type_id,
                },
            },
        })
    }
}

/// Citation string covering class and subclass without duplicating either
/// the source name or the page
fn class_sources(class: &CharacterClass) -> String {
    let class_source = sources::citation(&class.definition);

    let mut text = class_source.name.clone().unwrap_or_default();
    if let Some(page) = class_source.page {
        text.push_str(&format!(" (pg. {page})"));
    }

    if let Some(subclass) = &class.subclass_definition {
        let subclass_source = sources::citation(subclass);
        if let Some(name) = &subclass_source.name {
            if class_source.name.as_ref() != Some(name) {
                text.push_str(&format!(", {name}"));
            }
        }
        if let Some(page) = subclass_source.page {
            if class_source.page != Some(page) {
                text.push_str(&format!(" (pg. {page})"));
            }
        }
    }

    text
}

/// Skill proficiencies granted through the class's "Proficiencies" features
///
/// `value` holds the skills the user chose, `choices` the full set that was
/// offered; both deduplicated across features and option paths.
fn class_skills(character: &CharacterData, class: &CharacterClass) -> SkillProficiencies {
    let feature_ids: Vec<ComponentId> = class
        .definition
        .feature_ids_named("Proficiencies")
        .chain(
            class
                .subclass_definition
                .iter()
                .flat_map(|subclass| subclass.feature_ids_named("Proficiencies")),
        )
        .collect();

    let mut chosen: Vec<String> = Vec::new();
    let mut offered: Vec<String> = Vec::new();

    let skill_choices = character
        .choices
        .class_choices
        .iter()
        .filter(|choice| feature_ids.contains(&choice.component_id) && choice.is_skill_choice());

    for choice in skill_choices {
        let Some(definition) = character.choices.definition_for(choice) else {
            continue;
        };

        let selected = choice
            .option_value
            .and_then(|value| definition.options.iter().find(|option| option.id == value));
        if let Some(skill) = selected.and_then(|option| dictionary::skill_by_label(&option.label)) {
            if !chosen.iter().any(|name| name == skill.name) {
                chosen.push(skill.name.to_string());
            }
        }

        let offered_skills = definition
            .options
            .iter()
            .filter(|option| choice.option_ids.contains(&option.id))
            .filter_map(|option| dictionary::skill_by_label(&option.label));
        for skill in offered_skills {
            if !offered.iter().any(|name| name == skill.name) {
                offered.push(skill.name.to_string());
            }
        }
    }

    SkillProficiencies {
        number: chosen.len(),
        value: chosen,
        choices: offered,
    }
}

/// Short codes of the abilities the class grants save proficiency in
fn class_saves(character: &CharacterData) -> Vec<String> {
    let class_modifiers = modifiers::class_modifiers(character);
    dictionary::abilities()
        .iter()
        .filter(|ability| {
            let sub_type = format!("{}-saving-throws", ability.long);
            !modifiers::filter(class_modifiers, "proficiency", &sub_type, &[None, Some("")])
                .is_empty()
        })
        .map(|ability| ability.value.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::TemplateError;

    struct FixedTemplates {
        template: serde_json::Value,
    }

    impl TemplatePort for FixedTemplates {
        fn item_template(&self, _item_type: &str) -> Result<serde_json::Value, TemplateError> {
            Ok(self.template.clone())
        }
    }

    struct IntResolver;

    impl SpellcastingPort for IntResolver {
        fn spellcasting_ability(&self, _class: &CharacterClass) -> Option<String> {
            Some("int".to_string())
        }
    }

    fn service() -> ClassImportService {
        let template = serde_json::json!({
            "description": { "value": "", "chat": "", "unidentified": false },
            "levels": 1,
            "source": "",
            "hitDice": "d6",
            "hitDiceUsed": 0,
            "skills": { "value": [], "number": 0, "choices": [] },
            "saves": [],
        });
        ClassImportService::new(
            Arc::new(FixedTemplates { template }),
            Arc::new(IntResolver),
        )
    }

    fn wizard_character() -> CharacterData {
        serde_json::from_value(serde_json::json!({
            "classes": [{
                "id": 52134801,
                "entityTypeId": 1446578651,
                "level": 5,
                "hitDiceUsed": 2,
                "definition": {
                    "id": 8,
                    "name": "Wizard",
                    "description": "A scholarly magic-user.",
                    "hitDice": 6,
                    "canCastSpells": true,
                    "sourceBook": "PHB",
                    "sourcePageNumber": 112,
                    "classFeatures": [
                        { "id": 300, "name": "Proficiencies" },
                        { "id": 301, "name": "Arcane Recovery" },
                    ],
                },
                "subclassDefinition": {
                    "id": 127,
                    "name": "School of Evocation",
                    "description": "You focus your study on magic that creates powerful elemental effects.",
                    "canCastSpells": true,
                    "sourceBook": "PHB",
                    "sourcePageNumber": 117,
                },
            }],
            "choices": {
                "class": [
                    {
                        "componentId": 300,
                        "componentTypeId": 12168134,
                        "subType": 1,
                        "type": 2,
                        "optionValue": 3,
                        "optionIds": [3, 4],
                    },
                    {
                        "componentId": 300,
                        "componentTypeId": 12168134,
                        "subType": 1,
                        "type": 2,
                        "optionValue": 4,
                        "optionIds": [3, 4],
                    },
                ],
                "choiceDefinitions": [{
                    "id": "12168134-2",
                    "options": [
                        { "id": 3, "label": "Arcana" },
                        { "id": 4, "label": "History" },
                    ],
                }],
            },
            "modifiers": {
                "class": [
                    {
                        "type": "proficiency",
                        "subType": "intelligence-saving-throws",
                    },
                    {
                        "type": "proficiency",
                        "subType": "wisdom-saving-throws",
                    },
                    {
                        "type": "proficiency",
                        "subType": "charisma-saving-throws",
                        "restriction": "while raging",
                    },
                ],
            },
        }))
        .expect("deserialization should succeed")
    }

    #[test]
    fn test_parse_classes_builds_full_item() {
        let items = service().parse_classes(&wizard_character());
        assert_eq!(items.len(), 1);

        let item = &items[0];
        assert_eq!(item.name, "Wizard");
        assert_eq!(item.kind, "class");
        assert_eq!(item.data.levels, 5);
        assert_eq!(item.data.hit_dice, "d6");
        assert_eq!(item.data.hit_dice_used, 2);
        assert_eq!(item.data.subclass.as_deref(), Some("School of Evocation"));
        assert!(item
            .data
            .description
            .value
            .contains("<p><strong>School of Evocation</strong></p>"));
        assert_eq!(item.flags.ddbimporter.id, 52134801);
    }

    #[test]
    fn test_source_citation_never_duplicates_matching_name() {
        let items = service().parse_classes(&wizard_character());
        // class and subclass share the book, pages differ
        assert_eq!(items[0].data.source, "PHB (pg. 112) (pg. 117)");
    }

    #[test]
    fn test_source_citation_identical_source_and_page() {
        let mut character = wizard_character();
        let subclass = character.classes[0]
            .subclass_definition
            .as_mut()
            .expect("subclass should be present");
        subclass.source_page_number = Some(112);
        let items = service().parse_classes(&character);
        assert_eq!(items[0].data.source, "PHB (pg. 112)");
    }

    #[test]
    fn test_skills_deduplicate_across_choices() {
        let items = service().parse_classes(&wizard_character());
        let skills = &items[0].data.skills;
        assert_eq!(skills.value, vec!["arc".to_string(), "his".to_string()]);
        assert_eq!(skills.number, 2);
        assert_eq!(skills.choices, vec!["arc".to_string(), "his".to_string()]);
    }

    #[test]
    fn test_same_skill_chosen_twice_counts_once() {
        let mut character = wizard_character();
        character.choices.class_choices[1].option_value =
            character.choices.class_choices[0].option_value;
        let items = service().parse_classes(&character);
        assert_eq!(items[0].data.skills.value, vec!["arc".to_string()]);
        assert_eq!(items[0].data.skills.number, 1);
    }

    #[test]
    fn test_saves_ignore_restricted_modifiers() {
        let items = service().parse_classes(&wizard_character());
        assert_eq!(
            items[0].data.saves,
            vec!["int".to_string(), "wis".to_string()]
        );
    }

    #[test]
    fn test_spellcasting_attached_with_progression_and_ability() {
        let items = service().parse_classes(&wizard_character());
        let spellcasting = items[0]
            .data
            .spellcasting
            .as_ref()
            .expect("wizard should have spellcasting");
        assert_eq!(spellcasting.progression, "full");
        assert_eq!(spellcasting.ability.as_deref(), Some("int"));
    }

    #[test]
    fn test_spellcasting_omitted_without_progression_entry() {
        let mut character = wizard_character();
        character.classes[0].definition.name = "Blood Hunter".to_string();
        let items = service().parse_classes(&character);
        assert!(items[0].data.spellcasting.is_none());
    }

    #[test]
    fn test_class_without_subclass_omits_optional_fields() {
        let mut character = wizard_character();
        character.classes[0].subclass_definition = None;
        character.modifiers.class_modifiers.clear();
        let items = service().parse_classes(&character);
        assert!(items[0].data.subclass.is_none());
        assert!(items[0].data.saves.is_empty());
        assert_eq!(items[0].data.source, "PHB (pg. 112)");
    }

    #[test]
    fn test_broken_template_skips_class_without_panicking() {
        let service = ClassImportService::new(
            Arc::new(FixedTemplates {
                template: serde_json::json!({ "hitDice": { "unexpected": true } }),
            }),
            Arc::new(IntResolver),
        );
        let items = service.parse_classes(&wizard_character());
        assert!(items.is_empty());
    }
}
