//! Character record - the class, choice and modifier data the builder service exports
//!
//! Field names follow the service's wire format; every field the service may
//! omit is an explicit `Option`.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    ComponentId, ComponentTypeId, DefinitionId, EntityTypeId, OptionId,
};

/// The slice of a builder-service character record consumed by the class parser
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterData {
    #[serde(default)]
    pub classes: Vec<CharacterClass>,
    #[serde(default)]
    pub choices: CharacterChoices,
    #[serde(default)]
    pub modifiers: CharacterModifiers,
}

/// One class the character has levels in
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterClass {
    pub id: i64,
    pub entity_type_id: EntityTypeId,
    pub level: i32,
    #[serde(default)]
    pub hit_dice_used: i32,
    pub definition: ClassDefinition,
    #[serde(default)]
    pub subclass_definition: Option<ClassDefinition>,
}

impl CharacterClass {
    /// True when the class or its subclass declares spellcasting capability
    pub fn casts_spells(&self) -> bool {
        self.definition.can_cast_spells
            || self
                .subclass_definition
                .as_ref()
                .is_some_and(|subclass| subclass.can_cast_spells)
    }
}

/// A class or subclass definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDefinition {
    pub id: DefinitionId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hit_dice: i32,
    #[serde(default)]
    pub can_cast_spells: bool,
    #[serde(default)]
    pub source_book: Option<String>,
    #[serde(default)]
    pub source_page_number: Option<i32>,
    #[serde(default)]
    pub class_features: Vec<ClassFeature>,
}

impl ClassDefinition {
    /// Ids of the features with the given display name
    pub fn feature_ids_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = ComponentId> + 'a {
        self.class_features
            .iter()
            .filter(move |feature| feature.name == name)
            .map(|feature| ComponentId::new(feature.id))
    }
}

/// A feature granted by a class definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassFeature {
    pub id: i64,
    pub name: String,
}

/// The user-made selections recorded on the character
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterChoices {
    /// Choices made against class features
    #[serde(rename = "class", default)]
    pub class_choices: Vec<Choice>,
    #[serde(default)]
    pub choice_definitions: Vec<ChoiceDefinition>,
}

impl CharacterChoices {
    /// The option catalog a choice draws from, keyed `<componentTypeId>-<type>`
    pub fn definition_for(&self, choice: &Choice) -> Option<&ChoiceDefinition> {
        let key = format!("{}-{}", choice.component_type_id, choice.kind);
        self.choice_definitions
            .iter()
            .find(|definition| definition.id == key)
    }
}

/// One selection the user made
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    pub component_id: ComponentId,
    pub component_type_id: ComponentTypeId,
    #[serde(default)]
    pub sub_type: Option<i32>,
    #[serde(rename = "type")]
    pub kind: i32,
    #[serde(default)]
    pub option_value: Option<OptionId>,
    #[serde(default)]
    pub option_ids: Vec<OptionId>,
}

impl Choice {
    /// Subtype/type pair the service uses for a class skill selection
    pub fn is_skill_choice(&self) -> bool {
        self.sub_type == Some(1) && self.kind == 2
    }
}

/// The catalog of options a choice was offered from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceDefinition {
    pub id: String,
    #[serde(default)]
    pub options: Vec<ChoiceOption>,
}

/// One selectable option inside a choice definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub id: OptionId,
    pub label: String,
}

/// Modifiers granted to the character, bucketed by origin
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterModifiers {
    /// Modifiers granted by class levels
    #[serde(rename = "class", default)]
    pub class_modifiers: Vec<super::Modifier>,
}

/// A proficiency the character holds, as the builder service names it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proficiency {
    pub name: String,
}
