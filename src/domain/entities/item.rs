//! Item record - inventory entries as the builder service exports them

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DefinitionId;

/// One inventory entry on a character
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemData {
    pub definition: ItemDefinition,
    #[serde(default)]
    pub equipped: bool,
    #[serde(default)]
    pub is_attuned: bool,
    #[serde(default)]
    pub limited_use: Option<LimitedUse>,
}

/// The item definition the entry references
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDefinition {
    pub id: DefinitionId,
    pub name: String,
    /// Specific type name, e.g. "Longsword"
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub can_attune: Option<bool>,
    #[serde(default)]
    pub can_equip: Option<bool>,
    #[serde(default)]
    pub granted_modifiers: Vec<Modifier>,
}

/// Limited-use descriptor on an inventory entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitedUse {
    pub max_uses: i32,
    #[serde(default)]
    pub number_used: Option<i32>,
    #[serde(default)]
    pub reset_type: Option<i32>,
    #[serde(default)]
    pub reset_type_description: Option<String>,
}

/// A modifier granted by an item definition or a class level
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modifier {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub sub_type: Option<String>,
    #[serde(default)]
    pub restriction: Option<String>,
    #[serde(default)]
    pub value: Option<i32>,
}
