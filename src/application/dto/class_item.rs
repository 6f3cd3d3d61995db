//! Internal item record produced for each character class
//!
//! The data payload starts life as the host's blank class template and is
//! filled in field by field; template fields this crate does not compute
//! pass through untouched.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ImporterFlags;

/// A host-schema item record carrying one class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassItem {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub data: ClassItemData,
    pub flags: ClassItemFlags,
}

/// Importer flag scope stamped on produced items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassItemFlags {
    pub ddbimporter: ImporterFlags,
}

/// The type-specific data payload of a class item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassItemData {
    #[serde(default)]
    pub description: DescriptionBlock,
    #[serde(default)]
    pub levels: i32,
    #[serde(default)]
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subclass: Option<String>,
    #[serde(default)]
    pub hit_dice: String,
    #[serde(default)]
    pub hit_dice_used: i32,
    #[serde(default)]
    pub skills: SkillProficiencies,
    #[serde(default)]
    pub saves: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spellcasting: Option<SpellcastingBlock>,
    /// Template fields this crate does not compute
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Rich-text description block
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DescriptionBlock {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub chat: String,
    #[serde(default)]
    pub unidentified: bool,
}

/// Skill proficiencies granted by a class
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillProficiencies {
    /// Skills the user actually chose
    #[serde(default)]
    pub value: Vec<String>,
    /// How many were chosen
    #[serde(default)]
    pub number: usize,
    /// The full set of skills that were offered
    #[serde(default)]
    pub choices: Vec<String>,
}

/// Spellcasting metadata attached when the class has a known progression
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellcastingBlock {
    pub progression: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<String>,
}
