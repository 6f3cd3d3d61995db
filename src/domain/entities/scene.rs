//! Scene and journal documents as the host application stores them
//!
//! Only the fields the exporter reads are modeled. Wire names follow the
//! host's document schema, including the leading-underscore id fields.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{DocumentFlags, DocumentId};

/// A map scene with its embedded placeables
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDocument {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub name: String,
    #[serde(default)]
    pub nav_name: Option<String>,
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub grid: i32,
    #[serde(default)]
    pub grid_distance: f64,
    #[serde(default)]
    pub grid_type: i32,
    #[serde(default)]
    pub grid_units: String,
    #[serde(default)]
    pub shift_x: i32,
    #[serde(default)]
    pub shift_y: i32,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub flags: DocumentFlags,
    #[serde(default)]
    pub notes: Vec<NotePlacement>,
    #[serde(default)]
    pub walls: Vec<Wall>,
    #[serde(default)]
    pub lights: Vec<Light>,
    #[serde(default)]
    pub tokens: Vec<Token>,
}

/// A journal entry document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalDocument {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub name: String,
    #[serde(default)]
    pub flags: DocumentFlags,
}

/// A note marker placed on a scene
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePlacement {
    #[serde(default)]
    pub entry_id: Option<DocumentId>,
    pub x: i32,
    pub y: i32,
}

/// A wall segment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wall {
    /// Endpoint coordinates as `[x0, y0, x1, y1]`
    pub c: Vec<i32>,
    #[serde(default)]
    pub door: i32,
    #[serde(default)]
    pub ds: i32,
    #[serde(rename = "move", default)]
    pub movement: i32,
    #[serde(default)]
    pub sense: i32,
}

/// An ambient light source
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Light {
    #[serde(default)]
    pub angle: f64,
    #[serde(default)]
    pub bright: f64,
    #[serde(default)]
    pub darkness_threshold: f64,
    #[serde(default)]
    pub dim: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub t: String,
    #[serde(default)]
    pub tint_alpha: f64,
    pub x: i32,
    pub y: i32,
}

/// A token placed on the scene
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub name: String,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub scale: f64,
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub disposition: i32,
    /// Tokens linked to a world actor stay behind on export
    #[serde(default)]
    pub actor_link: bool,
}
