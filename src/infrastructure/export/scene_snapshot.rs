//! Normalized scene snapshot for transfer and backup
//!
//! This module assembles the serializable form of a scene: geometry, grid,
//! lighting, walls, unlinked tokens, and the journal notes placed on the
//! map. Notes are joined against journal entries sharing the scene's
//! identifying flags; entries failing the join are dropped rather than
//! reported, since user-placed notes are expected on imported scenes.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::entities::{JournalDocument, SceneDocument};
use crate::domain::value_objects::{DocumentFlags, DocumentId};

/// Self-contained scene representation, ready for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSnapshot {
    pub flags: DocumentFlags,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav_name: Option<String>,
    // dimensions
    pub width: i32,
    pub height: i32,
    // grid
    pub grid: i32,
    pub grid_distance: f64,
    pub grid_type: i32,
    pub grid_units: String,
    pub shift_x: i32,
    pub shift_y: i32,
    // customization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    // notes
    pub descriptions: Vec<NoteDescription>,
    pub walls: Vec<WallSnapshot>,
    pub lights: Vec<LightSnapshot>,
    // tokens
    pub tokens: Vec<TokenSnapshot>,
}

/// A journal note with every map position it was placed at
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteDescription {
    pub label: String,
    pub positions: Vec<Position>,
}

/// A map coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Wall segment snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallSnapshot {
    pub c: Vec<i32>,
    pub door: i32,
    pub ds: i32,
    #[serde(rename = "move")]
    pub movement: i32,
    pub sense: i32,
}

/// Ambient light snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightSnapshot {
    pub angle: f64,
    pub bright: f64,
    pub darkness_threshold: f64,
    pub dim: f64,
    pub rotation: f64,
    pub t: String,
    pub tint_alpha: f64,
    pub x: i32,
    pub y: i32,
}

/// Token snapshot; actor-linked tokens never appear here
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSnapshot {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub scale: f64,
    pub x: i32,
    pub y: i32,
    pub disposition: i32,
}

/// Assemble the snapshot for a scene from the scene document and the
/// world's journal entries
pub fn collect_scene_data(
    scene: &SceneDocument,
    journal_entries: &[JournalDocument],
) -> SceneSnapshot {
    SceneSnapshot {
        flags: scene.flags.clone(),
        name: scene.name.clone(),
        nav_name: scene.nav_name.clone(),
        width: scene.width,
        height: scene.height,
        grid: scene.grid,
        grid_distance: scene.grid_distance,
        grid_type: scene.grid_type,
        grid_units: scene.grid_units.clone(),
        shift_x: scene.shift_x,
        shift_y: scene.shift_y,
        background_color: scene.background_color.clone(),
        descriptions: collect_notes(scene, journal_entries),
        walls: scene
            .walls
            .iter()
            .map(|wall| WallSnapshot {
                c: wall.c.clone(),
                door: wall.door,
                ds: wall.ds,
                movement: wall.movement,
                sense: wall.sense,
            })
            .collect(),
        lights: scene
            .lights
            .iter()
            .map(|light| LightSnapshot {
                angle: light.angle,
                bright: light.bright,
                darkness_threshold: light.darkness_threshold,
                dim: light.dim,
                rotation: light.rotation,
                t: light.t.clone(),
                tint_alpha: light.tint_alpha,
                x: light.x,
                y: light.y,
            })
            .collect(),
        tokens: scene
            .tokens
            .iter()
            .filter(|token| !token.actor_link)
            .map(|token| TokenSnapshot {
                id: token.id.clone(),
                name: token.name.clone(),
                width: token.width,
                height: token.height,
                scale: token.scale,
                x: token.x,
                y: token.y,
                disposition: token.disposition,
            })
            .collect(),
    }
}

/// Extract the notes placed on a scene by the importer
///
/// Joins the scene's note markers against journal entries whose `ddb` flag
/// block matches the scene's, groups placements of the same journal entry,
/// and orders the result by the entry's numeric name prefix.
pub fn collect_notes(
    scene: &SceneDocument,
    journal_entries: &[JournalDocument],
) -> Vec<NoteDescription> {
    let scene_flags = scene.flags.ddb().cloned().unwrap_or_default();

    // journal entries imported alongside this scene
    let related: Vec<&JournalDocument> = journal_entries
        .iter()
        .filter(|journal| {
            journal
                .flags
                .ddb()
                .is_some_and(|flags| flags.ddb_id.is_some() && flags.same_origin(&scene_flags))
        })
        .collect();

    struct IndexedNote {
        index: u32,
        label: String,
        positions: Vec<Position>,
    }

    let mut grouped: Vec<IndexedNote> = Vec::new();
    for note in &scene.notes {
        // user-placed notes have no linked imported entry and stay behind
        let Some(entry_id) = &note.entry_id else {
            continue;
        };
        let Some(journal) = related.iter().find(|journal| &journal.id == entry_id) else {
            continue;
        };

        let Some((index, label)) = parse_note_name(&journal.name) else {
            warn!(
                journal = %journal.name,
                "journal entry name has no two-digit index prefix, skipping note"
            );
            continue;
        };

        let position = Position {
            x: note.x,
            y: note.y,
        };
        match grouped.iter_mut().find(|group| group.index == index) {
            Some(group) => group.positions.push(position),
            None => grouped.push(IndexedNote {
                index,
                label,
                positions: vec![position],
            }),
        }
    }

    grouped.sort_by_key(|group| group.index);
    grouped
        .into_iter()
        .map(|group| NoteDescription {
            label: group.label,
            positions: group.positions,
        })
        .collect()
}

/// Split an imported journal name into its fixed-width parts: characters
/// [0, 2) are the index, characters [3..] are the label
fn parse_note_name(name: &str) -> Option<(u32, String)> {
    let index = name.get(0..2)?.parse::<u32>().ok()?;
    if name.len() < 3 {
        return None;
    }
    let label = name.get(3..).unwrap_or_default().to_string();
    Some((index, label))
}
