//! Scene export functionality
//!
//! This module provides the serializable snapshot of a scene, allowing it
//! to be offered as a JSON download for transfer and backup.

mod scene_snapshot;

pub use scene_snapshot::{
    collect_notes, collect_scene_data, LightSnapshot, NoteDescription, Position, SceneSnapshot,
    TokenSnapshot, WallSnapshot,
};
