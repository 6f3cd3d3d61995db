//! vtt-importer - Data mapping for character-builder content
//!
//! This crate reshapes records produced by an external character-builder
//! service into the schema a virtual-tabletop host application expects:
//! - Scene Exporter: normalized, serializable scene snapshots with joined
//!   journal notes, offered to the user as a JSON download
//! - Class Parser: class/subclass records mapped to host item records
//! - Inventory helpers: rarity, attunement, equipped state, limited uses,
//!   weapon proficiency and magic-bonus rules shared by item parsers
//!
//! The host application's own APIs (document lookup, settings, current-user
//! privilege, file download, blank item templates) are consumed through
//! outbound ports; the crate itself performs no I/O.

pub mod application;
pub mod domain;
pub mod infrastructure;
