//! Data Transfer Objects - Host-schema records the transformers produce
//!
//! DTOs live in the application layer so the host boundary can
//! serialize/deserialize without the domain model caring about templates.

pub mod class_item;

pub use class_item::*;
