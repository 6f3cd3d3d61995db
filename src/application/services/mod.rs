//! Application services - The transformer use cases
//!
//! Each service follows hexagonal architecture principles, accepting its
//! host collaborators as ports and returning host-schema records.

pub mod class_import_service;
pub mod scene_export_service;

pub use class_import_service::ClassImportService;
pub use scene_export_service::{export_filename, SceneExportService};
