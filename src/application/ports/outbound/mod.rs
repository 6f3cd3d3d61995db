//! Outbound ports - Interfaces the transformers require from the host application
//!
//! The host owns its document database, per-world settings, the current
//! user's privilege level, the file-download primitive and the blank item
//! templates; all of them reach this crate only through these traits.

mod document_port;
mod download_port;
mod session_port;
mod settings_port;
mod spellcasting_port;
mod template_port;

pub use document_port::{DocumentError, DocumentStorePort};
pub use download_port::{DownloadError, DownloadPort};
pub use session_port::SessionPort;
pub use settings_port::{SettingsError, SettingsPort};
pub use spellcasting_port::SpellcastingPort;
pub use template_port::{TemplateError, TemplatePort};
