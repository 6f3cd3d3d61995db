//! Document lookup port - scenes and journal entries live in the host database

use crate::domain::entities::{JournalDocument, SceneDocument};
use crate::domain::value_objects::DocumentId;

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("document not found: {0}")]
    NotFound(DocumentId),
    #[error("document store error: {0}")]
    Store(String),
}

pub trait DocumentStorePort: Send + Sync {
    /// Look up a scene by id; a missing scene is a hard failure
    fn scene(&self, id: &DocumentId) -> Result<SceneDocument, DocumentError>;

    /// All journal entries in the world
    fn journal_entries(&self) -> Result<Vec<JournalDocument>, DocumentError>;
}
