//! Scene Export Service - offers imported scenes as JSON downloads
//!
//! Gating, filename derivation and the download hand-off live here; the
//! snapshot itself is assembled by `infrastructure::export`.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::application::ports::outbound::{
    DocumentStorePort, DownloadPort, SessionPort, SettingsPort,
};
use crate::domain::entities::SceneDocument;
use crate::domain::value_objects::DocumentId;
use crate::infrastructure::config::ImportConfig;
use crate::infrastructure::export::collect_scene_data;

const SCENE_MIME_TYPE: &str = "application/json";

pub struct SceneExportService {
    config: ImportConfig,
    documents: Arc<dyn DocumentStorePort>,
    settings: Arc<dyn SettingsPort>,
    session: Arc<dyn SessionPort>,
    downloads: Arc<dyn DownloadPort>,
}

impl SceneExportService {
    pub fn new(
        config: ImportConfig,
        documents: Arc<dyn DocumentStorePort>,
        settings: Arc<dyn SettingsPort>,
        session: Arc<dyn SessionPort>,
        downloads: Arc<dyn DownloadPort>,
    ) -> Self {
        Self {
            config,
            documents,
            settings,
            session,
            downloads,
        }
    }

    /// Whether the download action should be offered for this scene
    ///
    /// Requires gamemaster privilege, the scene-download setting, and a
    /// scene that was imported (current or legacy flag format).
    pub fn can_export(&self, scene: &SceneDocument) -> bool {
        let enabled = self
            .settings
            .scene_download_enabled()
            .unwrap_or(self.config.assume_scene_download);
        let imported = scene.flags.ddb().and_then(|flags| flags.ddb_id).is_some()
            || scene.flags.legacy_id().is_some();
        self.session.is_gm() && enabled && imported
    }

    /// Snapshot the scene and offer it to the user as a file download
    ///
    /// Returns the filename the download was offered under.
    #[instrument(skip(self))]
    pub fn export_scene(&self, scene_id: &DocumentId) -> Result<String> {
        let scene = self
            .documents
            .scene(scene_id)
            .context("loading scene for export")?;
        let journal_entries = self
            .documents
            .journal_entries()
            .context("loading journal entries for export")?;

        let snapshot = collect_scene_data(&scene, &journal_entries);
        let filename = export_filename(&scene)?;
        let payload =
            serde_json::to_string(&snapshot).context("serializing scene snapshot")?;

        self.downloads
            .offer(&filename, SCENE_MIME_TYPE, payload)
            .context("offering scene download")?;
        info!(scene = %scene.name, %filename, "exported scene");
        Ok(filename)
    }
}

/// Derive the download filename from the scene's identifying flags:
/// `<bookCode>-<ddbId>[-<cobaltId>][-<parentId>]-scene.json`, falling back
/// to the legacy id with its path separator replaced
pub fn export_filename(scene: &SceneDocument) -> Result<String> {
    let ddb = scene.flags.ddb();

    let mut reference = match ddb.and_then(|flags| flags.book_code.as_deref()) {
        Some(book_code) => match ddb.and_then(|flags| flags.ddb_id) {
            Some(ddb_id) => format!("{book_code}-{ddb_id}"),
            None => book_code.to_string(),
        },
        None => scene
            .flags
            .legacy_id()
            .map(|id| id.replacen('/', "-", 1))
            .context("scene carries neither current nor legacy import flags")?,
    };

    if let Some(cobalt_id) = ddb.and_then(|flags| flags.cobalt_id) {
        reference.push_str(&format!("-{cobalt_id}"));
    }
    if let Some(parent_id) = ddb.and_then(|flags| flags.parent_id) {
        reference.push_str(&format!("-{parent_id}"));
    }

    Ok(format!("{reference}-scene.json"))
}
