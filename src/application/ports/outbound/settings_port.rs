//! Settings port - per-world module settings and host system metadata

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("setting not found: {0}")]
    NotFound(String),
    #[error("settings store error: {0}")]
    Store(String),
}

pub trait SettingsPort: Send + Sync {
    /// Whether the scene-download feature is enabled for this world
    fn scene_download_enabled(&self) -> Result<bool, SettingsError>;

    /// The host game-system version string, e.g. "1.4.2"
    fn system_version(&self) -> Result<String, SettingsError>;
}
