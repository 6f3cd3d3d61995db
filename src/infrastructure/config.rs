//! Importer configuration
//!
//! Defaults used when the host has not (yet) supplied a value through its
//! settings store. Loaded from environment variables, using defaults for
//! missing values.

/// Configuration for the import module
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// System version assumed when the host does not report one
    pub fallback_system_version: String,
    /// Whether scene download is offered when the setting cannot be read
    pub assume_scene_download: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            fallback_system_version: "1.4.2".to_string(),
            assume_scene_download: false,
        }
    }
}

impl ImportConfig {
    /// Load from environment variables, using defaults for missing values
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            fallback_system_version: env_or(
                "VTT_IMPORTER_FALLBACK_SYSTEM_VERSION",
                defaults.fallback_system_version,
            ),
            assume_scene_download: env_or(
                "VTT_IMPORTER_ASSUME_SCENE_DOWNLOAD",
                defaults.assume_scene_download,
            ),
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
