//! Download port - the host's "serialize and offer as file" primitive

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("download failed for '{filename}': {message}")]
    Failed { filename: String, message: String },
}

pub trait DownloadPort: Send + Sync {
    /// Offer `contents` to the user as a downloadable file
    fn offer(&self, filename: &str, mime_type: &str, contents: String)
        -> Result<(), DownloadError>;
}
