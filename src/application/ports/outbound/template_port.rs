//! Template port - blank host-schema documents for each item type

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("no template for item type '{0}'")]
    UnknownType(String),
    #[error("template for '{item_type}' is not valid JSON: {message}")]
    Malformed { item_type: String, message: String },
}

pub trait TemplatePort: Send + Sync {
    /// The blank data payload for an item of the given type
    fn item_template(&self, item_type: &str) -> Result<serde_json::Value, TemplateError>;
}
