//! Source-citation extraction for class and subclass definitions

use crate::domain::entities::ClassDefinition;

/// Book and page a definition was published in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCitation {
    pub name: Option<String>,
    pub page: Option<i32>,
}

/// Pull the citation data off a definition
pub fn citation(definition: &ClassDefinition) -> SourceCitation {
    SourceCitation {
        name: definition.source_book.clone(),
        page: definition.source_page_number,
    }
}
