//! Flag blocks carried on host documents and produced items
//!
//! The builder service stamps every imported document with a `ddb` flag
//! block; documents imported by the legacy module carry a `vtta` block
//! instead. Produced items get a `ddbimporter` block holding the external
//! ids needed for later re-sync.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{DefinitionId, EntityTypeId};

/// Identifying flags stamped on imported scenes and journal entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DdbFlags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ddb_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cobalt_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_code: Option<String>,
}

impl DdbFlags {
    /// True when the four identifying fields match `other` exactly.
    /// A field absent on both sides counts as a match.
    pub fn same_origin(&self, other: &DdbFlags) -> bool {
        self.ddb_id == other.ddb_id
            && self.cobalt_id == other.cobalt_id
            && self.parent_id == other.parent_id
            && self.book_code == other.book_code
    }
}

/// Flags left behind by the legacy import module
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyFlags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// The flag namespaces this crate reads from a host document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFlags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ddb: Option<DdbFlags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vtta: Option<LegacyFlags>,
}

impl DocumentFlags {
    pub fn ddb(&self) -> Option<&DdbFlags> {
        self.ddb.as_ref()
    }

    /// The legacy document id, if this document was imported by the old module
    pub fn legacy_id(&self) -> Option<&str> {
        self.vtta.as_ref().and_then(|v| v.id.as_deref())
    }
}

/// External ids stamped on produced items for later re-sync
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImporterFlags {
    pub id: i64,
    pub definition_id: DefinitionId,
    pub entity_type_id: EntityTypeId,
}
