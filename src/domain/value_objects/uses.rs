//! Limited-use and consumable-use blocks in the host item schema

use serde::{Deserialize, Serialize};

/// Host-schema uses block for an item with a depleting resource pool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitedUses {
    pub max: i32,
    pub value: i32,
    pub per: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Host-schema uses block for consumable items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumableUses {
    pub value: i32,
    pub max: i32,
    pub per: String,
    pub auto_use: bool,
    pub auto_destroy: bool,
}
