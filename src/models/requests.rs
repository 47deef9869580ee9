use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Item, ItemKind};

/// Request to find matches for a newly reported item.
///
/// Sent by the platform's item-creation handler right after the item is
/// persisted, with the stored record echoed back in `item`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(nested)]
    pub item: Item,
    #[serde(alias = "item_type", rename = "itemType")]
    pub item_type: ItemKind,
}

/// Query string for the existing-item match lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemMatchesQuery {
    #[serde(alias = "item_type", rename = "itemType")]
    pub item_type: ItemKind,
}
