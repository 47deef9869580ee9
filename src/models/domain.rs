use serde::{Deserialize, Serialize};
use validator::Validate;

/// Which collection an item belongs to.
///
/// Lost and found items share one record shape but live in separate
/// collections with separate status vocabularies. Matching always pairs
/// an item with candidates of the opposite kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Lost,
    Found,
}

impl ItemKind {
    /// The collection candidates are drawn from.
    pub fn opposite(self) -> ItemKind {
        match self {
            ItemKind::Lost => ItemKind::Found,
            ItemKind::Found => ItemKind::Lost,
        }
    }

    /// The status marking an item of this kind as still matchable.
    pub fn open_status(self) -> ItemStatus {
        match self {
            ItemKind::Lost => ItemStatus::Active,
            ItemKind::Found => ItemStatus::Available,
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::Lost => write!(f, "lost"),
            ItemKind::Found => write!(f, "found"),
        }
    }
}

/// Fixed item categories used by the platform.
///
/// Wire form is the capitalized variant name exactly as stored in the
/// documents ("Electronics", "Clothing", ...), so no serde rename is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    Books,
    Accessories,
    Documents,
    Other,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Books => "Books",
            Category::Accessories => "Accessories",
            Category::Documents => "Documents",
            Category::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

/// Item lifecycle status across both collections.
///
/// Lost items move active -> resolved; found items move available -> claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Active,
    Resolved,
    Available,
    Claimed,
}

impl ItemStatus {
    /// Whether the item can still appear as a match candidate.
    pub fn is_open(self) -> bool {
        matches!(self, ItemStatus::Active | ItemStatus::Available)
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ItemStatus::Active => "active",
            ItemStatus::Resolved => "resolved",
            ItemStatus::Available => "available",
            ItemStatus::Claimed => "claimed",
        };
        write!(f, "{}", name)
    }
}

/// A lost or found item record as stored by the platform.
///
/// Optional fields stay optional here so a sparse or malformed document
/// degrades scoring (absent components contribute zero) instead of failing
/// deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Item {
    #[validate(length(min = 1))]
    #[serde(rename = "itemId")]
    pub id: String,
    #[validate(length(min = 1))]
    #[serde(rename = "userId")]
    pub owner_id: String,
    #[validate(length(min = 1))]
    #[serde(rename = "itemName")]
    pub item_name: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "dateLost", default)]
    pub date_lost: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "dateFound", default)]
    pub date_found: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    pub status: ItemStatus,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Item {
    /// The item's point on the shared time axis: dateLost for lost items,
    /// dateFound for found items, whichever is populated.
    pub fn event_date(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.date_lost.or(self.date_found)
    }
}

/// Candidate query sent to an item repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemQuery {
    /// Hard category filter; `None` queries on status alone.
    pub category: Option<Category>,
    /// Only items still in this status are candidates.
    pub status: ItemStatus,
    /// At most this many items, most recent first by creation time.
    pub limit: usize,
}

/// A scored candidate from the opposite collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMatch {
    pub item: Item,
    pub score: u8,
    #[serde(rename = "isGoodMatch")]
    pub is_good_match: bool,
}

/// Per-factor score weights.
///
/// The four base factors sum to 100; name/color/brand are bonuses on top,
/// with the final score clamped back to 100.
#[derive(Debug, Clone, Copy)]
pub struct MatchWeights {
    pub category: f64,
    pub location: f64,
    pub date: f64,
    pub description: f64,
    pub name: f64,
    pub color: f64,
    pub brand: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            category: 30.0,
            location: 20.0,
            date: 20.0,
            description: 30.0,
            name: 10.0,
            color: 5.0,
            brand: 5.0,
        }
    }
}
