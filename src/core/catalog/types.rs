//! Catalog item types

use serde::{Deserialize, Serialize};

/// A single clothing item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardrobeItem {
    /// Assigned on insert, immutable, never reused
    pub id: i64,

    /// Free text, required
    pub name: String,

    /// Garment type (free text, e.g. "Top")
    #[serde(rename = "type")]
    pub kind: String,

    /// Free text, may be empty
    pub color: String,

    /// Style descriptor (free text, e.g. "Casual")
    pub vibe: String,
}

impl WardrobeItem {
    /// The editable fields of this item
    pub fn fields(&self) -> ItemFields {
        ItemFields {
            name: self.name.clone(),
            kind: self.kind.clone(),
            color: self.color.clone(),
            vibe: self.vibe.clone(),
        }
    }
}

/// The four user-editable fields of an item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFields {
    pub name: String,
    pub kind: String,
    pub color: String,
    pub vibe: String,
}

impl ItemFields {
    pub fn new(name: &str, kind: &str, color: &str, vibe: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
            color: color.to_string(),
            vibe: vibe.to_string(),
        }
    }
}
