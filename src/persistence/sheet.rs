//! On-disk sprite sheet document.
//!
//! ```json
//! { "Items": [ { "Id": 1001, "Name": "rock_01", ... } ], "SelectedItem": { ... } }
//! ```
//!
//! A bare sprite object (no `Items` key) is accepted as a one-sprite sheet.

use serde::{Deserialize, Serialize};

use crate::sprite::{SpriteItem, SpriteItemCollection};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SavedSpriteSheet {
    #[serde(default)]
    pub items: Vec<SpriteItem>,
    #[serde(default)]
    pub selected_item: Option<SpriteItem>,
}

impl SavedSpriteSheet {
    pub fn from_collection(collection: &SpriteItemCollection) -> Self {
        Self {
            items: collection.items().to_vec(),
            selected_item: collection.selected_item().cloned(),
        }
    }

    /// Parse a sheet, or a single sprite object as a sheet of one
    pub fn parse(json: &str) -> Result<Self, String> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| format!("Invalid JSON: {}", e))?;

        if value.get("Items").is_some() {
            return serde_json::from_value(value)
                .map_err(|e| format!("Invalid sprite sheet: {}", e));
        }

        let item: SpriteItem =
            serde_json::from_value(value).map_err(|e| format!("Invalid sprite: {}", e))?;
        Ok(Self {
            selected_item: Some(item.clone()),
            items: vec![item],
        })
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to serialize sprites: {}", e))
    }

    /// Id of the saved selection
    pub fn selected_id(&self) -> Option<u32> {
        self.selected_item.as_ref().map(|item| item.id)
    }
}
