use serde::{Deserialize, Serialize};

use crate::id::{ItemId, LocationId};

/// A collectible item.
///
/// Item definitions never change after load; where an item currently sits
/// is tracked by the owning location's item set or by the player's
/// inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier.
    pub id: ItemId,
    /// Display name, also used to match pickup and drop commands.
    pub name: String,
    /// Text shown when the item is picked up or listed.
    #[serde(default)]
    pub description: String,
    /// Location the item starts in.
    pub start_position: LocationId,
    /// Location the item has to be brought to, if any.
    #[serde(default)]
    pub target_position: Option<LocationId>,
}

impl Item {
    /// Create an item with no description and no target.
    pub fn new(id: ItemId, name: impl Into<String>, start: LocationId) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            start_position: start,
            target_position: None,
        }
    }

    /// Set the target location.
    pub fn with_target(mut self, target: LocationId) -> Self {
        self.target_position = Some(target);
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether this item belongs at the given location.
    pub fn targets(&self, location: LocationId) -> bool {
        self.target_position == Some(location)
    }
}
