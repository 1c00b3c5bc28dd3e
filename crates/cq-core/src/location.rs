use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::{ItemId, LocationId};

/// The kind of mini-puzzle a location hands its special commands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PuzzleKind {
    /// Run on a treadmill for a fixed number of seconds.
    Treadmill,
    /// Question the barista and match customers to mugs.
    MugMatch,
    /// Group sixteen words into four hidden categories.
    WordAssociation,
    /// Find the key of a Caesar cipher.
    Cipher,
    /// Flavour text only; always succeeds.
    Narration,
}

impl fmt::Display for PuzzleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Treadmill => write!(f, "treadmill"),
            Self::MugMatch => write!(f, "mug match"),
            Self::WordAssociation => write!(f, "word association"),
            Self::Cipher => write!(f, "cipher"),
            Self::Narration => write!(f, "narration"),
        }
    }
}

/// What a location does with commands that do not lead anywhere.
///
/// Selected by the location's data tag, never by its id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpecialAction {
    /// No handler: non-movement commands are pickup attempts.
    #[default]
    NoAction,
    /// Explicit pickup location; same dispatch as `NoAction`.
    Pickup,
    /// Non-movement commands, and every arrival, are handed to a puzzle
    /// collaborator.
    Puzzle {
        /// Which puzzle runs here.
        puzzle: PuzzleKind,
        /// Item granted from this location's item set on success.
        #[serde(default)]
        reward: Option<ItemId>,
        /// Score awarded on success.
        #[serde(default)]
        points: u32,
    },
}

impl SpecialAction {
    /// Whether a puzzle handler is registered.
    pub fn is_handler(&self) -> bool {
        matches!(self, Self::Puzzle { .. })
    }
}

/// A node in the navigation graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Unique identifier.
    pub id: LocationId,
    /// Display name.
    pub name: String,
    /// Shown on revisits; may be empty.
    #[serde(default)]
    pub brief_description: String,
    /// Shown on the first visit and by `look`.
    pub long_description: String,
    /// Command text to destination; `None` for pickups and special actions.
    #[serde(default)]
    pub available_commands: BTreeMap<String, Option<LocationId>>,
    /// Items currently here, in the order they arrived.
    #[serde(default)]
    pub items: Vec<ItemId>,
    /// Whether the player has been here.
    #[serde(default)]
    pub visited: bool,
    /// Locations nested inside this one.
    #[serde(default)]
    pub sub_locations: Vec<LocationId>,
    /// Movement commands that need an item in the inventory.
    #[serde(default)]
    pub requirements: BTreeMap<String, ItemId>,
    /// Handler for non-movement commands.
    #[serde(default)]
    pub special: SpecialAction,
}

impl Location {
    /// Create a location with no commands or items.
    pub fn new(id: LocationId, name: impl Into<String>, long_description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            brief_description: String::new(),
            long_description: long_description.into(),
            available_commands: BTreeMap::new(),
            items: Vec::new(),
            visited: false,
            sub_locations: Vec::new(),
            requirements: BTreeMap::new(),
            special: SpecialAction::NoAction,
        }
    }

    /// Add a command leading to another location.
    pub fn with_exit(mut self, command: impl Into<String>, destination: LocationId) -> Self {
        self.available_commands
            .insert(command.into(), Some(destination));
        self
    }

    /// Add a command that stays here.
    pub fn with_action(mut self, command: impl Into<String>) -> Self {
        self.available_commands.insert(command.into(), None);
        self
    }

    /// Place an item here.
    pub fn with_item(mut self, item: ItemId) -> Self {
        self.items.push(item);
        self
    }

    /// Set the special action.
    pub fn with_special(mut self, special: SpecialAction) -> Self {
        self.special = special;
        self
    }

    /// Look up a command, case-insensitively.
    ///
    /// Returns the command as written in the data and its destination.
    pub fn command(&self, input: &str) -> Option<(&str, Option<LocationId>)> {
        let needle = input.trim().to_lowercase();
        self.available_commands
            .iter()
            .find(|(command, _)| command.to_lowercase() == needle)
            .map(|(command, destination)| (command.as_str(), *destination))
    }

    /// Item required to use a movement command, case-insensitively.
    pub fn requirement(&self, command: &str) -> Option<ItemId> {
        let needle = command.trim().to_lowercase();
        self.requirements
            .iter()
            .find(|(guarded, _)| guarded.to_lowercase() == needle)
            .map(|(_, item)| *item)
    }

    /// Whether the item is here.
    pub fn has_item(&self, item: ItemId) -> bool {
        self.items.contains(&item)
    }

    /// Remove an item from this location. Returns false if it was not here.
    pub fn remove_item(&mut self, item: ItemId) -> bool {
        if let Some(pos) = self.items.iter().position(|&id| id == item) {
            self.items.remove(pos);
            true
        } else {
            false
        }
    }

    /// Add an item to this location unless it is already here.
    pub fn add_item(&mut self, item: ItemId) {
        if !self.items.contains(&item) {
            self.items.push(item);
        }
    }

    /// Description to show on arrival.
    pub fn arrival_description(&self, first_visit: bool) -> &str {
        if first_visit || self.brief_description.is_empty() {
            &self.long_description
        } else {
            &self.brief_description
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dorm() -> Location {
        Location::new(LocationId(1), "UC Dorm", "Your cramped dorm room.")
            .with_exit("go outside", LocationId(2))
            .with_action("search cabinet")
            .with_item(ItemId(5))
    }

    #[test]
    fn command_lookup_is_case_insensitive() {
        let loc = dorm();
        assert_eq!(
            loc.command("Go Outside"),
            Some(("go outside", Some(LocationId(2))))
        );
        assert_eq!(loc.command("search cabinet"), Some(("search cabinet", None)));
        assert_eq!(loc.command("fly"), None);
    }

    #[test]
    fn requirement_lookup_is_case_insensitive() {
        let mut loc = dorm();
        loc.requirements
            .insert("Go Outside".to_string(), ItemId(1));
        assert_eq!(loc.requirement("go outside"), Some(ItemId(1)));
        assert_eq!(loc.requirement("search cabinet"), None);
    }

    #[test]
    fn item_set_management() {
        let mut loc = dorm();
        assert!(loc.has_item(ItemId(5)));
        loc.add_item(ItemId(5));
        assert_eq!(loc.items.len(), 1);

        assert!(loc.remove_item(ItemId(5)));
        assert!(!loc.has_item(ItemId(5)));
        assert!(!loc.remove_item(ItemId(5)));
    }

    #[test]
    fn arrival_description_prefers_brief_on_revisit() {
        let mut loc = dorm();
        assert_eq!(loc.arrival_description(false), "Your cramped dorm room.");
        loc.brief_description = "Your dorm.".to_string();
        assert_eq!(loc.arrival_description(false), "Your dorm.");
        assert_eq!(loc.arrival_description(true), "Your cramped dorm room.");
    }

    #[test]
    fn special_action_tagged_json() {
        let special: SpecialAction = serde_json::from_str(
            r#"{"kind": "puzzle", "puzzle": "treadmill", "reward": 1, "points": 10}"#,
        )
        .unwrap();
        assert_eq!(
            special,
            SpecialAction::Puzzle {
                puzzle: PuzzleKind::Treadmill,
                reward: Some(ItemId(1)),
                points: 10,
            }
        );
        assert!(special.is_handler());

        let pickup: SpecialAction = serde_json::from_str(r#"{"kind": "pickup"}"#).unwrap();
        assert!(!pickup.is_handler());
        assert!(!SpecialAction::default().is_handler());
    }

    #[test]
    fn location_defaults_from_minimal_json() {
        let loc: Location = serde_json::from_str(
            r#"{"id": 4, "name": "Second Floor", "long_description": "Quiet carrels."}"#,
        )
        .unwrap();
        assert!(loc.available_commands.is_empty());
        assert!(loc.items.is_empty());
        assert!(!loc.visited);
        assert_eq!(loc.special, SpecialAction::NoAction);
    }
}
