use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::id::LocationId;
use crate::item::Item;
use crate::location::Location;

/// Optional game settings carried by the data file.
///
/// Unset fields fall back to the engine defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Where the player starts.
    #[serde(default)]
    pub start_location: Option<LocationId>,
    /// Move budget.
    #[serde(default)]
    pub max_moves: Option<u32>,
    /// Where target items have to be brought to win.
    #[serde(default)]
    pub goal_location: Option<LocationId>,
    /// How many target items must sit at the goal.
    #[serde(default)]
    pub required_items: Option<usize>,
    /// Points for carrying an item into its target location.
    #[serde(default)]
    pub target_points: Option<u32>,
    /// Phrase the player types to claim the win.
    #[serde(default)]
    pub confirmation_phrase: Option<String>,
}

/// The decoded game-data document, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameData {
    /// Game settings.
    #[serde(default)]
    pub settings: Settings,
    /// All locations.
    pub locations: Vec<Location>,
    /// All items.
    #[serde(default)]
    pub items: Vec<Item>,
}

impl GameData {
    /// Decode a JSON document.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and decode a JSON file.
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn decode_minimal_document() {
        let data = GameData::from_json(
            r#"{"locations": [{"id": 1, "name": "Dorm", "long_description": "Home."}]}"#,
        )
        .unwrap();
        assert_eq!(data.locations.len(), 1);
        assert!(data.items.is_empty());
        assert_eq!(data.settings, Settings::default());
    }

    #[test]
    fn decode_settings() {
        let data = GameData::from_json(
            r#"{
                "settings": {"max_moves": 20, "confirmation_phrase": "DONE"},
                "locations": []
            }"#,
        )
        .unwrap();
        assert_eq!(data.settings.max_moves, Some(20));
        assert_eq!(data.settings.confirmation_phrase.as_deref(), Some("DONE"));
        assert_eq!(data.settings.start_location, None);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = GameData::from_json("{\"locations\": 3}").unwrap_err();
        assert!(matches!(err, CoreError::Json(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = GameData::from_path(Path::new("/nonexistent/campus.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/campus.json"));
    }

    #[test]
    fn read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"locations": [{{"id": 2, "name": "Quad", "long_description": "Grass."}}]}}"#
        )
        .unwrap();
        let data = GameData::from_path(file.path()).unwrap();
        assert_eq!(data.locations[0].id, LocationId(2));
    }
}
