use std::path::PathBuf;

use crate::id::{ItemId, LocationId};

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while loading or querying a world.
///
/// Everything except the lookup variants is a data-integrity violation and
/// is reported once at load time.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested location does not exist.
    #[error("location not found: {0}")]
    UnknownLocation(LocationId),

    /// The requested item does not exist.
    #[error("item not found: {0}")]
    UnknownItem(ItemId),

    /// The game data defines no locations.
    #[error("game data has no locations")]
    NoLocations,

    /// Two locations share an id.
    #[error("duplicate location id {0}")]
    DuplicateLocation(LocationId),

    /// Two items share an id.
    #[error("duplicate item id {0}")]
    DuplicateItem(ItemId),

    /// Two items share a name (case-insensitive).
    #[error("duplicate item name \"{0}\"")]
    DuplicateItemName(String),

    /// A command leads to a location that does not exist.
    #[error("location {location}: command \"{command}\" leads to unknown location {target}")]
    DanglingDestination {
        /// Location owning the command.
        location: LocationId,
        /// The offending command.
        command: String,
        /// The missing destination.
        target: LocationId,
    },

    /// A sub-location id does not exist.
    #[error("location {location}: unknown sub-location {target}")]
    UnknownSubLocation {
        /// Parent location.
        location: LocationId,
        /// The missing sub-location.
        target: LocationId,
    },

    /// A location lists an item that is not in the item table.
    #[error("location {location} lists unknown item {item}")]
    MissingItem {
        /// Location listing the item.
        location: LocationId,
        /// The missing item.
        item: ItemId,
    },

    /// An item is listed by more than one location.
    #[error("item {item} is listed by both location {first} and location {second}")]
    ItemPlacedTwice {
        /// The duplicated item.
        item: ItemId,
        /// First location listing it.
        first: LocationId,
        /// Second location listing it.
        second: LocationId,
    },

    /// An item is listed by no location.
    #[error("item {0} is not placed in any location")]
    ItemNotPlaced(ItemId),

    /// An item's start or target position does not exist.
    #[error("item {item}: {field} refers to unknown location {target}")]
    UnknownItemPosition {
        /// The item.
        item: ItemId,
        /// `start_position` or `target_position`.
        field: &'static str,
        /// The missing location.
        target: LocationId,
    },

    /// A requirement is attached to something other than a movement command.
    #[error("location {location}: requirement on \"{command}\" must guard a movement command")]
    RequirementNotMovement {
        /// Location owning the requirement.
        location: LocationId,
        /// The guarded command.
        command: String,
    },

    /// A requirement names an item that does not exist.
    #[error("location {location}: command \"{command}\" requires unknown item {item}")]
    UnknownRequiredItem {
        /// Location owning the requirement.
        location: LocationId,
        /// The guarded command.
        command: String,
        /// The missing item.
        item: ItemId,
    },

    /// A puzzle reward is not in the puzzle location's item set.
    #[error("location {location}: puzzle reward {item} is not placed here")]
    RewardNotHere {
        /// Location running the puzzle.
        location: LocationId,
        /// The reward item.
        item: ItemId,
    },

    /// A settings entry names a location that does not exist.
    #[error("settings: {field} refers to unknown location {target}")]
    UnknownSettingsLocation {
        /// The settings field.
        field: &'static str,
        /// The missing location.
        target: LocationId,
    },

    /// The game data is not valid JSON for the expected shape.
    #[error("invalid game data: {0}")]
    Json(#[from] serde_json::Error),

    /// The game-data file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
