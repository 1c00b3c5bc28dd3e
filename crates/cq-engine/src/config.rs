//! Configuration for a game session.

use cq_core::{LocationId, Settings};

/// Configuration for a game session.
///
/// Layered as defaults, then the data file's settings, then explicit
/// `with_*` overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Where the player starts.
    pub start_location: LocationId,
    /// Initial move budget.
    pub max_moves: u32,
    /// Where target items must be brought.
    pub goal_location: LocationId,
    /// How many target items at the goal win the game.
    pub required_items: usize,
    /// Points for carrying an item into its target location.
    pub target_points: u32,
    /// Phrase that confirms the win.
    pub confirmation_phrase: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            start_location: LocationId(1),
            max_moves: 35,
            goal_location: LocationId(1),
            required_items: 4,
            target_points: 2,
            confirmation_phrase: "SUBMIT PROJECT".to_string(),
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by whatever the data file sets.
    ///
    /// The goal falls back to the start location.
    pub fn from_settings(settings: &Settings) -> Self {
        let defaults = Self::default();
        let start_location = settings.start_location.unwrap_or(defaults.start_location);
        Self {
            start_location,
            max_moves: settings.max_moves.unwrap_or(defaults.max_moves),
            goal_location: settings.goal_location.unwrap_or(start_location),
            required_items: settings.required_items.unwrap_or(defaults.required_items),
            target_points: settings.target_points.unwrap_or(defaults.target_points),
            confirmation_phrase: settings
                .confirmation_phrase
                .clone()
                .unwrap_or(defaults.confirmation_phrase),
        }
    }

    /// Set the start location.
    pub fn with_start(mut self, location: LocationId) -> Self {
        self.start_location = location;
        self
    }

    /// Set the move budget.
    pub fn with_max_moves(mut self, moves: u32) -> Self {
        self.max_moves = moves;
        self
    }

    /// Set the goal location.
    pub fn with_goal(mut self, location: LocationId) -> Self {
        self.goal_location = location;
        self
    }

    /// Set how many target items win the game.
    pub fn with_required_items(mut self, count: usize) -> Self {
        self.required_items = count;
        self
    }

    /// Set the points per delivered item.
    pub fn with_target_points(mut self, points: u32) -> Self {
        self.target_points = points;
        self
    }

    /// Set the confirmation phrase.
    pub fn with_confirmation_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.confirmation_phrase = phrase.into();
        self
    }
}
