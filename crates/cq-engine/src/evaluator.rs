//! Win and loss evaluation after each turn.

use std::fmt;

use cq_core::{ItemId, World};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::player::PlayerState;

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Still playing.
    Ongoing,
    /// Enough items are at the goal; waiting for the confirmation phrase.
    AwaitingConfirmation,
    /// The player confirmed the win.
    Won,
    /// The player ran out of moves.
    Lost,
    /// The player quit.
    Quit,
}

impl GameStatus {
    /// Whether the game has ended.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::Quit)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ongoing => write!(f, "ongoing"),
            Self::AwaitingConfirmation => write!(f, "awaiting confirmation"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
            Self::Quit => write!(f, "quit"),
        }
    }
}

/// Award delivery points for held items whose target is the current
/// location. Each item scores at most once per game.
pub fn award_targets(world: &World, player: &mut PlayerState, points: u32) -> Vec<ItemId> {
    let here = player.location;
    let due: Vec<ItemId> = player
        .inventory
        .iter()
        .copied()
        .filter(|&id| world.item(id).is_ok_and(|item| item.targets(here)))
        .collect();

    let mut awarded = Vec::new();
    for id in due {
        if player.mark_scored(id) {
            player.score = player.score.saturating_add(points);
            awarded.push(id);
        }
    }
    awarded
}

/// Number of items at the goal whose target is the goal.
pub fn delivered_count(world: &World, config: &EngineConfig) -> usize {
    let goal = config.goal_location;
    world.location(goal).map_or(0, |location| {
        location
            .items
            .iter()
            .filter(|&&id| world.item(id).is_ok_and(|item| item.targets(goal)))
            .count()
    })
}

/// Status after a turn. Running out of moves is checked first.
pub fn evaluate(world: &World, player: &PlayerState, config: &EngineConfig) -> GameStatus {
    if player.moves == 0 {
        GameStatus::Lost
    } else if delivered_count(world, config) >= config.required_items {
        GameStatus::AwaitingConfirmation
    } else {
        GameStatus::Ongoing
    }
}
