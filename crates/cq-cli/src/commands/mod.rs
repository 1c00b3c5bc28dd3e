pub mod check;
pub mod items;
pub mod play;
pub mod simulate;

use std::path::Path;

use cq_core::{LocationId, World};
use cq_engine::{EngineConfig, GameSession};

/// Command-line settings layered over the data file's own.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub moves: Option<u32>,
    pub start: Option<u32>,
}

/// Load and validate a game data file.
fn load_world(path: &Path) -> Result<World, String> {
    World::load(path).map_err(|e| format!("failed to load '{}': {e}", path.display()))
}

/// Load a world and start a session on it.
fn start_session(path: &Path, overrides: Overrides) -> Result<GameSession, String> {
    let world = load_world(path)?;

    let mut config = EngineConfig::from_settings(world.settings());
    if let Some(moves) = overrides.moves {
        config = config.with_max_moves(moves);
    }
    if let Some(start) = overrides.start {
        config = config.with_start(LocationId(start));
    }

    GameSession::new(world, config).map_err(|e| format!("failed to start game: {e}"))
}
