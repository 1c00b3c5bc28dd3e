//! Game-state engine for Campus Quest.
//!
//! A [`GameSession`] owns the [`World`](cq_core::World), the player's
//! inventory, score and move budget, and an undoable [`EventLog`]. Each call
//! to [`GameSession::process`] classifies one line of player input, applies
//! the resulting transition, logs it, and re-evaluates win and loss.
//!
//! Puzzles are external collaborators reached through [`PuzzleHost`]; the
//! engine itself performs no I/O.

/// Engine configuration.
pub mod config;
/// Error types for the engine.
pub mod error;
/// Win and loss evaluation.
pub mod evaluator;
/// Undoable event history.
pub mod history;
/// Command parsing and suggestion.
pub mod parser;
/// Inventory, score and move bookkeeping.
pub mod player;
/// The puzzle collaborator seam.
pub mod puzzle;
/// Turn results returned to the caller.
pub mod response;
/// The game session state machine.
pub mod session;

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use evaluator::GameStatus;
pub use history::{Event, EventIndex, EventKind, EventLog};
pub use parser::{Command, parse_command};
pub use player::PlayerState;
pub use puzzle::{NoPuzzles, PuzzleContext, PuzzleHost, PuzzleOutcome};
pub use response::{PuzzleReport, Response, Turn, UndoReport};
pub use session::GameSession;
