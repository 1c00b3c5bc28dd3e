//! Mini-puzzles for Campus Quest.
//!
//! [`Puzzles`] implements the engine's [`PuzzleHost`](cq_engine::PuzzleHost)
//! seam. Each puzzle talks to the player through a [`Console`] and reports
//! back only a [`PuzzleOutcome`](cq_engine::PuzzleOutcome). The
//! [`ScriptedConsole`] replays canned answers, which is how the puzzles are
//! tested and how the `simulate` command runs them.

/// Puzzle configuration.
pub mod config;
/// Player I/O used by puzzles.
pub mod console;
/// The puzzle host.
pub mod host;
/// The individual puzzles.
pub mod puzzles;

pub use config::PuzzleConfig;
pub use console::{Console, ScriptedConsole};
pub use host::Puzzles;
pub use puzzles::Puzzle;
