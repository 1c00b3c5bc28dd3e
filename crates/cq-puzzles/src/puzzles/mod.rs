//! The individual puzzles and the bookkeeping they share.

pub mod cipher;
pub mod mug;
pub mod narration;
pub mod treadmill;
pub mod words;

use cq_engine::{PuzzleContext, PuzzleOutcome};

use crate::console::Console;

pub use cipher::Cipher;
pub use mug::MugMatch;
pub use narration::Narration;
pub use treadmill::Treadmill;
pub use words::WordAssociation;

/// A puzzle that can be played against a console.
pub trait Puzzle {
    /// Play one attempt. `None` means the puzzle ignores the command.
    fn play(&mut self, console: &mut dyn Console, ctx: &PuzzleContext<'_>) -> Option<PuzzleOutcome>;
}

/// Moves spent so far in a puzzle, capped at what the player had.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Tally {
    budget: u32,
    spent: u32,
}

impl Tally {
    pub(crate) fn new(ctx: &PuzzleContext<'_>) -> Self {
        Self {
            budget: ctx.moves_remaining,
            spent: 0,
        }
    }

    pub(crate) fn spend(&mut self, moves: u32) {
        self.spent = self.spent.saturating_add(moves).min(self.budget);
    }

    /// Whether the player has no moves left.
    pub(crate) fn exhausted(&self) -> bool {
        self.spent >= self.budget
    }

    pub(crate) fn failure(&self) -> PuzzleOutcome {
        PuzzleOutcome::failure(self.spent)
    }

    /// Success, charging `cost` more moves on top of what was spent.
    pub(crate) fn success(&self, ctx: &PuzzleContext<'_>, cost: u32) -> PuzzleOutcome {
        PuzzleOutcome::success(ctx, self.spent.saturating_add(cost).min(self.budget))
    }
}
