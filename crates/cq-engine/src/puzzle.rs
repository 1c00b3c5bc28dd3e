//! The seam between the engine and puzzle collaborators.
//!
//! When a location with a puzzle handler receives a non-movement command,
//! or the player moves into it, the engine builds a [`PuzzleContext`] and
//! hands it to a [`PuzzleHost`].
//! The host may talk to the player however it likes; it reports back only
//! a [`PuzzleOutcome`], which the engine applies.

use cq_core::{ItemId, Location, PuzzleKind};

/// A snapshot of the game handed to a puzzle.
#[derive(Debug, Clone, Copy)]
pub struct PuzzleContext<'a> {
    /// The command that triggered the puzzle, as written in the data.
    ///
    /// On arrival this is the movement command that led here.
    pub command: &'a str,
    /// Whether the player has just walked in.
    pub arriving: bool,
    /// The location running the puzzle.
    pub location: &'a Location,
    /// Moves remaining before the puzzle starts.
    pub moves_remaining: u32,
    /// Score before the puzzle starts.
    pub score: u32,
    /// Items the player holds.
    pub inventory: &'a [ItemId],
    /// Item the location grants on success.
    pub reward: Option<ItemId>,
    /// Points the location awards on success.
    pub reward_points: u32,
}

/// What a puzzle did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PuzzleOutcome {
    /// Whether the puzzle was solved.
    pub solved: bool,
    /// Change to the moves remaining; clamped at zero when applied.
    pub moves_delta: i32,
    /// Change to the score; clamped at zero when applied.
    pub score_delta: i32,
    /// Item to transfer from the location to the inventory.
    pub item_granted: Option<ItemId>,
}

impl PuzzleOutcome {
    /// A failed attempt that cost `spent` moves.
    pub fn failure(spent: u32) -> Self {
        Self {
            solved: false,
            moves_delta: negate(spent),
            score_delta: 0,
            item_granted: None,
        }
    }

    /// A solved puzzle: the location's reward and points, at a cost of
    /// `spent` moves.
    pub fn success(ctx: &PuzzleContext<'_>, spent: u32) -> Self {
        Self {
            solved: true,
            moves_delta: negate(spent),
            score_delta: i32::try_from(ctx.reward_points).unwrap_or(i32::MAX),
            item_granted: ctx.reward,
        }
    }

    /// Flavour text with no effect on the game.
    pub fn narrated() -> Self {
        Self {
            solved: true,
            ..Self::default()
        }
    }
}

fn negate(spent: u32) -> i32 {
    i32::try_from(spent).map(|n| -n).unwrap_or(i32::MIN)
}

/// Runs puzzles on the engine's behalf.
pub trait PuzzleHost {
    /// Attempt the puzzle of the given kind.
    ///
    /// Returns `None` when the puzzle does not react to the command.
    fn attempt(&mut self, kind: PuzzleKind, ctx: &PuzzleContext<'_>) -> Option<PuzzleOutcome>;
}

/// A host without puzzles; every special action is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPuzzles;

impl PuzzleHost for NoPuzzles {
    fn attempt(&mut self, _kind: PuzzleKind, _ctx: &PuzzleContext<'_>) -> Option<PuzzleOutcome> {
        None
    }
}

impl<F> PuzzleHost for F
where
    F: FnMut(PuzzleKind, &PuzzleContext<'_>) -> Option<PuzzleOutcome>,
{
    fn attempt(&mut self, kind: PuzzleKind, ctx: &PuzzleContext<'_>) -> Option<PuzzleOutcome> {
        self(kind, ctx)
    }
}
