//! What a turn produced, for the caller to render.

use cq_core::{ItemId, LocationId, PuzzleKind};

use crate::evaluator::GameStatus;
use crate::history::EventKind;
use crate::puzzle::PuzzleOutcome;

/// A puzzle run and what it changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleReport {
    /// The puzzle that ran; `None` when no handler reacted.
    pub puzzle: Option<PuzzleKind>,
    /// The outcome as applied.
    pub outcome: PuzzleOutcome,
    /// Item actually moved into the inventory.
    pub granted: Option<ItemId>,
}

/// What an undo reverted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoReport {
    /// Kind of the removed event.
    pub kind: EventKind,
    /// Where the player is now.
    pub location: LocationId,
    /// Item that changed hands back, if any.
    pub item: Option<ItemId>,
    /// Moves given back.
    pub moves_restored: u32,
}

/// The result of a single command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The player moved.
    Moved {
        /// Where the player came from.
        from: LocationId,
        /// Where the player is now.
        to: LocationId,
        /// Whether this was the first visit.
        first_visit: bool,
        /// What the destination's puzzle handler made of the arrival.
        arrival: Option<PuzzleReport>,
    },
    /// A movement command needs an item the player does not hold.
    Blocked {
        /// The movement command.
        command: String,
        /// The missing item.
        required: ItemId,
    },
    /// An item went into the inventory.
    PickedUp(ItemId),
    /// The named item is already in the inventory.
    AlreadyHeld(ItemId),
    /// A pickup command matched no item here.
    NothingToPickUp {
        /// The command as typed.
        command: String,
    },
    /// An item was left at the current location.
    Dropped(ItemId),
    /// `drop` without an item name.
    DropWhat,
    /// The player does not hold the named item.
    NotHeld(String),
    /// A puzzle or narration action ran.
    Special(PuzzleReport),
    /// Describe the current location.
    Look(LocationId),
    /// The held items.
    Inventory(Vec<ItemId>),
    /// The current score.
    Score(u32),
    /// The moves remaining.
    Moves(u32),
    /// Show the event history.
    Log,
    /// Menu vocabulary plus the location's commands.
    Help(Vec<String>),
    /// The last turn was reverted.
    Undone(UndoReport),
    /// The history is empty.
    NothingToUndo,
    /// Only the starting event is left.
    NoPreviousLocation,
    /// The player quit.
    Quit,
}

/// A processed command and the game state after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// What the command did.
    pub response: Response,
    /// Items that earned delivery points this turn.
    pub awarded: Vec<ItemId>,
    /// Game status after evaluation.
    pub status: GameStatus,
}
