//! Event types recorded in the history.

use std::fmt;

use chrono::{DateTime, Utc};
use cq_core::{ItemId, LocationId};
use serde::{Deserialize, Serialize};

/// Index of an event in the log's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventIndex(pub(crate) usize);

/// What kind of turn produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// The player entered the world.
    Start,
    /// The player moved to a new location.
    Move,
    /// An item went from the location into the inventory.
    Pickup,
    /// An item went from the inventory into the location.
    Drop,
    /// A puzzle or narration action ran.
    Special,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Move => write!(f, "move"),
            Self::Pickup => write!(f, "pickup"),
            Self::Drop => write!(f, "drop"),
            Self::Special => write!(f, "special"),
        }
    }
}

/// One node of the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// What happened.
    pub kind: EventKind,
    /// Where the player was after the turn.
    pub location: LocationId,
    /// Long description of the location at the time, for moves.
    pub description: Option<String>,
    /// The command that led to the next event; `None` at the tail.
    pub next_command: Option<String>,
    /// Item that changed hands, for pickups and drops.
    pub item: Option<ItemId>,
    /// Moves the turn consumed.
    pub moves_spent: u32,
    /// When the event was recorded.
    pub timestamp: DateTime<Utc>,
    #[serde(skip)]
    pub(crate) prev: Option<EventIndex>,
    #[serde(skip)]
    pub(crate) next: Option<EventIndex>,
}

impl Event {
    /// Create an unlinked event.
    pub fn new(kind: EventKind, location: LocationId) -> Self {
        Self {
            kind,
            location,
            description: None,
            next_command: None,
            item: None,
            moves_spent: 0,
            timestamp: Utc::now(),
            prev: None,
            next: None,
        }
    }

    /// Attach a description snapshot.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach the item that changed hands.
    pub fn with_item(mut self, item: ItemId) -> Self {
        self.item = Some(item);
        self
    }

    /// Record how many moves the turn consumed.
    pub fn with_moves_spent(mut self, moves: u32) -> Self {
        self.moves_spent = moves;
        self
    }

    /// Previous node, if any.
    pub fn prev(&self) -> Option<EventIndex> {
        self.prev
    }

    /// Next node, if any.
    pub fn next(&self) -> Option<EventIndex> {
        self.next
    }
}
