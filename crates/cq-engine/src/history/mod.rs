//! Undoable history of the player's turns.

pub mod event;
pub mod log;

pub use event::{Event, EventIndex, EventKind};
pub use log::EventLog;
