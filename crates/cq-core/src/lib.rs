//! Core types for Campus Quest: locations, items, and the world store.
//!
//! This crate defines the data model the game engine plays on. It is
//! independent of the engine: a [`World`] is decoded from a JSON game-data
//! document, validated once, and handed to the engine as a closed graph.

/// Game-data document decoded from JSON.
pub mod data;
/// Error types used throughout the crate.
pub mod error;
/// Typed identifiers for locations and items.
pub mod id;
/// Collectible items.
pub mod item;
/// Locations, command tables, and special actions.
pub mod location;
/// The validated world store that owns locations and items.
pub mod world;

/// Re-export the game-data document types.
pub use data::{GameData, Settings};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export identifier types.
pub use id::{ItemId, LocationId};
/// Re-export item types.
pub use item::Item;
/// Re-export location types.
pub use location::{Location, PuzzleKind, SpecialAction};
/// Re-export the world store.
pub use world::World;
