//! Player state management.

use std::collections::BTreeSet;

use cq_core::{ItemId, LocationId};

/// The player's inventory, score and move budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    /// Current location.
    pub location: LocationId,
    /// Held items in pickup order.
    pub inventory: Vec<ItemId>,
    /// Current score; never negative.
    pub score: u32,
    /// Moves remaining; never negative.
    pub moves: u32,
    /// Items that already earned their delivery points.
    pub scored: BTreeSet<ItemId>,
}

impl PlayerState {
    /// Create a player at the given location with a move budget.
    pub fn new(location: LocationId, moves: u32) -> Self {
        Self {
            location,
            inventory: Vec::new(),
            score: 0,
            moves,
            scored: BTreeSet::new(),
        }
    }

    /// Check if the player has an item.
    pub fn has_item(&self, item: ItemId) -> bool {
        self.inventory.contains(&item)
    }

    /// Add an item to inventory.
    pub fn add_item(&mut self, item: ItemId) {
        if !self.inventory.contains(&item) {
            self.inventory.push(item);
        }
    }

    /// Remove an item from inventory.
    pub fn remove_item(&mut self, item: ItemId) -> bool {
        if let Some(pos) = self.inventory.iter().position(|&id| id == item) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }

    /// Spend up to `n` moves. Returns how many were actually spent.
    pub fn spend_moves(&mut self, n: u32) -> u32 {
        let spent = n.min(self.moves);
        self.moves -= spent;
        spent
    }

    /// Give back `n` moves.
    pub fn restore_moves(&mut self, n: u32) {
        self.moves = self.moves.saturating_add(n);
    }

    /// Apply a signed move change, clamping at zero.
    pub fn adjust_moves(&mut self, delta: i32) {
        if delta < 0 {
            self.spend_moves(delta.unsigned_abs());
        } else {
            self.restore_moves(delta.unsigned_abs());
        }
    }

    /// Apply a signed score change, clamping at zero.
    pub fn adjust_score(&mut self, delta: i32) {
        if delta < 0 {
            self.score = self.score.saturating_sub(delta.unsigned_abs());
        } else {
            self.score = self.score.saturating_add(delta.unsigned_abs());
        }
    }

    /// Record that an item earned its delivery points.
    ///
    /// Returns false if it already had.
    pub fn mark_scored(&mut self, item: ItemId) -> bool {
        self.scored.insert(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_state_new() {
        let state = PlayerState::new(LocationId(1), 35);
        assert_eq!(state.location, LocationId(1));
        assert_eq!(state.moves, 35);
        assert_eq!(state.score, 0);
        assert!(state.inventory.is_empty());
    }

    #[test]
    fn inventory_management() {
        let mut state = PlayerState::new(LocationId(1), 35);
        let item = ItemId(3);

        assert!(!state.has_item(item));
        state.add_item(item);
        assert!(state.has_item(item));

        // No duplicates
        state.add_item(item);
        assert_eq!(state.inventory.len(), 1);

        assert!(state.remove_item(item));
        assert!(!state.remove_item(item));
    }

    #[test]
    fn moves_clamp_at_zero() {
        let mut state = PlayerState::new(LocationId(1), 3);
        assert_eq!(state.spend_moves(2), 2);
        assert_eq!(state.spend_moves(5), 1);
        assert_eq!(state.moves, 0);

        state.adjust_moves(4);
        assert_eq!(state.moves, 4);
        state.adjust_moves(-10);
        assert_eq!(state.moves, 0);
    }

    #[test]
    fn score_clamps_at_zero() {
        let mut state = PlayerState::new(LocationId(1), 3);
        state.adjust_score(10);
        state.adjust_score(-4);
        assert_eq!(state.score, 6);
        state.adjust_score(-20);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn scoring_is_recorded_once() {
        let mut state = PlayerState::new(LocationId(1), 3);
        assert!(state.mark_scored(ItemId(1)));
        assert!(!state.mark_scored(ItemId(1)));
    }
}
