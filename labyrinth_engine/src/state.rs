//! Per-session game state.
//!
//! `GameState` is everything about the player's progress that changes from turn to turn:
//! where they are, what they carry, how far they've walked and whether the session is over.
//! The room table itself lives in [`LabyrinthWorld`](crate::LabyrinthWorld).

use labyrinth_data::Id;
use log::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub current_room: Id,
    /// Items held, in pickup order.
    pub inventory: Vec<String>,
    /// Successful room transitions so far; also the seed for traps and random events.
    pub steps_taken: u32,
    pub game_over: bool,
}

impl GameState {
    /// Fresh state for a session starting in `start_room`.
    pub fn new(start_room: impl Into<Id>) -> Self {
        let state = Self {
            current_room: start_room.into(),
            inventory: Vec::new(),
            steps_taken: 0,
            game_over: false,
        };
        info!("new game state created in '{}'", state.current_room);
        state
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|held| held == item)
    }

    pub fn add_item(&mut self, item: impl Into<String>) {
        self.inventory.push(item.into());
    }

    /// Remove the first copy of `item`. Returns false if it wasn't held.
    pub fn remove_item(&mut self, item: &str) -> bool {
        if let Some(pos) = self.inventory.iter().position(|held| held == item) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }

    /// Remove and return the item at `index`, if any.
    pub fn remove_item_at(&mut self, index: usize) -> Option<String> {
        (index < self.inventory.len()).then(|| self.inventory.remove(index))
    }

    /// Mark the session finished.
    pub fn end_game(&mut self) {
        self.game_over = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_clean() {
        let state = GameState::new("entrance");
        assert_eq!(state.current_room, "entrance");
        assert!(state.inventory.is_empty());
        assert_eq!(state.steps_taken, 0);
        assert!(!state.game_over);
    }

    #[test]
    fn remove_item_takes_first_copy_only() {
        let mut state = GameState::new("entrance");
        state.add_item("coin");
        state.add_item("torch");
        state.add_item("coin");
        assert!(state.remove_item("coin"));
        assert_eq!(state.inventory, vec!["torch".to_string(), "coin".to_string()]);
        assert!(!state.remove_item("sword"));
    }

    #[test]
    fn remove_item_at_checks_bounds() {
        let mut state = GameState::new("entrance");
        state.add_item("torch");
        assert_eq!(state.remove_item_at(3), None);
        assert_eq!(state.remove_item_at(0), Some("torch".to_string()));
        assert!(state.inventory.is_empty());
    }
}
