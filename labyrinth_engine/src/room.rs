//! Room definitions.
//!
//! Rooms are fixed at load time except for their item lists and puzzles: items come
//! and go as the player picks them up or random events drop them, and a puzzle is
//! removed for good once it has been solved.

use labyrinth_data::{Id, RoomDef};
pub use labyrinth_data::{PuzzleReward, RoomHazard};

use crate::puzzle::Puzzle;
use crate::{View, ViewItem};

/// An exit from one room to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    pub direction: String,
    pub to: Id,
}
impl Exit {
    /// Create an exit leading `direction` to the room with the given id.
    pub fn new(direction: impl Into<String>, to: impl Into<Id>) -> Self {
        Self {
            direction: direction.into(),
            to: to.into(),
        }
    }
}

/// Any visitable location in the labyrinth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: Id,
    pub description: String,
    /// Exits in authored order.
    pub exits: Vec<Exit>,
    pub items: Vec<String>,
    pub puzzle: Option<Puzzle>,
    pub reward: PuzzleReward,
    pub hazard: RoomHazard,
    pub vault: bool,
    pub entry_requires: Option<String>,
}

impl Room {
    /// A bare room with no exits, items or special properties.
    pub fn new(id: impl Into<Id>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            exits: Vec::new(),
            items: Vec::new(),
            puzzle: None,
            reward: PuzzleReward::default(),
            hazard: RoomHazard::default(),
            vault: false,
            entry_requires: None,
        }
    }

    /// Find the exit for an exact direction token.
    pub fn exit(&self, direction: &str) -> Option<&Exit> {
        self.exits.iter().find(|exit| exit.direction == direction)
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.items.iter().any(|here| here == item)
    }

    pub fn add_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Remove one copy of `item` from the room. Returns false if it isn't here.
    pub fn remove_item(&mut self, item: &str) -> bool {
        if let Some(pos) = self.items.iter().position(|here| here == item) {
            self.items.remove(pos);
            true
        } else {
            false
        }
    }

    pub fn is_trap(&self) -> bool {
        self.hazard == RoomHazard::Trap
    }

    /// Push the full room description to the view.
    pub fn show(&self, view: &mut View) {
        view.push(ViewItem::RoomDescription {
            name: self.id.to_uppercase(),
            description: self.description.clone(),
        });
        if !self.items.is_empty() {
            view.push(ViewItem::RoomItems(self.items.clone()));
        }
        view.push(ViewItem::RoomExits(
            self.exits.iter().map(|exit| exit.direction.clone()).collect(),
        ));
        if self.puzzle.is_some() {
            view.push(ViewItem::PuzzleNotice(
                "There seems to be a puzzle here (try the solve command).".to_string(),
            ));
        }
    }
}

impl From<&RoomDef> for Room {
    fn from(def: &RoomDef) -> Self {
        Self {
            id: def.id.clone(),
            description: def.desc.clone(),
            exits: def.exits.iter().map(|e| Exit::new(e.direction.clone(), e.to.clone())).collect(),
            items: def.items.clone(),
            puzzle: def.puzzle.as_ref().map(Puzzle::from),
            reward: def.reward,
            hazard: def.hazard,
            vault: def.vault,
            entry_requires: def.entry_requires.clone(),
        }
    }
}
