//! Data structures representing the game world.
//!
//! This module defines [`LabyrinthWorld`], the room table a session plays through.
//! The world is built once by the loader; during play only room item lists and
//! puzzles change. Player progress is tracked separately in [`GameState`].

use std::collections::HashMap;

use labyrinth_data::Id;
use log::info;
use thiserror::Error;

use crate::loader::help::HelpData;
use crate::{GameState, Room};

/// Lookups that fail only when the world and game state have drifted apart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("room '{0}' not found in world")]
    UnknownRoom(Id),
}

/// Complete room table for a running game.
#[derive(Debug, Clone, Default)]
pub struct LabyrinthWorld {
    pub title: String,
    pub intro: String,
    pub start_room: Id,
    pub rooms: HashMap<Id, Room>,
    pub help: HelpData,
}

impl LabyrinthWorld {
    /// Create a new empty world.
    pub fn new_empty() -> LabyrinthWorld {
        let world = Self {
            title: String::new(),
            intro: String::new(),
            start_room: String::new(),
            rooms: HashMap::new(),
            help: HelpData::default(),
        };
        info!("new, empty 'LabyrinthWorld' created");
        world
    }

    /// Add (or replace) a room, keyed by its id.
    pub fn insert_room(&mut self, room: Room) {
        self.rooms.insert(room.id.clone(), room);
    }

    /// Obtain a reference to a room by id.
    /// # Errors
    /// - if no room has that id
    pub fn room(&self, id: &str) -> Result<&Room, WorldError> {
        self.rooms.get(id).ok_or_else(|| WorldError::UnknownRoom(id.to_string()))
    }

    /// Obtain a mutable reference to a room by id.
    /// # Errors
    /// - if no room has that id
    pub fn room_mut(&mut self, id: &str) -> Result<&mut Room, WorldError> {
        self.rooms
            .get_mut(id)
            .ok_or_else(|| WorldError::UnknownRoom(id.to_string()))
    }

    /// The room the player currently occupies.
    /// # Errors
    /// - if the state points at a room that isn't in this world
    pub fn current_room(&self, state: &GameState) -> Result<&Room, WorldError> {
        self.room(&state.current_room)
    }

    /// Mutable access to the room the player currently occupies.
    /// # Errors
    /// - if the state points at a room that isn't in this world
    pub fn current_room_mut(&mut self, state: &GameState) -> Result<&mut Room, WorldError> {
        self.room_mut(&state.current_room)
    }

    /// Start a new session in this world's start room.
    pub fn new_game(&self) -> GameState {
        GameState::new(self.start_room.clone())
    }
}
