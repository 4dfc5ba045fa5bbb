//! WorldDef loader and conversion helpers.
//!
//! Converts the serialized `WorldDef` data model into the runtime room table.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use labyrinth_data::WorldDef;

use crate::{LabyrinthWorld, Room};

/// Load a `WorldDef` from a RON file.
///
/// # Errors
/// - on file IO error or RON parsing error
pub fn load_worlddef(path: &Path) -> Result<WorldDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading worlddef from '{}'", path.display()))?;
    parse_worlddef(&text).with_context(|| format!("parsing worlddef RON from '{}'", path.display()))
}

/// Parse a `WorldDef` from RON text.
///
/// # Errors
/// - if the text is not a valid RON `WorldDef`
pub fn parse_worlddef(text: &str) -> Result<WorldDef> {
    Ok(ron::from_str(text)?)
}

/// Convert a `WorldDef` into a populated `LabyrinthWorld` (help is loaded separately).
///
/// # Errors
/// - if two rooms share an id
pub fn build_world_from_def(def: &WorldDef) -> Result<LabyrinthWorld> {
    let mut world = LabyrinthWorld::new_empty();
    world.title.clone_from(&def.game.title);
    world.intro.clone_from(&def.game.intro);
    world.start_room.clone_from(&def.game.start_room);

    for room_def in &def.rooms {
        if world.rooms.contains_key(&room_def.id) {
            bail!("room '{}' defined twice", room_def.id);
        }
        world.insert_room(Room::from(room_def));
    }
    Ok(world)
}
