//! `repl::look` module
//!
//! Describes the player's surroundings without changing anything.

use crate::{GameState, LabyrinthWorld, View};

use anyhow::Result;

/// Shows description of surroundings.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn look_handler(world: &LabyrinthWorld, state: &GameState, view: &mut View) -> Result<()> {
    world.current_room(state)?.show(view);
    Ok(())
}
