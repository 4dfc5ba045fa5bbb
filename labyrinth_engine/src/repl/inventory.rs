//! `repl::inventory` module
//!
//! Contains repl loop handlers for commands that affect player inventory

use crate::item::refuse_pickup;
use crate::{GameState, LabyrinthWorld, View, ViewItem};

use anyhow::Result;
use log::info;

/// Removes an item from current room and adds it to inventory.
///
/// # Errors
/// - if the player's current room is missing from the world
pub fn take_handler(world: &mut LabyrinthWorld, state: &mut GameState, view: &mut View, item: &str) -> Result<()> {
    if let Some(reason) = refuse_pickup(item) {
        view.push(ViewItem::ActionFailure(reason.to_string()));
        return Ok(());
    }

    let room = world.current_room_mut(state)?;
    if !room.remove_item(item) {
        view.push(ViewItem::ActionFailure("There is no such item here.".to_string()));
        return Ok(());
    }

    state.add_item(item);
    info!("player took '{item}' from '{}'", state.current_room);
    view.push(ViewItem::ActionSuccess(format!("You picked up: {item}")));
    Ok(())
}

/// Show the player's inventory in pickup order.
pub fn inv_handler(state: &GameState, view: &mut View) {
    view.push(ViewItem::Inventory(state.inventory.clone()));
}
