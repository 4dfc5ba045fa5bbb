//! Traps and post-move random events.
//!
//! Both are seeded by `steps_taken`, so the same route through the labyrinth always
//! springs the same traps and turns up the same coins.

use anyhow::Result;
use log::{info, warn};

use crate::item::{COIN, SWORD, TORCH};
use crate::rng::{pseudo_index, pseudo_random};
use crate::{GameState, LabyrinthWorld, View, ViewItem};

/// Spring a trap on the player.
///
/// A player carrying anything loses one item. An empty-handed player is either
/// killed (3 chances in 10) or escapes narrowly.
pub fn trigger_trap(state: &mut GameState, view: &mut View) {
    let seed = state.steps_taken;
    view.push(ViewItem::TriggeredEvent("A trap springs with a sharp click!".to_string()));

    if let Some(index) = pseudo_index(seed, state.inventory.len())
        && let Some(lost) = state.remove_item_at(index)
    {
        info!("trap took '{lost}' from the player at step {seed}");
        view.push(ViewItem::ItemLost(lost));
        return;
    }

    if pseudo_random(i64::from(seed), 10) < 3 {
        warn!("trap killed the player at step {seed}");
        view.push(ViewItem::PlayerDefeated(
            "The floor gives way and you fall into the darkness below. Game over.".to_string(),
        ));
        state.end_game();
    } else {
        info!("player narrowly escaped a trap at step {seed}");
        view.push(ViewItem::TriggeredEvent(
            "The floor shudders beneath you, but you leap aside just in time. A narrow escape!".to_string(),
        ));
    }
}

/// Roll for something happening after the player enters a room.
///
/// # Errors
/// - if the state points at a room missing from the world
pub fn random_event(world: &mut LabyrinthWorld, state: &mut GameState, view: &mut View) -> Result<()> {
    let seed = i64::from(state.steps_taken);
    if pseudo_random(seed, 10) != 0 {
        return Ok(());
    }

    match pseudo_random(seed + 1, 3) {
        0 => {
            world.current_room_mut(state)?.add_item(COIN);
            info!("random event: coin dropped in '{}'", state.current_room);
            view.push(ViewItem::AmbientEvent(
                "Something glints on the floor. You notice a coin lying at your feet.".to_string(),
            ));
        },
        1 => {
            let text = if state.has_item(SWORD) {
                "Something stirs in the shadows, but the glint of your sword scares it away."
            } else {
                "You hear a rustle somewhere in the shadows."
            };
            info!("random event: rustle in '{}'", state.current_room);
            view.push(ViewItem::AmbientEvent(text.to_string()));
        },
        _ => {
            let trap_room = world.current_room(state)?.is_trap();
            if trap_room && !state.has_item(TORCH) {
                info!("random event: trap in the dark at '{}'", state.current_room);
                view.push(ViewItem::AmbientEvent(
                    "It is too dark to see where you are stepping...".to_string(),
                ));
                trigger_trap(state, view);
            }
        },
    }
    Ok(())
}
