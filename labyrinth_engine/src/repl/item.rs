//! `repl::item` module
//!
//! Handler for the `use` command.

use crate::item::{ItemEffect, RUSTY_KEY};
use crate::{GameState, View, ViewItem};

use log::info;

/// Use an item from the player's inventory.
pub fn use_handler(state: &mut GameState, view: &mut View, item: &str) {
    if !state.has_item(item) {
        view.push(ViewItem::ActionFailure("You don't have that item.".to_string()));
        return;
    }

    match ItemEffect::for_item(item) {
        ItemEffect::LightTorch => {
            view.push(ViewItem::ActionSuccess(
                "You light the torch. The darkness around you retreats.".to_string(),
            ));
        },
        ItemEffect::WieldSword => {
            view.push(ViewItem::ActionSuccess(
                "You grip the sword. You feel confident and protected.".to_string(),
            ));
        },
        ItemEffect::OpenBronzeBox => {
            if state.has_item(RUSTY_KEY) {
                view.push(ViewItem::ActionFailure(format!(
                    "The box is already empty. You have the {RUSTY_KEY}."
                )));
            } else {
                state.add_item(RUSTY_KEY);
                info!("bronze box opened; player received '{RUSTY_KEY}'");
                view.push(ViewItem::ActionSuccess(format!(
                    "You open the bronze box and find a {RUSTY_KEY} inside!"
                )));
            }
        },
        ItemEffect::Unknown => {
            view.push(ViewItem::ActionFailure("You don't know how to use this.".to_string()));
        },
    }
}
