//! `repl::system` module
//!
//! Contains repl loop handlers for commands that are for system utilities.

use crate::{GameState, LabyrinthWorld, View, ViewItem};

use log::info;

/// Quit the game.
pub fn quit_handler(state: &mut GameState, view: &mut View) {
    info!("player quit after {} steps", state.steps_taken);
    info!("ending inventory:");
    state.inventory.iter().for_each(|item| info!("- {item}"));

    state.end_game();
    view.push(ViewItem::QuitSummary {
        steps: state.steps_taken,
        inventory: state.inventory.clone(),
    });
}

/// Show available commands.
pub fn help_handler(world: &LabyrinthWorld, view: &mut View) {
    view.push(ViewItem::Help {
        basic_text: world.help.basic_text.clone(),
        commands: world.help.commands.clone(),
    });
}

/// Report an unrecognized command word and show the help text.
pub fn unknown_command_handler(world: &LabyrinthWorld, view: &mut View, word: &str) {
    info!("unrecognized command '{word}'");
    view.push(ViewItem::Error(format!(
        "Unknown command '{word}'. Type help to see the list of commands."
    )));
    help_handler(world, view);
}
