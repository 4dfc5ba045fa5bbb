//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the various command handlers that manipulate the [`LabyrinthWorld`]
//! and the player's [`GameState`].

pub mod input;
pub mod inventory;
pub mod item;
pub mod look;
pub mod movement;
pub mod puzzle;
pub mod system;
pub mod treasure;

pub use input::{InputEvent, InputManager, LineReader, ScriptedInput};
pub use inventory::*;
pub use item::*;
pub use look::*;
pub use movement::*;
pub use puzzle::*;
pub use system::*;
pub use treasure::*;

use crate::command::{Command, parse_command};
use crate::item::TREASURE_CHEST;
use crate::style::GameStyle;
use crate::{GameState, LabyrinthWorld, View, ViewItem};

use anyhow::Result;
use log::info;

/// Run the main read–eval–print loop until the game ends.
///
/// Describes the starting room, then reads one command per turn from `input` and
/// dispatches it until quitting, victory or defeat sets `game_over`. Returns the
/// final state.
///
/// # Errors
/// - Propagates failures from handlers, such as a missing room for the player.
pub fn run_repl(world: &mut LabyrinthWorld, input: &mut dyn LineReader) -> Result<GameState> {
    let mut state = world.new_game();
    let mut view = View::new();

    look_handler(world, &state, &mut view)?;
    view.flush();

    while !state.game_over {
        let prompt = format!("[Steps: {}]>> ", state.steps_taken).prompt_style().to_string();
        let line = input::ask(input, &mut view, &prompt);
        process_command(world, &mut state, &mut view, input, &line)?;
        view.flush();
    }
    info!("session over after {} steps", state.steps_taken);
    Ok(state)
}

/// Interpret one line of player input and apply it to the game.
///
/// Nested questions (riddle answers, the chest code) are read from `input`.
///
/// # Errors
/// - Propagates failures from handlers, such as a missing room for the player.
pub fn process_command(
    world: &mut LabyrinthWorld,
    state: &mut GameState,
    view: &mut View,
    input: &mut dyn LineReader,
    raw_line: &str,
) -> Result<()> {
    #[allow(clippy::enum_glob_use)]
    use Command::*;

    match parse_command(raw_line) {
        Empty => {},
        Look => look_handler(world, state, view)?,
        Go(direction) => move_handler(world, state, view, &direction)?,
        Take(item) => take_handler(world, state, view, &item)?,
        Use(item) => use_handler(state, view, &item),
        Inventory => inv_handler(state, view),
        Help => help_handler(world, view),
        Solve => {
            let room = world.current_room(state)?;
            if room.vault || room.has_item(TREASURE_CHEST) {
                open_chest_handler(world, state, view, input)?;
            } else {
                solve_handler(world, state, view, input)?;
            }
        },
        Quit => quit_handler(state, view),
        MissingArgument(verb) => view.push(ViewItem::ActionFailure(verb.usage().to_string())),
        Unknown(word) => unknown_command_handler(world, view, &word),
    }
    Ok(())
}
