//! `repl::treasure` module
//!
//! Opening the treasure chest, either with the treasure key or by entering its code.

use crate::item::{TREASURE_CHEST, TREASURE_KEY};
use crate::puzzle::{answer_matches, is_quit_reply, normalize_answer};
use crate::repl::input::{LineReader, ask};
use crate::{GameState, LabyrinthWorld, View, ViewItem};

use anyhow::Result;
use log::info;

/// Replies accepted as "yes" when offered to enter the chest's code.
const YES_ANSWERS: &[&str] = &["y", "yes", "да", "д"];

fn is_affirmative(reply: &str) -> bool {
    YES_ANSWERS.contains(&normalize_answer(reply).as_str())
}

/// Try to open the chest in the current room.
///
/// The treasure key opens it outright (and is used up). Without the key the player
/// may guess the code, which is the answer to the room's own riddle.
///
/// # Errors
/// - if the player's current room is missing from the world
pub fn open_chest_handler(
    world: &mut LabyrinthWorld,
    state: &mut GameState,
    view: &mut View,
    input: &mut dyn LineReader,
) -> Result<()> {
    let room = world.current_room(state)?;
    if !room.has_item(TREASURE_CHEST) {
        view.push(ViewItem::ActionFailure("There is no chest here.".to_string()));
        return Ok(());
    }
    let code_answer = room.puzzle.as_ref().map(|puzzle| puzzle.answer.clone());

    if state.remove_item(TREASURE_KEY) {
        info!("chest opened with the {TREASURE_KEY}");
        return open_chest(
            world,
            state,
            view,
            "You turn the treasure key in the lock and the lid of the chest swings open!",
        );
    }

    let reply = ask(input, view, "The chest is locked. Try to enter the code? (yes/no) ");
    if is_quit_reply(&reply) {
        info!("player left the game at the chest");
        state.end_game();
        return Ok(());
    }
    if !is_affirmative(&reply) {
        view.push(ViewItem::ActionFailure("You step back from the chest.".to_string()));
        return Ok(());
    }

    let code = ask(input, view, "Enter the code: ");
    match code_answer {
        Some(answer) if answer_matches(&answer, &code) => {
            info!("chest opened by code");
            open_chest(
                world,
                state,
                view,
                "The dials click into place and the lid of the chest swings open!",
            )
        },
        _ => {
            info!("wrong chest code '{code}'");
            view.push(ViewItem::ActionFailure("Wrong code.".to_string()));
            Ok(())
        },
    }
}

/// Remove the chest from the room and end the game in victory.
fn open_chest(world: &mut LabyrinthWorld, state: &mut GameState, view: &mut View, how: &str) -> Result<()> {
    world.current_room_mut(state)?.remove_item(TREASURE_CHEST);
    state.end_game();
    info!("player won after {} steps", state.steps_taken);
    view.push(ViewItem::TriggeredEvent(how.to_string()));
    view.push(ViewItem::Victory(
        "The chest is full of gold and jewels. You have found the treasure. You win!".to_string(),
    ));
    Ok(())
}
