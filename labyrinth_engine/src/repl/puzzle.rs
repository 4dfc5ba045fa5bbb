//! `repl::puzzle` module
//!
//! Handler for answering a room's riddle.

use crate::hazard::trigger_trap;
use crate::item::{GEM, TREASURE_KEY};
use crate::puzzle::is_quit_reply;
use crate::repl::input::{LineReader, ask};
use crate::room::PuzzleReward;
use crate::{GameState, LabyrinthWorld, View, ViewItem};

use anyhow::Result;
use log::info;

/// Ask the current room's riddle and resolve the player's answer.
///
/// A wrong answer leaves the riddle in place and, in a trap room, springs the trap.
/// A right answer removes the riddle for good and hands out the room's reward.
///
/// # Errors
/// - if the player's current room is missing from the world
pub fn solve_handler(
    world: &mut LabyrinthWorld,
    state: &mut GameState,
    view: &mut View,
    input: &mut dyn LineReader,
) -> Result<()> {
    let Some(question) = world.current_room(state)?.puzzle.as_ref().map(|p| p.question.clone()) else {
        view.push(ViewItem::ActionFailure("There is no puzzle here.".to_string()));
        return Ok(());
    };

    let reply = ask(input, view, &format!("{question}\nYour answer: "));
    if is_quit_reply(&reply) {
        info!("player left the game while answering the puzzle in '{}'", state.current_room);
        state.end_game();
        return Ok(());
    }

    let room = world.current_room_mut(state)?;
    if !room.puzzle.as_ref().is_some_and(|puzzle| puzzle.accepts(&reply)) {
        info!("wrong answer '{reply}' in '{}'", room.id);
        view.push(ViewItem::ActionFailure("Incorrect, try again.".to_string()));
        if room.is_trap() {
            trigger_trap(state, view);
        }
        return Ok(());
    }

    room.puzzle = None;
    let reward = room.reward;
    info!("puzzle solved in '{}'", state.current_room);
    match reward {
        PuzzleReward::Key => {
            if state.has_item(TREASURE_KEY) {
                view.push(ViewItem::ActionSuccess("Correct! The riddle is solved.".to_string()));
            } else {
                state.add_item(TREASURE_KEY);
                view.push(ViewItem::ActionSuccess(format!(
                    "Correct! A hidden drawer slides open. You receive the {TREASURE_KEY}."
                )));
            }
        },
        PuzzleReward::Gem => {
            state.add_item(GEM);
            view.push(ViewItem::ActionSuccess(format!(
                "Correct! You are rewarded with a {GEM}."
            )));
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Puzzle;
    use crate::repl::input::ScriptedInput;
    use crate::room::RoomHazard;
    use crate::Room;

    fn world() -> LabyrinthWorld {
        let mut world = LabyrinthWorld::new_empty();
        world.start_room = "hall".into();
        let mut hall = Room::new("hall", "Echoes.");
        hall.puzzle = Some(Puzzle::new("What comes after nine?", "10"));
        let mut library = Room::new("library", "Shelves.");
        library.puzzle = Some(Puzzle::new("The more you take, the more you leave behind?", "footsteps"));
        library.reward = PuzzleReward::Key;
        let mut trap_room = Room::new("trap_room", "Loose tiles.");
        trap_room.puzzle = Some(Puzzle::new("Corners of a square?", "4"));
        trap_room.hazard = RoomHazard::Trap;
        world.insert_room(hall);
        world.insert_room(library);
        world.insert_room(trap_room);
        world.insert_room(Room::new("entrance", "Bare."));
        world
    }

    fn solve(world: &mut LabyrinthWorld, state: &mut GameState, answer: &str) -> View {
        let mut view = View::new();
        let mut input = ScriptedInput::new([answer]);
        solve_handler(world, state, &mut view, &mut input).expect("solve");
        view
    }

    #[test]
    fn no_puzzle_here() {
        let mut world = world();
        let mut state = GameState::new("entrance");
        let mut input = ScriptedInput::new(Vec::<String>::new());
        let mut view = View::new();
        solve_handler(&mut world, &mut state, &mut view, &mut input).expect("solve");
        assert!(view.contains(&ViewItem::ActionFailure("There is no puzzle here.".into())));
        assert!(input.prompts.is_empty());
    }

    #[test]
    fn question_is_shown_in_prompt() {
        let mut world = world();
        let mut state = GameState::new("hall");
        let mut input = ScriptedInput::new(["10"]);
        solve_handler(&mut world, &mut state, &mut View::new(), &mut input).expect("solve");
        assert!(input.prompts[0].contains("What comes after nine?"));
    }

    #[test]
    fn alternative_answer_earns_a_gem() {
        let mut world = world();
        let mut state = GameState::new("hall");
        let view = solve(&mut world, &mut state, "  TEN ");
        assert_eq!(state.inventory, vec!["gem".to_string()]);
        assert!(world.room("hall").is_ok_and(|r| r.puzzle.is_none()));
        assert!(view.messages().any(ViewItem::is_action_success));
    }

    #[test]
    fn library_grants_key_only_once() {
        let mut world = world();
        let mut state = GameState::new("library");
        solve(&mut world, &mut state, "Footsteps");
        assert_eq!(state.inventory, vec!["treasure_key".to_string()]);

        let view = solve(&mut world, &mut state, "footsteps");
        assert_eq!(state.inventory, vec!["treasure_key".to_string()]);
        assert!(view.contains(&ViewItem::ActionFailure("There is no puzzle here.".into())));
    }

    #[test]
    fn wrong_answer_keeps_puzzle() {
        let mut world = world();
        let mut state = GameState::new("hall");
        let view = solve(&mut world, &mut state, "11");
        assert!(world.room("hall").is_ok_and(|r| r.puzzle.is_some()));
        assert!(state.inventory.is_empty());
        assert!(view.contains(&ViewItem::ActionFailure("Incorrect, try again.".into())));
        assert!(!view.messages().any(ViewItem::is_triggered_event));
    }

    #[test]
    fn wrong_answer_in_trap_room_springs_trap() {
        let mut world = world();
        let mut state = GameState::new("trap_room");
        state.steps_taken = 1;
        state.add_item("torch");
        state.add_item("sword");
        let view = solve(&mut world, &mut state, "5");
        assert_eq!(state.inventory, vec!["torch".to_string()]);
        assert!(view.contains(&ViewItem::ItemLost("sword".into())));
        assert!(world.room("trap_room").is_ok_and(|r| r.puzzle.is_some()));
    }

    #[test]
    fn empty_handed_wrong_answer_in_trap_room_can_kill() {
        let mut world = world();
        let mut state = GameState::new("trap_room");
        let view = solve(&mut world, &mut state, "5");
        assert!(state.game_over);
        assert!(state.inventory.is_empty());
        assert!(view.messages().any(ViewItem::is_player_defeated));
        assert!(world.room("trap_room").is_ok_and(|r| r.puzzle.is_some()));
    }

    #[test]
    fn quit_reply_ends_game_and_keeps_puzzle() {
        let mut world = world();
        let mut state = GameState::new("hall");
        solve(&mut world, &mut state, "EXIT");
        assert!(state.game_over);
        assert!(world.room("hall").is_ok_and(|r| r.puzzle.is_some()));
    }
}
