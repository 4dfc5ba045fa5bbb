//! Full-game scenarios against the shipped world data.

use labyrinth_engine as le;
use le::repl::ScriptedInput;
use le::{GameState, LabyrinthWorld, View, ViewItem, load_world, process_command, run_repl};

struct Session {
    world: LabyrinthWorld,
    state: GameState,
}

impl Session {
    fn new() -> Self {
        let world = load_world().expect("shipped world loads");
        let state = world.new_game();
        Self { world, state }
    }

    /// Run one command, answering any nested prompts from `answers`.
    fn cmd_with(&mut self, line: &str, answers: &[&str]) -> View {
        let mut view = View::new();
        let mut input = ScriptedInput::new(answers.iter().copied());
        process_command(&mut self.world, &mut self.state, &mut view, &mut input, line).expect("command runs");
        view
    }

    fn cmd(&mut self, line: &str) -> View {
        self.cmd_with(line, &[])
    }

    fn run(&mut self, lines: &[&str]) {
        for line in lines {
            self.cmd(line);
        }
    }

    fn room_items(&self, room: &str) -> Vec<String> {
        self.world.room(room).expect("room exists").items.clone()
    }
}

fn has_failure(view: &View, needle: &str) -> bool {
    view.messages()
        .any(|item| matches!(item, ViewItem::ActionFailure(msg) if msg.contains(needle)))
}

/// Route from the entrance to the armory with the rusty key in hand.
const TO_ARMORY_WITH_KEY: &[&str] = &["go east", "go north", "go north", "take bronze_box", "use bronze_box"];

#[test]
fn take_torch_at_entrance() {
    let mut s = Session::new();
    assert_eq!(s.room_items("entrance"), vec!["torch".to_string()]);

    let view = s.cmd("take torch");
    assert_eq!(s.state.inventory, vec!["torch".to_string()]);
    assert!(s.room_items("entrance").is_empty());
    assert!(view.contains(&ViewItem::ActionSuccess("You picked up: torch".into())));

    let view = s.cmd("take torch");
    assert!(has_failure(&view, "no such item"));
    assert_eq!(s.state.inventory.len(), 1);
}

#[test]
fn entrance_has_no_north_exit() {
    let mut s = Session::new();
    let view = s.cmd("go north");
    assert_eq!(s.state.current_room, "entrance");
    assert_eq!(s.state.steps_taken, 0);
    assert!(view.contains(&ViewItem::ActionFailure("You can't go that way.".into())));
}

#[test]
fn steps_count_only_successful_moves() {
    let mut s = Session::new();
    s.run(&["go north", "go east", "go up", "go west", "go south", "look", "inventory"]);
    assert_eq!(s.state.current_room, "entrance");
    assert_eq!(s.state.steps_taken, 2);
}

#[test]
fn bronze_box_is_used_up_after_one_key() {
    let mut s = Session::new();
    s.run(TO_ARMORY_WITH_KEY);
    assert_eq!(s.state.current_room, "armory");
    assert_eq!(
        s.state.inventory,
        vec!["bronze_box".to_string(), "rusty_key".to_string()]
    );

    let view = s.cmd("use bronze_box");
    assert!(has_failure(&view, "already empty"));
    assert_eq!(s.state.inventory.iter().filter(|i| *i == "rusty_key").count(), 1);
}

#[test]
fn locked_vault_round_trip() {
    let mut s = Session::new();
    s.cmd("go east");
    let view = s.cmd("go east");
    assert!(has_failure(&view, "locked"));
    assert_eq!(s.state.current_room, "hall");
    assert_eq!(s.state.steps_taken, 1);

    s.run(&["go north", "go north", "take bronze_box", "use bronze_box", "go south", "go south"]);
    assert_eq!(s.state.current_room, "hall");
    let view = s.cmd("go east");
    assert_eq!(s.state.current_room, "treasure_room");
    assert!(view.messages().any(ViewItem::is_transition_message));
    assert!(s.state.has_item("rusty_key"));

    s.cmd("go west");
    assert_eq!(s.state.current_room, "hall");
    assert_eq!(s.state.steps_taken, 7);
}

#[test]
fn wrong_answer_in_trap_room() {
    let mut s = Session::new();
    s.run(&["take torch", "go west"]);
    assert_eq!(s.state.current_room, "trap_room");

    let view = s.cmd_with("solve", &["5"]);
    assert!(view.contains(&ViewItem::ActionFailure("Incorrect, try again.".into())));
    assert!(view.contains(&ViewItem::ItemLost("torch".into())));
    assert!(s.state.inventory.is_empty());

    // empty-handed at step 1: the floor shakes but holds
    let view = s.cmd_with("solve", &["five"]);
    assert!(!s.state.game_over);
    assert!(!view.messages().any(ViewItem::is_player_defeated));

    s.cmd_with("solve", &["четыре"]);
    assert_eq!(s.state.inventory, vec!["gem".to_string()]);
    let view = s.cmd("solve");
    assert!(view.contains(&ViewItem::ActionFailure("There is no puzzle here.".into())));
}

#[test]
fn library_puzzle_solves_once() {
    let mut s = Session::new();
    s.run(&["go east", "go north"]);
    assert_eq!(s.state.current_room, "library");

    s.cmd_with("solve", &["Footsteps"]);
    assert_eq!(s.state.inventory, vec!["treasure_key".to_string()]);

    let view = s.cmd_with("solve", &["footsteps"]);
    assert!(view.contains(&ViewItem::ActionFailure("There is no puzzle here.".into())));
    assert_eq!(s.state.inventory, vec!["treasure_key".to_string()]);
}

#[test]
fn victory_with_treasure_key() {
    let mut s = Session::new();
    s.run(&["go east", "go north"]);
    s.cmd_with("solve", &["footsteps"]);
    s.run(&["go north", "take bronze_box", "use bronze_box", "go south", "go south", "go east"]);
    assert_eq!(s.state.current_room, "treasure_room");

    let view = s.cmd("take treasure_chest");
    assert!(has_failure(&view, "too heavy"));

    let view = s.cmd("solve");
    assert!(view.messages().any(ViewItem::is_victory));
    assert!(s.state.game_over);
    assert!(!s.state.has_item("treasure_key"));
    assert!(!s.room_items("treasure_room").contains(&"treasure_chest".to_string()));
}

#[test]
fn victory_by_chest_code() {
    let mut s = Session::new();
    s.run(TO_ARMORY_WITH_KEY);
    s.run(&["go south", "go south", "go east"]);

    let view = s.cmd_with("solve", &["нет"]);
    assert!(!s.state.game_over);
    assert!(!view.messages().any(ViewItem::is_victory));

    let view = s.cmd_with("solve", &["yes", "42"]);
    assert!(view.contains(&ViewItem::ActionFailure("Wrong code.".into())));

    let view = s.cmd_with("solve", &["да", "десять"]);
    assert!(view.messages().any(ViewItem::is_victory));
    assert!(s.state.game_over);
}

#[test]
fn full_session_through_repl() {
    let mut world = load_world().expect("shipped world loads");
    let mut input = ScriptedInput::new([
        "take torch",
        "go east",
        "solve",
        "ten",
        "go north",
        "inventory",
        "dance",
        "quit",
        "look",
    ]);
    let state = run_repl(&mut world, &mut input).expect("repl");

    assert!(state.game_over);
    assert_eq!(state.current_room, "library");
    assert_eq!(state.inventory, vec!["torch".to_string(), "gem".to_string()]);
    assert_eq!(state.steps_taken, 2);
    assert_eq!(input.remaining(), 1);
}

#[test]
fn end_of_input_quits() {
    let mut world = load_world().expect("shipped world loads");
    let mut input = ScriptedInput::new(["go east"]);
    let state = run_repl(&mut world, &mut input).expect("repl");
    assert!(state.game_over);
    assert_eq!(state.steps_taken, 1);
}
