//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change player location

use crate::hazard::random_event;
use crate::{GameState, LabyrinthWorld, View, ViewItem};

use anyhow::Result;
use log::info;

/// Move the player through the exit named `direction`, if it exists and isn't locked.
///
/// A successful move counts as one step, describes the new room and rolls for a
/// random event there.
///
/// # Errors
/// - if the current room or the exit's destination is missing from the world
pub fn move_handler(world: &mut LabyrinthWorld, state: &mut GameState, view: &mut View, direction: &str) -> Result<()> {
    let Some(destination) = world.current_room(state)?.exit(direction).map(|exit| exit.to.clone()) else {
        info!("no '{direction}' exit from '{}'", state.current_room);
        view.push(ViewItem::ActionFailure("You can't go that way.".to_string()));
        return Ok(());
    };

    if let Some(required) = &world.room(&destination)?.entry_requires {
        if !state.has_item(required) {
            info!("entry to '{destination}' denied: '{required}' not carried");
            view.push(ViewItem::ActionFailure(
                "The door is locked. You need a key to go further.".to_string(),
            ));
            return Ok(());
        }
        view.push(ViewItem::TransitionMessage(format!(
            "You use the {required} to open the way forward."
        )));
    }

    info!("player moved from '{}' to '{destination}'", state.current_room);
    state.current_room = destination;
    state.steps_taken += 1;
    world.current_room(state)?.show(view);
    random_event(world, state, view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Room;
    use crate::room::Exit;

    fn world() -> LabyrinthWorld {
        let mut world = LabyrinthWorld::new_empty();
        world.start_room = "entrance".into();
        let mut entrance = Room::new("entrance", "The way in.");
        entrance.exits = vec![Exit::new("east", "hall")];
        let mut hall = Room::new("hall", "Echoes.");
        hall.exits = vec![Exit::new("west", "entrance"), Exit::new("east", "vault")];
        let mut vault = Room::new("vault", "Gold.");
        vault.vault = true;
        vault.entry_requires = Some("rusty_key".into());
        vault.exits = vec![Exit::new("west", "hall")];
        world.insert_room(entrance);
        world.insert_room(hall);
        world.insert_room(vault);
        world
    }

    #[test]
    fn unknown_direction_changes_nothing() {
        let mut world = world();
        let mut state = world.new_game();
        let mut view = View::new();
        move_handler(&mut world, &mut state, &mut view, "north").expect("move");

        assert_eq!(state.current_room, "entrance");
        assert_eq!(state.steps_taken, 0);
        assert!(view.contains(&ViewItem::ActionFailure("You can't go that way.".into())));
    }

    #[test]
    fn successful_move_counts_a_step_and_describes_room() {
        let mut world = world();
        let mut state = world.new_game();
        let mut view = View::new();
        move_handler(&mut world, &mut state, &mut view, "east").expect("move");

        assert_eq!(state.current_room, "hall");
        assert_eq!(state.steps_taken, 1);
        assert!(view.contains(&ViewItem::RoomDescription {
            name: "HALL".into(),
            description: "Echoes.".into(),
        }));
    }

    #[test]
    fn locked_room_needs_its_item() {
        let mut world = world();
        let mut state = world.new_game();
        state.current_room = "hall".into();
        let mut view = View::new();
        move_handler(&mut world, &mut state, &mut view, "east").expect("move");
        assert_eq!(state.current_room, "hall");
        assert_eq!(state.steps_taken, 0);
        assert!(view.messages().any(|item| {
            matches!(item, ViewItem::ActionFailure(msg) if msg.contains("locked"))
        }));

        state.add_item("rusty_key");
        let mut view = View::new();
        move_handler(&mut world, &mut state, &mut view, "east").expect("move");
        assert_eq!(state.current_room, "vault");
        assert_eq!(state.steps_taken, 1);
        assert!(state.has_item("rusty_key"));
        assert!(view.messages().any(ViewItem::is_transition_message));
    }
}
