use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a WorldDef.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    MissingRoom { role: &'static str },
    Unreachable { id: String, from: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::MissingRoom { role } => {
                write!(f, "world has no {role}")
            },
            ValidationError::Unreachable { id, from } => {
                write!(f, "room '{id}' cannot be reached from '{from}'")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and the special rooms a playable labyrinth needs.
///
/// ```
/// use labyrinth_data::{ExitDef, GameDef, PuzzleDef, PuzzleReward, RoomDef, RoomHazard, WorldDef, validate_world};
///
/// let room = |id: &str, to: &str| RoomDef {
///     id: id.into(),
///     desc: "A room.".into(),
///     exits: vec![ExitDef { direction: "north".into(), to: to.into() }],
///     items: Vec::new(),
///     puzzle: None,
///     reward: PuzzleReward::Gem,
///     hazard: RoomHazard::None,
///     vault: false,
///     entry_requires: None,
/// };
/// let mut library = room("entrance", "vault");
/// library.puzzle = Some(PuzzleDef { question: "2+2?".into(), answer: "4".into() });
/// library.reward = PuzzleReward::Key;
/// library.hazard = RoomHazard::Trap;
/// let mut vault = room("vault", "entrance");
/// vault.vault = true;
///
/// let world = WorldDef {
///     game: GameDef { title: "Demo".into(), ..GameDef::default() },
///     rooms: vec![library, vault],
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut rooms = HashSet::new();
    track_ids("room", world.rooms.iter().map(|r| r.id.as_str()), &mut rooms, &mut errors);

    let start_room = world.game.start_room.trim();
    if start_room.is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "game start room missing".to_string(),
        });
    } else {
        check_ref("room", start_room, &rooms, "game start room".to_string(), &mut errors);
    }

    for room in &world.rooms {
        let mut directions = HashSet::new();
        for exit in &room.exits {
            if !directions.insert(exit.direction.as_str()) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("room '{}' has two '{}' exits", room.id, exit.direction),
                });
            }
            check_ref(
                "room",
                &exit.to,
                &rooms,
                format!("room '{}' exit '{}'", room.id, exit.direction),
                &mut errors,
            );
        }
        if room.entry_requires.as_ref().is_some_and(|item| item.trim().is_empty()) {
            errors.push(ValidationError::InvalidValue {
                context: format!("room '{}' requires an unnamed item", room.id),
            });
        }
        if let Some(puzzle) = &room.puzzle
            && puzzle.answer.trim().is_empty()
        {
            errors.push(ValidationError::InvalidValue {
                context: format!("room '{}' puzzle has an empty answer", room.id),
            });
        }
    }

    let vaults: Vec<&RoomDef> = world.rooms.iter().filter(|r| r.vault).collect();
    match vaults.as_slice() {
        [] => errors.push(ValidationError::MissingRoom { role: "treasure room" }),
        [vault] => {
            if rooms.contains(start_room) && !reachable_from(world, start_room).contains(vault.id.as_str()) {
                errors.push(ValidationError::Unreachable {
                    id: vault.id.clone(),
                    from: start_room.to_string(),
                });
            }
        },
        _ => errors.push(ValidationError::InvalidValue {
            context: format!("{} rooms are marked as the treasure room", vaults.len()),
        }),
    }

    if !world
        .rooms
        .iter()
        .any(|r| r.reward == PuzzleReward::Key && r.puzzle.is_some())
    {
        errors.push(ValidationError::MissingRoom {
            role: "key-granting puzzle room",
        });
    }

    if !world.rooms.iter().any(|r| r.hazard == RoomHazard::Trap) {
        errors.push(ValidationError::MissingRoom { role: "trap room" });
    }

    errors
}

/// Ids of every room reachable by following exits from `start` (inclusive).
fn reachable_from<'a>(world: &'a WorldDef, start: &'a str) -> HashSet<&'a str> {
    let by_id: HashMap<&str, &RoomDef> = world.rooms.iter().map(|r| (r.id.as_str(), r)).collect();
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(id) = queue.pop_front() {
        let Some(room) = by_id.get(id) else { continue };
        for exit in &room.exits {
            if seen.insert(exit.to.as_str()) {
                queue.push_back(exit.to.as_str());
            }
        }
    }
    seen
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    set: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !set.insert(id.to_string()) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_ref(kind: &'static str, id: &str, set: &HashSet<String>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: &str) -> RoomDef {
        RoomDef {
            id: id.to_string(),
            desc: "Test room".into(),
            exits: Vec::new(),
            items: Vec::new(),
            puzzle: None,
            reward: PuzzleReward::Gem,
            hazard: RoomHazard::None,
            vault: false,
            entry_requires: None,
        }
    }

    fn exit(direction: &str, to: &str) -> ExitDef {
        ExitDef {
            direction: direction.into(),
            to: to.into(),
        }
    }

    fn base_world() -> WorldDef {
        let mut entrance = room("entrance");
        entrance.exits = vec![exit("north", "library"), exit("east", "trap_room")];

        let mut library = room("library");
        library.exits = vec![exit("south", "entrance"), exit("north", "treasure_room")];
        library.reward = PuzzleReward::Key;
        library.puzzle = Some(PuzzleDef {
            question: "What grows when eaten?".into(),
            answer: "hunger".into(),
        });

        let mut trap_room = room("trap_room");
        trap_room.exits = vec![exit("west", "entrance")];
        trap_room.hazard = RoomHazard::Trap;

        let mut treasure_room = room("treasure_room");
        treasure_room.exits = vec![exit("south", "library")];
        treasure_room.vault = true;
        treasure_room.entry_requires = Some("rusty_key".into());
        treasure_room.items = vec!["treasure_chest".into()];

        WorldDef {
            game: GameDef {
                title: "Demo".into(),
                ..GameDef::default()
            },
            rooms: vec![entrance, library, trap_room, treasure_room],
        }
    }

    #[test]
    fn complete_world_passes() {
        assert_eq!(validate_world(&base_world()), Vec::new());
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let mut world = base_world();
        world.rooms.push(room("library"));

        let errors = validate_world(&world);
        assert!(
            errors
                .iter()
                .any(|err| matches!(err, ValidationError::DuplicateId { kind, id } if *kind == "room" && id == "library"))
        );
    }

    #[test]
    fn dangling_exits_are_reported() {
        let mut world = base_world();
        world.rooms[0].exits.push(exit("down", "cellar"));

        let errors = validate_world(&world);
        assert!(errors.iter().any(|err| matches!(err, ValidationError::MissingReference { kind, id, .. } if *kind == "room" && id == "cellar")));
    }

    #[test]
    fn missing_start_room_is_reported() {
        let mut world = base_world();
        world.game.start_room = "lobby".into();

        let errors = validate_world(&world);
        assert!(errors.iter().any(|err| matches!(err, ValidationError::MissingReference { id, .. } if id == "lobby")));
    }

    #[test]
    fn special_rooms_are_required() {
        let mut world = base_world();
        for room in &mut world.rooms {
            room.vault = false;
            room.hazard = RoomHazard::None;
            room.reward = PuzzleReward::Gem;
        }

        let errors = validate_world(&world);
        for role in ["treasure room", "trap room", "key-granting puzzle room"] {
            assert!(
                errors.contains(&ValidationError::MissingRoom { role }),
                "expected missing {role} in {errors:?}"
            );
        }
    }

    #[test]
    fn unreachable_vault_is_reported() {
        let mut world = base_world();
        world.rooms[1].exits.retain(|e| e.to != "treasure_room");

        let errors = validate_world(&world);
        assert!(errors.contains(&ValidationError::Unreachable {
            id: "treasure_room".into(),
            from: "entrance".into(),
        }));
    }

    #[test]
    fn duplicate_directions_are_invalid() {
        let mut world = base_world();
        world.rooms[2].exits.push(exit("west", "library"));

        let errors = validate_world(&world);
        assert!(errors.iter().any(|err| matches!(err, ValidationError::InvalidValue { .. })));
    }

    #[test]
    fn defaults_apply_when_deserializing() {
        let text = r#"(id: "hall", desc: "A hall.")"#;
        let room: RoomDef = ron::from_str(text).expect("room should parse");
        assert_eq!(room.reward, PuzzleReward::Gem);
        assert_eq!(room.hazard, RoomHazard::None);
        assert!(!room.vault);
        assert!(room.items.is_empty());
    }
}
