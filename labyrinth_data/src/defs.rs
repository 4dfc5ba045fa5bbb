use serde::{Deserialize, Serialize};

/// Stable identifier used across WorldDef references.
pub type Id = String;

/// Top-level world data loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
}

/// Game-level metadata and startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default = "default_start_room")]
    pub start_room: Id,
}

impl Default for GameDef {
    fn default() -> Self {
        Self {
            title: String::new(),
            intro: String::new(),
            start_room: default_start_room(),
        }
    }
}

fn default_start_room() -> Id {
    "entrance".to_string()
}

/// Room definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDef {
    pub id: Id,
    pub desc: String,
    #[serde(default)]
    pub exits: Vec<ExitDef>,
    #[serde(default)]
    pub items: Vec<Id>,
    #[serde(default)]
    pub puzzle: Option<PuzzleDef>,
    /// What solving this room's puzzle hands to the player.
    #[serde(default)]
    pub reward: PuzzleReward,
    #[serde(default)]
    pub hazard: RoomHazard,
    /// The chest-bearing treasure room; `solve` here opens the chest.
    #[serde(default)]
    pub vault: bool,
    /// Item the player must carry to walk into this room.
    #[serde(default)]
    pub entry_requires: Option<Id>,
}

/// A directed edge to another room, keyed by direction token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitDef {
    pub direction: String,
    pub to: Id,
}

/// Riddle attached to a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleDef {
    pub question: String,
    pub answer: String,
}

/// Reward granted when a room's puzzle is solved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleReward {
    /// Grants the treasure key (once).
    Key,
    /// Grants a gem.
    #[default]
    Gem,
}

/// Danger associated with a room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomHazard {
    /// Wrong answers and unlit random events spring a trap here.
    Trap,
    #[default]
    None,
}
