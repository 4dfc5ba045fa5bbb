//! ViewItem module
//!
//! A `ViewItem` is an enum variant sent to the `View`, which aggregates them, styles them,
//! organizes them, and displays them before moving to the next turn. Variants contain different
//! payloads, depending the type of information that needs to be displayed.

use variantly::Variantly;

use crate::loader::help::HelpCommand;
use crate::view::Section;

/// `ViewItems` are each of the various types of information / messages that may be displayed to the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    ActionFailure(String),
    ActionSuccess(String),
    AmbientEvent(String),
    EngineMessage(String),
    Error(String),
    Help {
        basic_text: String,
        commands: Vec<HelpCommand>,
    },
    Inventory(Vec<String>),
    ItemLost(String),
    PlayerDefeated(String),
    PuzzleNotice(String),
    QuitSummary {
        steps: u32,
        inventory: Vec<String>,
    },
    RoomDescription {
        name: String,
        description: String,
    },
    RoomExits(Vec<String>),
    RoomItems(Vec<String>),
    TransitionMessage(String),
    TriggeredEvent(String),
    Victory(String),
}
impl ViewItem {
    /// Classify a view item into a top-level output section.
    pub fn section(&self) -> Section {
        match self {
            ViewItem::RoomDescription { .. }
            | ViewItem::RoomItems(_)
            | ViewItem::RoomExits(_)
            | ViewItem::PuzzleNotice(_) => Section::Environment,
            ViewItem::ActionSuccess(_) | ViewItem::ActionFailure(_) | ViewItem::Error(_) | ViewItem::Inventory(_) => {
                Section::DirectResult
            },
            ViewItem::TriggeredEvent(_) | ViewItem::ItemLost(_) | ViewItem::PlayerDefeated(_) | ViewItem::Victory(_) => {
                Section::WorldResponse
            },
            ViewItem::AmbientEvent(_) => Section::Ambient,
            ViewItem::QuitSummary { .. } | ViewItem::EngineMessage(_) | ViewItem::Help { .. } => Section::System,
            ViewItem::TransitionMessage(_) => Section::Transition,
        }
    }

    pub fn default_priority(&self) -> isize {
        match &self {
            ViewItem::TriggeredEvent(_) => -30,
            ViewItem::ItemLost(_) => -20,
            ViewItem::PlayerDefeated(_) | ViewItem::Victory(_) => 100,
            _ => 0,
        }
    }
}
