#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const LABYRINTH_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod data_paths;
pub mod hazard;
pub mod item;
pub mod loader;
pub mod puzzle;
pub mod repl;
pub mod rng;
pub mod room;
pub mod state;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use loader::load_world;
pub use repl::{process_command, run_repl};
pub use room::Room;
pub use state::GameState;
pub use view::{View, ViewItem};
pub use world::{LabyrinthWorld, WorldError};
