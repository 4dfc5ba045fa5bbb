//! Loader utilities for building a `LabyrinthWorld` from serialized data.
//!
//! Rooms come from the `WorldDef` (RON); help text is TOML-backed.

pub mod help;
pub mod worlddef;

use crate::data_paths::data_path;
use crate::loader::help::load_help_data;
use crate::loader::worlddef::{build_world_from_def, load_worlddef};

use crate::LabyrinthWorld;
use anyhow::{Context, Result, bail};
use labyrinth_data::WorldDef;
use log::info;

/// Load the `LabyrinthWorld` from the data directory.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or world validation.
pub fn load_world() -> Result<LabyrinthWorld> {
    let world_ron_path = data_path("world.ron");
    let help_basic_path = data_path("help_basic.txt");
    let help_commands_path = data_path("help_commands.toml");

    let worlddef = load_worlddef(&world_ron_path).context("while loading worlddef from file")?;
    validate_worlddef(&worlddef)?;
    let mut world = build_world_from_def(&worlddef).context("while building world from worlddef")?;
    info!("{} rooms added to LabyrinthWorld", world.rooms.len());

    world.help = load_help_data(&help_basic_path, &help_commands_path).context("while loading help data")?;
    info!("help loaded with {} commands", world.help.commands.len());

    Ok(world)
}

/// Validate the WorldDef and return a single aggregated error.
///
/// # Errors
/// - if `labyrinth_data::validate_world` reports any problem
pub fn validate_worlddef(def: &WorldDef) -> Result<()> {
    let errors = labyrinth_data::validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("worlddef validation failed:\n{details}");
}
