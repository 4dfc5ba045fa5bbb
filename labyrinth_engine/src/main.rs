#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Labyrinth **
//! Treasure-hunting text adventure

use labyrinth_engine::repl::InputManager;
use labyrinth_engine::style::{GameStyle, normal_block};
use labyrinth_engine::{LABYRINTH_VERSION, load_world, run_repl};

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use textwrap::fill;

use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: labyrinth v{LABYRINTH_VERSION}, loading world...");
    let mut world = load_world().context("while loading LabyrinthWorld")?;
    info!("LabyrinthWorld loaded successfully.");

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush().context("while clearing the screen")?;
    info!("Starting the game!");

    println!("{:^84}", world.title.to_uppercase().bright_yellow().underline());
    println!();
    println!("{}", fill(&world.intro, normal_block()).description_style());

    let mut input = InputManager::new();
    let state = run_repl(&mut world, &mut input)?;
    info!(
        "game ended after {} steps carrying {:?}",
        state.steps_taken, state.inventory
    );
    Ok(())
}
