//! module Render System
//!
//! This module contains the `ViewItem` renderers for system/engine messages,
//! such as help, the summary upon quitting, or other items related more to the
//! system than to the game content.

use colored::Colorize as _;
use textwrap::{fill, termwidth};

use crate::{
    View, ViewItem,
    style::{GameStyle as _, normal_block},
    view::icons::ICON_ENGINE,
};

/// Used for generic messages from the engine -- rare.
pub(super) fn engine_message(view: &View) {
    let engine_msgs: Vec<_> = view
        .messages()
        .filter_map(|item| match item {
            ViewItem::EngineMessage(msg) => Some(msg),
            _ => None,
        })
        .collect();
    for msg in &engine_msgs {
        println!("{}", fill(format!("{ICON_ENGINE:<4}{msg}").as_str(), normal_block()));
    }
    if !engine_msgs.is_empty() {
        println!();
    }
}

pub(super) fn show_help(view: &View) {
    if let Some(ViewItem::Help { basic_text, commands }) = view.messages().find(|item| item.is_help()) {
        // Print the basic help text with proper text wrapping
        println!("{}", fill(basic_text, normal_block()).italic().cyan());
        println!();

        println!("{}", "Commands:".bold().yellow());
        println!();
        for command in commands {
            let formatted_line = format!("{} - {}", command.command.bold().green(), command.description.italic());
            println!("{}", fill(&formatted_line, normal_block()));
        }
        println!();
    }
}

pub(super) fn quit_summary(view: &View) {
    if let Some(ViewItem::QuitSummary { steps, inventory }) = view.messages().find(|item| item.is_quit_summary()) {
        println!("{:^width$}", " THANKS FOR PLAYING ".black().on_yellow(), width = termwidth());
        println!("{:10} {}", "Steps:", steps);
        let carried = if inventory.is_empty() {
            "nothing".to_string()
        } else {
            inventory.join(", ")
        };
        println!("{:10} {}", "Carrying:", carried.item_style());
    }
}
