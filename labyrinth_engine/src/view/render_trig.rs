//! module Render Trig(gered Events)
//!
//! This module contains the `ViewItem` renderers for events that are not (necessarily)
//! in response to a player command: random events after a move, traps springing, and
//! the endings of the game.

use colored::Colorize as _;
use textwrap::fill;

use crate::{
    View, ViewItem,
    style::{GameStyle as _, normal_block},
    view::ViewEntry,
    view::icons::{ICON_AMBIENT, ICON_CELEBRATE, ICON_DEATH, ICON_NEGATIVE, ICON_TRIGGER},
};

pub(super) fn ambient_event(view: &View) {
    for msg in view.messages().filter_map(|item| match item {
        ViewItem::AmbientEvent(msg) => Some(msg),
        _ => None,
    }) {
        let formatted = format!("{:<4}{}", ICON_AMBIENT.ambient_icon_style(), msg.ambient_trig_style());
        println!("{}", fill(formatted.as_str(), normal_block()));
        println!();
    }
}

/// Render a single world-response entry (already sorted by the caller).
pub(super) fn world_entry(entry: &ViewEntry) {
    let formatted = match &entry.view_item {
        ViewItem::TriggeredEvent(text) => {
            format!("{:<4}{}", ICON_TRIGGER.trig_icon_style(), text.triggered_style())
        },
        ViewItem::ItemLost(item) => format!(
            "{:<4}{}",
            ICON_NEGATIVE.bright_red(),
            format!("You lost: {}", item.item_style()).bright_red()
        ),
        ViewItem::PlayerDefeated(text) => format!("{:<4}{}", ICON_DEATH.red(), text.denied_style()),
        ViewItem::Victory(text) => format!("{:<4}{}", ICON_CELEBRATE.bright_blue(), text.bright_yellow().bold()),
        _ => return,
    };
    println!("{}", fill(formatted.as_str(), normal_block()));
    println!();
}
