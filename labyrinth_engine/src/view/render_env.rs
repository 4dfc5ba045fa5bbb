//! # Render Env(ironment) Module
//!
//! This module contains the individual `ViewItem` renderers for the "environment" section
//! of an output frame.

use textwrap::fill;

use crate::{
    View, ViewItem,
    style::{GameStyle as _, indented_block, normal_block},
    view::icons::ICON_PUZZLE,
};

/// Message shown while moving between rooms, e.g. unlocking a door.
pub(super) fn transition(view: &View) {
    for msg in view.messages().filter_map(|item| match item {
        ViewItem::TransitionMessage(msg) => Some(msg),
        _ => None,
    }) {
        println!("\n{}", fill(msg.as_str(), normal_block()).transition_style());
    }
}

/// Used by `flush()` to show base room description
pub(super) fn room_description(view: &View) {
    if let Some(ViewItem::RoomDescription { name, description }) = view
        .messages()
        .find(|item| matches!(item, ViewItem::RoomDescription { .. }))
    {
        println!("{:^width$}", format!("== {name} ==").room_titlebar_style(), width = view.width);
        println!("{}", fill(description, normal_block()).description_style());
        println!();
    }
}

pub(super) fn room_item_list(view: &View) {
    if let Some(ViewItem::RoomItems(items)) = view.messages().find(|item| item.is_room_items()) {
        println!("{}", "Notable items:".subheading_style());
        for item in items {
            println!("   - {}", item.item_style());
        }
        println!();
    }
}

pub(super) fn room_exit_list(view: &View) {
    if let Some(ViewItem::RoomExits(exits)) = view.messages().find(|item| item.is_room_exits()) {
        println!("{}", "Exits:".subheading_style());
        if exits.is_empty() {
            println!("   {}", "none".denied_style());
        }
        for direction in exits {
            println!("   - {}", direction.exit_style());
        }
        println!();
    }
}

pub(super) fn puzzle_notice(view: &View) {
    for notice in view.messages().filter_map(|item| match item {
        ViewItem::PuzzleNotice(text) => Some(text),
        _ => None,
    }) {
        let formatted = format!("{ICON_PUZZLE:<4}{notice}");
        println!("{}", fill(&formatted, indented_block()).overlay_style());
    }
}
