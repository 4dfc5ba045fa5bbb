//! module Render Action
//!
//! This module contains the individual `ViewItem` renderers direct responses to action
//! commands -- successes, failures, and errors.

use colored::Colorize as _;
use textwrap::fill;

use crate::{
    View, ViewItem,
    style::{GameStyle as _, normal_block},
    view::icons::{ICON_ERROR, ICON_FAILURE, ICON_SUCCESS},
};

pub(super) fn inventory(view: &View) {
    if let Some(ViewItem::Inventory(items)) = view.messages().find(|item| item.is_inventory()) {
        println!("{}:", "Inventory".subheading_style());
        if items.is_empty() {
            println!("   {}", "Your inventory is empty.".italic().dimmed());
        } else {
            for item in items {
                println!("   - {}", item.item_style());
            }
        }
        println!();
    }
}

pub(super) fn action_success(view: &View) {
    let messages: Vec<_> = view
        .messages()
        .filter_map(|item| match item {
            ViewItem::ActionSuccess(msg) => Some(msg),
            _ => None,
        })
        .collect();
    for msg in messages {
        println!(
            "{}",
            fill(
                format!("{} {}", ICON_SUCCESS.bright_green(), msg).as_str(),
                normal_block()
            )
        );
    }
}

pub(super) fn action_failure(view: &View) {
    let messages: Vec<_> = view
        .messages()
        .filter_map(|item| match item {
            ViewItem::ActionFailure(msg) => Some(msg),
            _ => None,
        })
        .collect();
    for msg in messages {
        println!(
            "{}",
            fill(
                format!("{} {}", ICON_FAILURE.bright_red(), msg).as_str(),
                normal_block()
            )
        );
    }
}

pub(super) fn errors(view: &View) {
    let messages: Vec<_> = view
        .messages()
        .filter_map(|item| match item {
            ViewItem::Error(msg) => Some(msg),
            _ => None,
        })
        .collect();
    for msg in messages {
        println!(
            "{}",
            fill(
                format!("{:<4}{}", ICON_ERROR.error_icon_style(), msg).as_str(),
                normal_block()
            )
        );
    }
}
