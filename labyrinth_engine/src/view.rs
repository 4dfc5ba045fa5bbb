//! View module.
//! This contains the view to the game world / messages.
//! Rather than printing to the console from each handler, we'll aggregate needed information and messages
//! to be organized and displayed at the end of the turn.

mod icons;
mod render_action;
mod render_env;
mod render_system;
mod render_trig;
mod view_item;

pub use view_item::ViewItem;

use textwrap::termwidth;

use crate::style::GameStyle;

/// Top-level grouping of output within a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Transition,
    Environment,
    DirectResult,
    WorldResponse,
    Ambient,
    System,
}

/// A `ViewItem` plus the bookkeeping needed to order it within a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEntry {
    pub section: Section,
    pub priority: isize,
    pub view_item: ViewItem,
    pub sequence: usize,
}

/// View aggregates information to be displayed on each pass through the REPL and then organizes
/// and displays the result.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewEntry>,
    pub sequence: usize,
}
impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// Create a new empty view.
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
            sequence: 0,
        }
    }

    /// Queue a `ViewItem` for the next frame.
    pub fn push(&mut self, item: ViewItem) {
        self.items.push(ViewEntry {
            section: item.section(),
            priority: item.default_priority(),
            view_item: item,
            sequence: self.sequence,
        });
        self.sequence += 1;
    }

    /// Items queued for the current frame, in the order they were pushed.
    pub fn messages(&self) -> impl Iterator<Item = &ViewItem> {
        self.items.iter().map(|entry| &entry.view_item)
    }

    /// True if an identical item is queued for the current frame.
    pub fn contains(&self, item: &ViewItem) -> bool {
        self.messages().any(|queued| queued == item)
    }

    /// Compose and display all message contents in the current frame / turn.
    pub fn flush(&mut self) {
        if self.items.is_empty() {
            return;
        }
        // re-check terminal width in case it's been resized
        self.width = termwidth();

        let has = |section: Section| self.items.iter().any(|entry| entry.section == section);

        // Section Zero: Movement transition message, if any
        if has(Section::Transition) {
            render_env::transition(self);
        }
        // First Section: Environment / Frame of Reference
        if has(Section::Environment) {
            println!("{:.>width$}\n", "scene".section_style(), width = self.width);
            self.environment();
        }
        // Second Section: Messages not related to last command (random events)
        if has(Section::Ambient) {
            println!("{:.>width$}\n", "situation".section_style(), width = self.width);
            render_trig::ambient_event(self);
        }
        // Third Section: Immediate / direct results of player command
        if has(Section::DirectResult) {
            println!("{:.>width$}\n", "results".section_style(), width = self.width);
            self.direct_results();
        }
        // Fourth Section: Labyrinth reactions (traps, victory, defeat)
        if has(Section::WorldResponse) {
            println!("{:.>width$}\n", "responses".section_style(), width = self.width);
            self.world_reaction();
        }
        // Fifth Section: System Commands (help, quit etc)
        if has(Section::System) {
            println!("{:.>width$}\n", "game".section_style(), width = self.width);
            self.system();
        }

        // clear the buffer for the next turn
        self.items.clear();

        // create a little space before the next prompt
        println!();
    }

    // SECTION AGGREGATORS START HERE --------------------

    fn environment(&self) {
        render_env::room_description(self);
        render_env::room_item_list(self);
        render_env::room_exit_list(self);
        render_env::puzzle_notice(self);
    }

    fn direct_results(&self) {
        render_action::inventory(self);
        render_action::action_success(self);
        render_action::action_failure(self);
        render_action::errors(self);
    }

    /// Render world reaction-type entries in priority order (lowest value first).
    fn world_reaction(&self) {
        let entries = self.world_entries_sorted();
        for entry in entries {
            render_trig::world_entry(entry);
        }
    }

    /// Filter all `ViewEntry`s for this frame, retaining only those in the `WorldResponse` section and sort them
    /// by priority (lowest priority value shows first, e.g. 1 goes before 10, -10 goes before 1).
    fn world_entries_sorted(&self) -> Vec<&ViewEntry> {
        let mut world_entries: Vec<&ViewEntry> = self
            .items
            .iter()
            .filter(|entry| entry.section == Section::WorldResponse)
            .collect();
        world_entries.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.sequence.cmp(&b.sequence)));
        world_entries
    }

    fn system(&self) {
        render_system::show_help(self);
        render_system::engine_message(self);
        render_system::quit_summary(self);
    }
}
