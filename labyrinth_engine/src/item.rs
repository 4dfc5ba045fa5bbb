//! Item identifiers the engine gives special meaning to, and what using them does.
//!
//! Items are plain string ids that move between room item lists and the player's
//! inventory. Only a handful have behavior attached; everything else is scenery
//! the player can carry around.

pub const TORCH: &str = "torch";
pub const SWORD: &str = "sword";
pub const BRONZE_BOX: &str = "bronze_box";
pub const RUSTY_KEY: &str = "rusty_key";
pub const TREASURE_KEY: &str = "treasure_key";
pub const TREASURE_CHEST: &str = "treasure_chest";
pub const COIN: &str = "coin";
pub const GEM: &str = "gem";

/// What happens when the player uses an item they carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEffect {
    /// Light the torch (flavor only).
    LightTorch,
    /// Grip the sword (flavor only).
    WieldSword,
    /// Open the bronze box, which holds the rusty key.
    OpenBronzeBox,
    /// No defined use.
    Unknown,
}

impl ItemEffect {
    pub fn for_item(item: &str) -> Self {
        match item {
            TORCH => ItemEffect::LightTorch,
            SWORD => ItemEffect::WieldSword,
            BRONZE_BOX => ItemEffect::OpenBronzeBox,
            _ => ItemEffect::Unknown,
        }
    }
}

/// Items that can never be picked up, with the reason given to the player.
pub fn refuse_pickup(item: &str) -> Option<&'static str> {
    match item {
        TREASURE_CHEST => Some("You can't pick up the chest, it's far too heavy."),
        _ => None,
    }
}
