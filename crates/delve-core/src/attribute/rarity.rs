//! Item rarity scale

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// How unusual a room's contents are.
///
/// Only the rarities past `Uncommon` are called out in prose; everything
/// else reads as "ordinary".
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Abundant = 0,

    Common = 1,

    #[default]
    Average = 2,

    Uncommon = 3,

    Rare = 4,

    Exotic = 5,

    Legendary = 6,
}

impl Rarity {
    /// All rarities, in ascending order
    pub const ALL: [Rarity; 7] = [
        Rarity::Abundant,
        Rarity::Common,
        Rarity::Average,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Exotic,
        Rarity::Legendary,
    ];

    /// Check if this rarity is explicitly indicated in prose
    pub const fn is_indicated(self) -> bool {
        matches!(self, Rarity::Rare | Rarity::Exotic | Rarity::Legendary)
    }
}
