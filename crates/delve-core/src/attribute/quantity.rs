//! Item quantity scale

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// How many items a room holds, from none at all to an overflowing hoard.
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
pub enum Quantity {
    Zero = 0,

    #[default]
    One = 1,

    Couple = 2,

    Several = 3,

    Numerous = 4,

    Abundant = 5,
}

impl Quantity {
    /// All quantities, in ascending order
    pub const ALL: [Quantity; 6] = [
        Quantity::Zero,
        Quantity::One,
        Quantity::Couple,
        Quantity::Several,
        Quantity::Numerous,
        Quantity::Abundant,
    ];

    /// Check if this quantity produces any items at all
    pub const fn is_positive(self) -> bool {
        !matches!(self, Quantity::Zero)
    }
}
