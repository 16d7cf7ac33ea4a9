//! Furniture quantity scale

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::GenRng;

/// How much furniture a room holds. `None` produces no mention in prose.
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
pub enum FurnitureQuantity {
    #[default]
    None = 0,

    Minimum = 1,

    Sparse = 2,

    Average = 3,

    Furnished = 4,
}

impl FurnitureQuantity {
    /// All furniture quantities, in ascending order
    pub const ALL: [FurnitureQuantity; 5] = [
        FurnitureQuantity::None,
        FurnitureQuantity::Minimum,
        FurnitureQuantity::Sparse,
        FurnitureQuantity::Average,
        FurnitureQuantity::Furnished,
    ];

    /// Number of furnishing pieces placed for this level
    pub fn pieces(self, rng: &mut GenRng) -> u32 {
        match self {
            FurnitureQuantity::None => 0,
            FurnitureQuantity::Minimum => 1,
            FurnitureQuantity::Sparse => 2,
            FurnitureQuantity::Average => 3,
            FurnitureQuantity::Furnished => rng.range(4, 6),
        }
    }
}
