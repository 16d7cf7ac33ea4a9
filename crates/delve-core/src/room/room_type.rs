//! Room types and their compatibility tables.
//!
//! The type→size relation is static data, not behavior: each room type
//! carries the subset of sizes it may legally resolve to, which keeps a
//! closet-class type from ever rolling "massive".

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::attribute::RoomSize;

/// Room types.
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
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum RoomType {
    Armory,
    Atrium,
    Ballroom,
    Bathhouse,
    Bedroom,
    Chamber,
    Dining,
    Dormitory,
    GreatHall,
    Hallway,
    Kitchen,
    Laboratory,
    Library,
    Pantry,
    Parlour,
    Prison,
    /// Plain, unremarkable room
    #[default]
    Room,
    Shrine,
    Smithy,
    Storage,
    Study,
    Throne,
    Torture,
    Treasury,
}

impl RoomType {
    /// All room types for iteration
    pub const ALL: [RoomType; 24] = [
        RoomType::Armory,
        RoomType::Atrium,
        RoomType::Ballroom,
        RoomType::Bathhouse,
        RoomType::Bedroom,
        RoomType::Chamber,
        RoomType::Dining,
        RoomType::Dormitory,
        RoomType::GreatHall,
        RoomType::Hallway,
        RoomType::Kitchen,
        RoomType::Laboratory,
        RoomType::Library,
        RoomType::Pantry,
        RoomType::Parlour,
        RoomType::Prison,
        RoomType::Room,
        RoomType::Shrine,
        RoomType::Smithy,
        RoomType::Storage,
        RoomType::Study,
        RoomType::Throne,
        RoomType::Torture,
        RoomType::Treasury,
    ];

    /// Lowercase space-separated words of the tag
    pub const fn label(self) -> &'static str {
        match self {
            RoomType::Armory => "armory",
            RoomType::Atrium => "atrium",
            RoomType::Ballroom => "ballroom",
            RoomType::Bathhouse => "bathhouse",
            RoomType::Bedroom => "bedroom",
            RoomType::Chamber => "chamber",
            RoomType::Dining => "dining",
            RoomType::Dormitory => "dormitory",
            RoomType::GreatHall => "great hall",
            RoomType::Hallway => "hallway",
            RoomType::Kitchen => "kitchen",
            RoomType::Laboratory => "laboratory",
            RoomType::Library => "library",
            RoomType::Pantry => "pantry",
            RoomType::Parlour => "parlour",
            RoomType::Prison => "prison",
            RoomType::Room => "room",
            RoomType::Shrine => "shrine",
            RoomType::Smithy => "smithy",
            RoomType::Storage => "storage",
            RoomType::Study => "study",
            RoomType::Throne => "throne",
            RoomType::Torture => "torture",
            RoomType::Treasury => "treasury",
        }
    }

    /// Check if the rendered label keeps the literal word "room"
    pub const fn appends_room(self) -> bool {
        matches!(
            self,
            RoomType::Dining | RoomType::Storage | RoomType::Throne | RoomType::Torture
        )
    }

    /// Sizes this room type may legally resolve to
    pub const fn sizes(self) -> &'static [RoomSize] {
        use RoomSize::{Large, Massive, Medium, Small};

        match self {
            RoomType::Armory => &[Small, Medium, Large],
            RoomType::Atrium => &[Medium, Large, Massive],
            RoomType::Ballroom => &[Medium, Large, Massive],
            RoomType::Bathhouse => &[Small, Medium],
            RoomType::Bedroom => &[Small, Medium],
            RoomType::Chamber => &[Small, Medium, Large],
            RoomType::Dining => &[Medium, Large, Massive],
            RoomType::Dormitory => &[Medium, Large],
            RoomType::GreatHall => &[Large, Massive],
            RoomType::Hallway => &[Small, Medium],
            RoomType::Kitchen => &[Small, Medium, Large],
            RoomType::Laboratory => &[Medium, Large],
            RoomType::Library => &[Medium, Large, Massive],
            RoomType::Pantry => &[Small, Medium],
            RoomType::Parlour => &[Small, Medium],
            RoomType::Prison => &[Medium, Large, Massive],
            RoomType::Room => &[Small, Medium, Large, Massive],
            RoomType::Shrine => &[Small, Medium],
            RoomType::Smithy => &[Small, Medium],
            RoomType::Storage => &[Small, Medium, Large],
            RoomType::Study => &[Small, Medium],
            RoomType::Throne => &[Medium, Large, Massive],
            RoomType::Torture => &[Medium, Large],
            RoomType::Treasury => &[Small, Medium, Large],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_room_types_count() {
        assert_eq!(RoomType::ALL.len(), 24);
    }

    #[test]
    fn test_labels_are_lowercase_words() {
        for room_type in RoomType::ALL {
            let label = room_type.label();
            assert!(!label.is_empty());
            assert!(
                label
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c == ' '),
                "bad label: {label}"
            );
        }
        assert_eq!(RoomType::GreatHall.label(), "great hall");
    }

    #[test]
    fn test_append_room_subset() {
        assert!(RoomType::Dining.appends_room());
        assert!(RoomType::Storage.appends_room());
        assert!(RoomType::Throne.appends_room());
        assert!(RoomType::Torture.appends_room());

        assert!(!RoomType::Atrium.appends_room());
        assert!(!RoomType::GreatHall.appends_room());
        assert!(!RoomType::Room.appends_room());
    }

    #[test]
    fn test_every_type_has_legal_sizes() {
        for room_type in RoomType::ALL {
            assert!(!room_type.sizes().is_empty(), "{room_type} has no sizes");
        }
    }

    #[test]
    fn test_hallway_stays_narrow() {
        assert!(!RoomType::Hallway.sizes().contains(&RoomSize::Large));
        assert!(!RoomType::Hallway.sizes().contains(&RoomSize::Massive));
    }

    #[test]
    fn test_plain_room_allows_every_size() {
        assert_eq!(RoomType::Room.sizes(), &RoomSize::ALL);
    }
}
