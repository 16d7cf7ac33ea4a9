//! Room size scale

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Interior size of a room.
///
/// Which sizes are legal for a given room type comes from
/// [`RoomType::sizes`](crate::room::RoomType::sizes).
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
pub enum RoomSize {
    Small = 0,

    #[default]
    Medium = 1,

    Large = 2,

    Massive = 3,
}

impl RoomSize {
    /// All sizes, in ascending order
    pub const ALL: [RoomSize; 4] = [
        RoomSize::Small,
        RoomSize::Medium,
        RoomSize::Large,
        RoomSize::Massive,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(RoomSize::Small < RoomSize::Medium);
        assert!(RoomSize::Large < RoomSize::Massive);
    }

    #[test]
    fn test_display() {
        assert_eq!(RoomSize::Medium.to_string(), "medium");
        assert_eq!(RoomSize::Massive.to_string(), "massive");
    }
}
