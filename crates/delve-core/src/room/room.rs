//! Generated room record

use serde::{Deserialize, Serialize};

use crate::door::RoomNumber;
use crate::item::ItemSet;
use crate::room::RoomConfig;

/// A generated room.
///
/// Produced by [`generate_rooms`](crate::room::generate_rooms) with no
/// number or grid placement; the map layout collaborator fills those in.
/// Immutable once rendered; every render call is a pure read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Fully resolved settings this room was furnished from
    pub settings: RoomConfig,
    /// Assigned by map layout; rooms are numbered from 1
    pub room_number: Option<RoomNumber>,
    /// Grid footprint in cells, `[width, height]`
    pub size: Option<[u32; 2]>,
    pub item_set: ItemSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_room_is_unplaced() {
        let room = Room {
            settings: RoomConfig::default(),
            room_number: None,
            size: None,
            item_set: ItemSet::default(),
        };
        assert!(room.room_number.is_none());
        assert!(room.size.is_none());
    }
}
