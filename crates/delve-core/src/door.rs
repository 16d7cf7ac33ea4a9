//! Doors, connections, and keys.
//!
//! The connectivity model is a data contract shared by the map layout
//! (producer) and the description engine (consumer). A door is a set of
//! connection legs keyed by room number: one leg per joined room, or a
//! single leg targeting [`OUTSIDE`] for doors on the dungeon boundary.
//! No graph traversal happens here; reachability is the layout's problem.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Identifier of a generated room. Real rooms are numbered from 1.
pub type RoomNumber = u32;

/// Reserved connection target for the dungeon exterior.
///
/// Never allocated to a real room, so target comparisons stay a single
/// equality check.
pub const OUTSIDE: RoomNumber = 0;

/// Compass heading of a connection leg, from the room's point of view.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All headings
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The heading seen from the other side of the door
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Capitalized heading for reference lists
    pub const fn title(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        }
    }
}

/// Door types.
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
pub enum DoorType {
    Archway,
    Brass,
    Concealed,
    Hole,
    Iron,
    Mechanical,
    Passageway,
    Portal,
    Portcullis,
    Secret,
    Steel,
    Stone,
    #[default]
    Wooden,
}

impl DoorType {
    /// All door types
    pub const ALL: [DoorType; 13] = [
        DoorType::Archway,
        DoorType::Brass,
        DoorType::Concealed,
        DoorType::Hole,
        DoorType::Iron,
        DoorType::Mechanical,
        DoorType::Passageway,
        DoorType::Portal,
        DoorType::Portcullis,
        DoorType::Secret,
        DoorType::Steel,
        DoorType::Stone,
        DoorType::Wooden,
    ];

    /// Check if this door type can carry a lock
    pub const fn is_lockable(self) -> bool {
        matches!(
            self,
            DoorType::Brass
                | DoorType::Iron
                | DoorType::Mechanical
                | DoorType::Portcullis
                | DoorType::Steel
                | DoorType::Stone
                | DoorType::Wooden
        )
    }

    /// Check if the rendered label appends the word "doorway"
    pub const fn appends_doorway(self) -> bool {
        matches!(
            self,
            DoorType::Brass
                | DoorType::Iron
                | DoorType::Mechanical
                | DoorType::Steel
                | DoorType::Stone
                | DoorType::Wooden
        )
    }

    /// Check if this door is hidden from narrative prose
    pub const fn is_hidden(self) -> bool {
        matches!(self, DoorType::Concealed | DoorType::Secret)
    }
}

/// One directed leg of a door, from a single room's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub direction: Direction,
    /// Target room number, or [`OUTSIDE`]
    pub to: RoomNumber,
}

impl Connection {
    /// Check if this leg leaves the dungeon
    pub const fn leads_outside(&self) -> bool {
        self.to == OUTSIDE
    }
}

/// A door joining two rooms, or a room and the exterior.
///
/// `size` is in door widths; 1 is a single door. The `BTreeMap` keeps legs
/// in ascending room-number order, which the renderers rely on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    pub door_type: DoorType,
    pub size: u32,
    pub locked: bool,
    pub connections: BTreeMap<RoomNumber, Connection>,
}

impl Door {
    /// Create an interior door between two rooms.
    ///
    /// `direction` is the heading as seen from `from`; the partner leg gets
    /// the opposite heading, keeping the two legs mutually consistent.
    pub fn interior(
        door_type: DoorType,
        from: RoomNumber,
        direction: Direction,
        to: RoomNumber,
    ) -> Self {
        let mut connections = BTreeMap::new();
        connections.insert(from, Connection { direction, to });
        connections.insert(
            to,
            Connection {
                direction: direction.opposite(),
                to: from,
            },
        );
        Self {
            door_type,
            size: 1,
            locked: false,
            connections,
        }
    }

    /// Create a door leading out of the dungeon, with a single leg.
    pub fn exterior(door_type: DoorType, from: RoomNumber, direction: Direction) -> Self {
        let mut connections = BTreeMap::new();
        connections.insert(
            from,
            Connection {
                direction,
                to: OUTSIDE,
            },
        );
        Self {
            door_type,
            size: 1,
            locked: false,
            connections,
        }
    }

    /// Widen the door
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Lock the door. Validity (lockable type) is checked at render time.
    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// Check if this door has a leg for the given room
    pub fn connects_to(&self, room_number: RoomNumber) -> bool {
        self.connections.contains_key(&room_number)
    }

    /// Get the leg for the given room
    pub fn connection_for(&self, room_number: RoomNumber) -> Option<&Connection> {
        self.connections.get(&room_number)
    }

    /// Check if any leg leaves the dungeon
    pub fn is_exterior(&self) -> bool {
        self.connections.values().any(Connection::leads_outside)
    }
}

/// A physical key, described by the pair of rooms its door joins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    pub door_type: DoorType,
    pub connections: BTreeMap<RoomNumber, Connection>,
}

impl Key {
    /// Create the key for a door, copying its legs
    pub fn for_door(door: &Door) -> Self {
        Self {
            door_type: door.door_type,
            connections: door.connections.clone(),
        }
    }

    /// Room numbers of the joined rooms, in ascending map order
    pub fn room_numbers(&self) -> Vec<RoomNumber> {
        self.connections.keys().copied().collect()
    }
}
