//! Configuration resolution and room generation.
//!
//! Resolution replaces `Random` placeholders with uniform draws while
//! explicit values pass through untouched. The one ordering requirement:
//! size resolves after type, because the legal sizes depend on the
//! resolved type.

use crate::GenRng;
use crate::attribute::{Condition, FurnitureQuantity, Quantity, Rarity, RoomSize};
use crate::error::ConfigError;
use crate::item::{ItemType, furnish};
use crate::room::{DungeonConfig, Knob, ResolveOptions, Room, RoomConfig, RoomType};

/// Rooms generated per point of dungeon complexity
const COMPLEXITY_ROOM_COUNT_MULTIPLIER: u32 = 6;

/// Grid-dimension multipliers per point of dungeon complexity
const COMPLEXITY_CELL_MIN_MULTIPLIER: u32 = 5;
const COMPLEXITY_CELL_MAX_MULTIPLIER: u32 = 6;

fn sample<T: Copy>(values: &[T], rng: &mut GenRng) -> T {
    values[rng.rn2(values.len() as u32) as usize]
}

/// Resolve a knob whose random path is gated behind a uniform flag.
fn resolve_gated<T: Copy>(knob: Knob<T>, uniform: bool, domain: &[T], rng: &mut GenRng) -> Knob<T> {
    match knob {
        Knob::Fixed(value) => Knob::Fixed(value),
        _ if uniform => Knob::Fixed(sample(domain, rng)),
        unresolved => unresolved,
    }
}

/// Resolve a room type, sampling uniformly unless pinned.
pub fn roll_room_type(knob: Knob<RoomType>, rng: &mut GenRng) -> RoomType {
    match knob {
        Knob::Fixed(room_type) => room_type,
        _ => sample(&RoomType::ALL, rng),
    }
}

/// Roll a size legal for the given room type.
pub fn roll_room_size(room_type: RoomType, rng: &mut GenRng) -> RoomSize {
    sample(room_type.sizes(), rng)
}

/// Resolve every placeholder in a room configuration.
///
/// Explicit values are authoritative. `item_condition` and `item_rarity`
/// stay unresolved unless their uniform flags are set, signalling per-item
/// resolution during furnishing. The hallway capacity cap fires after all
/// fields resolve, whether the quantity was rolled or authored.
pub fn resolve_room_config(
    config: &RoomConfig,
    options: &ResolveOptions,
    rng: &mut GenRng,
) -> RoomConfig {
    let room_type = roll_room_type(config.room_type, rng);
    let room_size = match config.room_size {
        Knob::Fixed(size) => size,
        _ => roll_room_size(room_type, rng),
    };

    let mut item_quantity = match config.item_quantity {
        Knob::Fixed(quantity) => quantity,
        _ => sample(&Quantity::ALL, rng),
    };

    // A hallway cannot physically host a numerous pile of items.
    if room_type == RoomType::Hallway && item_quantity == Quantity::Numerous {
        item_quantity = Quantity::Several;
    }

    let room_condition = match config.room_condition {
        Knob::Fixed(condition) => condition,
        _ => sample(&Condition::ALL, rng),
    };
    let room_furniture_quantity = match config.room_furniture_quantity {
        Knob::Fixed(furniture) => furniture,
        _ => sample(&FurnitureQuantity::ALL, rng),
    };
    let item_type = match config.item_type {
        Knob::Fixed(item_type) => item_type,
        _ => sample(&ItemType::ALL, rng),
    };

    RoomConfig {
        item_condition: resolve_gated(
            config.item_condition,
            options.uniform_item_condition,
            &Condition::ALL,
            rng,
        ),
        item_quantity: Knob::Fixed(item_quantity),
        item_rarity: resolve_gated(
            config.item_rarity,
            options.uniform_item_rarity,
            &Rarity::ALL,
            rng,
        ),
        item_type: Knob::Fixed(item_type),
        room_condition: Knob::Fixed(room_condition),
        room_count: config.room_count,
        room_furniture_quantity: Knob::Fixed(room_furniture_quantity),
        room_size: Knob::Fixed(room_size),
        room_type: Knob::Fixed(room_type),
    }
}

/// Generate `room_count` rooms, each independently resolved and furnished.
///
/// Fails naming the first missing required field, checked in order
/// `room_condition, room_count, room_size, room_type`. Rooms share no
/// state; numbering and placement belong to the map layout collaborator.
pub fn generate_rooms(
    config: &RoomConfig,
    options: &ResolveOptions,
    rng: &mut GenRng,
) -> Result<Vec<Room>, ConfigError> {
    const CONTEXT: &str = "generate_rooms";

    config.room_condition.require("room_condition", CONTEXT)?;
    let room_count = config.room_count.ok_or(ConfigError::MissingField {
        field: "room_count",
        context: CONTEXT,
    })?;
    config.room_size.require("room_size", CONTEXT)?;
    config.room_type.require("room_type", CONTEXT)?;

    let mut rooms = Vec::with_capacity(room_count as usize);
    for _ in 0..room_count {
        let settings = resolve_room_config(config, options, rng);
        let item_set = furnish(&settings, rng)?;

        rooms.push(Room {
            settings,
            room_number: None,
            size: None,
            item_set,
        });
    }

    Ok(rooms)
}

/// Room count derived from dungeon complexity
pub const fn max_room_count(complexity: u32) -> u32 {
    complexity * COMPLEXITY_ROOM_COUNT_MULTIPLIER
}

/// Roll the grid dimensions for a dungeon of the given complexity.
///
/// Consumed by the map layout collaborator; the engine itself never
/// touches the grid.
pub fn map_dimensions(complexity: u32, rng: &mut GenRng) -> (u32, u32) {
    let min = complexity * COMPLEXITY_CELL_MIN_MULTIPLIER;
    let max = complexity * COMPLEXITY_CELL_MAX_MULTIPLIER;

    (rng.range(min, max), rng.range(min, max))
}

/// Generate the rooms for a whole dungeon, deriving the room count from
/// the dungeon's complexity.
pub fn generate_dungeon_rooms(
    config: &DungeonConfig,
    options: &ResolveOptions,
    rng: &mut GenRng,
) -> Result<Vec<Room>, ConfigError> {
    let room_config = RoomConfig {
        room_count: Some(max_room_count(config.complexity)),
        ..config.room
    };

    generate_rooms(&room_config, options, rng)
}
