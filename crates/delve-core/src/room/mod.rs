//! Room configuration, resolution, and generation.

mod config;
mod generate;
mod room;
mod room_type;

pub use config::{DungeonConfig, Knob, ResolveOptions, RoomConfig, parse_domain_value};
pub use generate::{
    generate_dungeon_rooms, generate_rooms, map_dimensions, max_room_count, resolve_room_config,
    roll_room_size, roll_room_type,
};
pub use room::Room;
pub use room_type::RoomType;
