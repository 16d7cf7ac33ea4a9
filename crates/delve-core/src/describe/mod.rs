//! Description engine: resolved data in, prose and markup out.

mod html;
mod room;
mod text;

pub use room::{
    CELL_FEET, content_description, content_rarity_detail, doorway_description, doorway_list,
    furniture_detail, item_condition_description, key_description, key_detail, map_description,
    room_description, room_description_full, room_doorway_description, room_type_label,
};
pub use text::{an, capitalize, pluralize, sentence_list, title_case};
