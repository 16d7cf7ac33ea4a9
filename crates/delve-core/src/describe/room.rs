//! Room, doorway, and key description rendering.
//!
//! Pure functions from resolved data to prose and HTML fragments. The
//! narrative view hides secret and concealed doors; the reference lists
//! include everything and emphasize what the players must not see.

use crate::attribute::{FurnitureQuantity, Quantity, Rarity, RoomSize};
use crate::describe::html::{element, unordered_list};
use crate::describe::text::{an, capitalize, pluralize, sentence_list, title_case};
use crate::door::{Connection, Door, DoorType, Key, RoomNumber};
use crate::error::ConfigError;
use crate::room::{Knob, Room, RoomConfig, RoomType};

/// Feet per map grid cell
pub const CELL_FEET: u32 = 5;

/// Label for a room type: lowercase words, keeping the literal word
/// "room" for the types that read wrong without it.
pub fn room_type_label(room_type: RoomType) -> String {
    if room_type.appends_room() {
        format!("{} room", room_type.label())
    } else {
        room_type.label().to_string()
    }
}

/// Rarity qualifier for room contents.
///
/// An unresolved rarity yields nothing (each item told its own story);
/// un-indicated rarities all read as "ordinary".
pub fn content_rarity_detail(rarity: Knob<Rarity>) -> String {
    match rarity {
        Knob::Random => String::new(),
        Knob::Fixed(rarity) if rarity.is_indicated() => rarity.to_string(),
        _ => "ordinary".to_string(),
    }
}

/// Furniture phrase, empty for `None`.
pub fn furniture_detail(furniture: FurnitureQuantity) -> &'static str {
    match furniture {
        FurnitureQuantity::None => "",
        FurnitureQuantity::Minimum => "minimal furnishings",
        FurnitureQuantity::Sparse => "sparsely placed furniture",
        FurnitureQuantity::Average => "some furniture",
        FurnitureQuantity::Furnished => "plenty of furniture",
    }
}

/// Condition sentence for room contents, when there is anything to
/// qualify and the condition is remarkable.
pub fn item_condition_description(config: &RoomConfig) -> Option<String> {
    let quantity = config.item_quantity.fixed()?;
    if !quantity.is_positive() {
        return None;
    }

    match config.item_condition {
        Knob::Fixed(condition) if condition.is_notable() => {
            Some(format!("The items within are in {condition} condition"))
        }
        _ => None,
    }
}

fn quantity_phrase(quantity: Quantity, noun: &str) -> String {
    match quantity {
        Quantity::Zero => String::new(),
        Quantity::One => an(&format!("single {noun}")),
        Quantity::Couple => format!("a couple of {}", pluralize(noun)),
        Quantity::Several => format!("several {}", pluralize(noun)),
        Quantity::Numerous => format!("numerous {}", pluralize(noun)),
        Quantity::Abundant => format!("an abundance of {}", pluralize(noun)),
    }
}

/// Sentence describing what a room contains.
///
/// Needs a concrete room type and item quantity; a zero quantity has
/// nothing to say.
pub fn content_description(config: &RoomConfig) -> Result<Option<String>, ConfigError> {
    const CONTEXT: &str = "content_description";

    let room_type = match config.room_type {
        Knob::Fixed(room_type) => room_type,
        Knob::Unset => {
            return Err(ConfigError::MissingField {
                field: "room_type",
                context: CONTEXT,
            });
        }
        Knob::Random => {
            return Err(ConfigError::InvalidField {
                field: "room_type",
                context: CONTEXT,
            });
        }
    };
    let quantity = config
        .item_quantity
        .fixed()
        .ok_or(ConfigError::InvalidField {
            field: "item_quantity",
            context: CONTEXT,
        })?;

    if !quantity.is_positive() {
        return Ok(None);
    }

    let rarity = content_rarity_detail(config.item_rarity);
    let noun = if rarity.is_empty() {
        "item".to_string()
    } else {
        format!("{rarity} item")
    };

    let mut sentence = format!(
        "The {} contains {}",
        room_type_label(room_type),
        quantity_phrase(quantity, &noun)
    );

    if let Knob::Fixed(furniture) = config.room_furniture_quantity
        && furniture != FurnitureQuantity::None
    {
        sentence.push_str(&format!(" amongst {}", furniture_detail(furniture)));
    }

    Ok(Some(sentence))
}

/// Topical sentence for a room: size, emptiness, type, and any
/// remarkable condition.
pub fn room_description(config: &RoomConfig) -> String {
    let noun = room_type_label(config.room_type.fixed().unwrap_or(RoomType::Room));

    let mut qualifiers = Vec::new();
    if let Some(size) = config.room_size.fixed() {
        qualifiers.push(match size {
            RoomSize::Medium => "medium sized".to_string(),
            other => other.to_string(),
        });
    }
    if config.item_quantity.fixed() == Some(Quantity::Zero) {
        qualifiers.push("empty".to_string());
    }
    qualifiers.push(noun);

    let mut sentence = format!("You enter {}", an(&qualifiers.join(" ")));

    if let Knob::Fixed(condition) = config.room_condition
        && condition.is_notable()
    {
        sentence.push_str(&format!(" in {condition} condition"));
    }

    sentence
}

/// Noun phrase for a doorway, without an article.
///
/// Fails for a locked door of a non-lockable type; that door cannot
/// exist and must not be described.
pub fn doorway_description(door: &Door) -> Result<String, ConfigError> {
    if door.locked && !door.door_type.is_lockable() {
        return Err(ConfigError::NonLockableLocked {
            door_type: door.door_type,
        });
    }

    let mut parts = Vec::new();
    if door.locked {
        parts.push("locked".to_string());
    }

    match door.size {
        2 if door.door_type.appends_doorway() => parts.push("double wide".to_string()),
        2 => parts.push("wide".to_string()),
        3 => parts.push("large".to_string()),
        size if size > 3 => parts.push("massive".to_string()),
        _ => {}
    }

    parts.push(door.door_type.to_string());
    if door.door_type.appends_doorway() {
        parts.push("doorway".to_string());
    }

    Ok(parts.join(" "))
}

/// Label for the key that opens a door of the given type.
pub fn key_detail(door_type: DoorType) -> String {
    match door_type {
        DoorType::Mechanical => "Mechanical leaver".to_string(),
        lockable if lockable.is_lockable() => {
            format!("{} key", capitalize(&lockable.to_string()))
        }
        _ => "Key".to_string(),
    }
}

fn leads_clause(connection: &Connection) -> String {
    if connection.leads_outside() {
        format!("leads {} out of the dungeon", connection.direction)
    } else {
        format!("leads {}", connection.direction)
    }
}

/// Collect each door's leg for the given room, failing on a door that
/// does not connect to it.
fn connections_for<'a>(
    doors: &'a [Door],
    room_number: RoomNumber,
) -> Result<Vec<(&'a Door, &'a Connection)>, ConfigError> {
    doors
        .iter()
        .map(|door| {
            door.connection_for(room_number)
                .map(|connection| (door, connection))
                .ok_or(ConfigError::NoRoomConnection { room_number })
        })
        .collect()
}

/// Narrative sentence describing a room's visible doorways.
///
/// Secret and concealed doors are never spoken aloud; if nothing visible
/// remains there is no sentence at all.
pub fn room_doorway_description(
    doors: &[Door],
    room_number: RoomNumber,
) -> Result<Option<String>, ConfigError> {
    let visible: Vec<_> = connections_for(doors, room_number)?
        .into_iter()
        .filter(|(door, _)| !door.door_type.is_hidden())
        .collect();

    if visible.is_empty() {
        return Ok(None);
    }

    let single = visible.len() == 1;
    let clauses = visible
        .into_iter()
        .map(|(door, connection)| {
            let mut noun = doorway_description(door)?;
            if single {
                noun = format!("single {noun}");
            }
            Ok(format!("{} {}", an(&noun), leads_clause(connection)))
        })
        .collect::<Result<Vec<_>, ConfigError>>()?;

    Ok(Some(capitalize(&sentence_list(&clauses))))
}

/// Reference list of every doorway connected to a room, hidden doors
/// included and emphasized.
pub fn doorway_list(doors: &[Door], room_number: RoomNumber) -> Result<String, ConfigError> {
    let connected = connections_for(doors, room_number)?;

    let items: Vec<String> = connected
        .into_iter()
        .map(|(door, connection)| {
            let destination = if connection.leads_outside() {
                format!("{} leading out of the dungeon", connection.direction.title())
            } else {
                format!("{} to Room {}", connection.direction.title(), connection.to)
            };
            let entry = format!(
                "{} ({})",
                destination,
                element("em", &door.door_type.to_string())
            );

            if door.door_type.is_hidden() {
                element("strong", &entry)
            } else {
                entry
            }
        })
        .collect();

    Ok(format!(
        "{}{}",
        element("h3", &format!("Doorways ({})", items.len())),
        unordered_list(&items)
    ))
}

/// Reference list of keys, one item per key, naming the joined rooms in
/// their natural map order.
pub fn key_description(keys: &[Key]) -> String {
    let items: Vec<String> = keys
        .iter()
        .map(|key| {
            let rooms = key
                .room_numbers()
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(" / ");

            format!("{} to room {}", key_detail(key.door_type), rooms)
        })
        .collect();

    format!(
        "{}{}",
        element("h3", &format!("Keys ({})", keys.len())),
        unordered_list(&items)
    )
}

/// Placeholder map reference block; fixed shape, single item.
pub fn map_description() -> String {
    format!(
        "{}{}",
        element("h3", "Map"),
        unordered_list(&["Map of the dungeon".to_string()])
    )
}

fn dimensions_description(size: [u32; 2]) -> String {
    let [width, height] = size;
    format!("{} x {} feet", width * CELL_FEET, height * CELL_FEET)
}

/// Full room description: header with title and dimensions, then the
/// composed body paragraph.
pub fn room_description_full(room: &Room, doors: Option<&[Door]>) -> Result<String, ConfigError> {
    let settings = &room.settings;
    let room_count = settings.room_count.unwrap_or(1);

    let mut title = "Room".to_string();
    if let Some(number) = room.room_number
        && room_count > 1
    {
        title.push_str(&format!(" {number}"));
    }
    if let Some(room_type) = settings.room_type.fixed()
        && room_type != RoomType::Room
    {
        title.push_str(&format!(" - {}", title_case(&room_type_label(room_type))));
    }

    let dimensions = room
        .size
        .map(|size| element("span", &dimensions_description(size)))
        .unwrap_or_default();
    let header = element("header", &format!("{}{dimensions}", element("h2", &title)));

    let mut sentences = vec![room_description(settings)];
    if let Some(content) = content_description(settings)? {
        sentences.push(content);
    }
    if let Some(condition) = item_condition_description(settings) {
        sentences.push(condition);
    }
    if let (Some(doors), Some(number)) = (doors, room.room_number)
        && let Some(doorways) = room_doorway_description(doors, number)?
    {
        sentences.push(doorways);
    }

    Ok(format!(
        "{header}{}{}",
        element("h3", "Description"),
        element("p", &format!("{}.", sentences.join(". ")))
    ))
}
