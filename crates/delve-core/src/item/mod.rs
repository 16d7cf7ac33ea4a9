//! Item furnishing.
//!
//! Turns a resolved room configuration into a concrete [`ItemSet`]: loose
//! items plus furnishing containers, with per-item condition and rarity
//! rolls for the fields the resolver deliberately left unresolved. The
//! description engine only ever reads the totals.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::GenRng;
use crate::attribute::{Condition, Quantity, Rarity};
use crate::error::ConfigError;
use crate::room::{Knob, RoomConfig};

/// Item categories.
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
pub enum ItemType {
    Ammo,
    Armor,
    Clothing,
    Coin,
    Container,
    Food,
    Furnishing,
    Liquid,
    #[default]
    Miscellaneous,
    Mysterious,
    Mystic,
    Potion,
    Scroll,
    Tool,
    Treasure,
    Trinket,
    Weapon,
}

impl ItemType {
    /// All item types
    pub const ALL: [ItemType; 17] = [
        ItemType::Ammo,
        ItemType::Armor,
        ItemType::Clothing,
        ItemType::Coin,
        ItemType::Container,
        ItemType::Food,
        ItemType::Furnishing,
        ItemType::Liquid,
        ItemType::Miscellaneous,
        ItemType::Mysterious,
        ItemType::Mystic,
        ItemType::Potion,
        ItemType::Scroll,
        ItemType::Tool,
        ItemType::Treasure,
        ItemType::Trinket,
        ItemType::Weapon,
    ];
}

/// A concrete item stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub item_type: ItemType,
    pub condition: Condition,
    pub rarity: Rarity,
    pub count: u32,
}

/// A furnishing that can hold items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub item_type: ItemType,
    pub count: u32,
    pub contents: Vec<Item>,
}

/// Everything placed in one room.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemSet {
    pub items: Vec<Item>,
    pub containers: Vec<Container>,
}

impl ItemSet {
    /// Total count of loose items
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.count).sum()
    }

    /// Total count of containers
    pub fn container_count(&self) -> u32 {
        self.containers.iter().map(|container| container.count).sum()
    }

    /// Total count of items held inside containers
    pub fn content_count(&self) -> u32 {
        self.containers
            .iter()
            .flat_map(|container| &container.contents)
            .map(|item| item.count)
            .sum()
    }

    /// Total count across items, containers, and container contents
    pub fn total_count(&self) -> u32 {
        self.item_count() + self.container_count() + self.content_count()
    }
}

/// Number of item stacks for a resolved quantity
fn item_count(quantity: Quantity, rng: &mut GenRng) -> u32 {
    match quantity {
        Quantity::Zero => 0,
        Quantity::One => 1,
        Quantity::Couple => 2,
        Quantity::Several => rng.range(3, 4),
        Quantity::Numerous => rng.range(5, 8),
        Quantity::Abundant => rng.range(9, 14),
    }
}

fn roll_item(settings: &RoomConfig, rng: &mut GenRng) -> Item {
    let item_type = match settings.item_type {
        Knob::Fixed(item_type) => item_type,
        _ => ItemType::ALL[rng.rn2(ItemType::ALL.len() as u32) as usize],
    };
    // Deferred fields roll per item; uniform fields were pinned by the resolver.
    let condition = match settings.item_condition {
        Knob::Fixed(condition) => condition,
        _ => Condition::ALL[rng.rn2(Condition::ALL.len() as u32) as usize],
    };
    let rarity = match settings.item_rarity {
        Knob::Fixed(rarity) => rarity,
        _ => Rarity::ALL[rng.rn2(Rarity::ALL.len() as u32) as usize],
    };

    Item {
        item_type,
        condition,
        rarity,
        count: 1,
    }
}

/// Furnish a room from its resolved settings.
///
/// Fails when `item_quantity` or `room_furniture_quantity` never resolved;
/// producing an arbitrary item count would misrepresent the configuration.
pub fn furnish(settings: &RoomConfig, rng: &mut GenRng) -> Result<ItemSet, ConfigError> {
    let quantity = settings
        .item_quantity
        .fixed()
        .ok_or(ConfigError::InvalidField {
            field: "item_quantity",
            context: "furnish",
        })?;
    let furniture = settings
        .room_furniture_quantity
        .fixed()
        .ok_or(ConfigError::InvalidField {
            field: "room_furniture_quantity",
            context: "furnish",
        })?;

    let mut containers: Vec<Container> = (0..furniture.pieces(rng))
        .map(|_| Container {
            item_type: ItemType::Furnishing,
            count: 1,
            contents: Vec::new(),
        })
        .collect();

    let mut items = Vec::new();
    for _ in 0..item_count(quantity, rng) {
        let item = roll_item(settings, rng);

        // A third of the loot ends up inside furnishings, when there are any.
        if !containers.is_empty() && rng.one_in(3) {
            let slot = rng.rn2(containers.len() as u32) as usize;
            containers[slot].contents.push(item);
        } else {
            items.push(item);
        }
    }

    Ok(ItemSet { items, containers })
}
