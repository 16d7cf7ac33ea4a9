//! Room and dungeon configuration records.
//!
//! Configuration fields are [`Knob`]s: unset, deferred to the dice, or
//! pinned to a concrete value. The resolver replaces placeholders with
//! concrete values; explicit values are authoritative and pass through
//! untouched.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::attribute::{Condition, FurnitureQuantity, Quantity, Rarity, RoomSize};
use crate::error::{ConfigError, DomainViolation};
use crate::item::ItemType;
use crate::room::RoomType;

/// A configuration field that may be unset, random, or pinned.
///
/// `Unset` models an absent field and is distinct from `Random`, the
/// resolution placeholder; only `Fixed` values survive resolution (except
/// where per-item resolution is deliberately deferred).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Knob<T> {
    #[default]
    Unset,
    Random,
    Fixed(T),
}

impl<T: Copy> Knob<T> {
    /// Get the pinned value, if any
    pub fn fixed(self) -> Option<T> {
        match self {
            Knob::Fixed(value) => Some(value),
            _ => None,
        }
    }

    /// Check if the field is absent
    pub fn is_unset(self) -> bool {
        matches!(self, Knob::Unset)
    }

    /// Fail with a [`ConfigError::MissingField`] when the field is absent
    pub fn require(
        self,
        field: &'static str,
        context: &'static str,
    ) -> Result<Knob<T>, ConfigError> {
        match self {
            Knob::Unset => Err(ConfigError::MissingField { field, context }),
            other => Ok(other),
        }
    }
}

impl<T> Knob<T>
where
    T: FromStr<Err = strum::ParseError>,
{
    /// Parse a knob from a domain word, accepting the literal `"random"`.
    pub fn parse(domain: &'static str, value: &str) -> Result<Knob<T>, DomainViolation> {
        if value == "random" {
            return Ok(Knob::Random);
        }
        parse_domain_value(domain, value).map(Knob::Fixed)
    }
}

/// Parse a concrete domain value, reporting a [`DomainViolation`] on failure.
pub fn parse_domain_value<T>(domain: &'static str, value: &str) -> Result<T, DomainViolation>
where
    T: FromStr<Err = strum::ParseError>,
{
    T::from_str(value).map_err(|_| DomainViolation {
        domain,
        value: value.to_string(),
    })
}

/// Per-room configuration, possibly holding unresolved placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoomConfig {
    pub item_condition: Knob<Condition>,
    pub item_quantity: Knob<Quantity>,
    pub item_rarity: Knob<Rarity>,
    pub item_type: Knob<ItemType>,
    pub room_condition: Knob<Condition>,
    pub room_count: Option<u32>,
    pub room_furniture_quantity: Knob<FurnitureQuantity>,
    pub room_size: Knob<RoomSize>,
    pub room_type: Knob<RoomType>,
}

impl RoomConfig {
    /// A fully random configuration for a single room
    pub fn random() -> Self {
        Self {
            item_condition: Knob::Random,
            item_quantity: Knob::Random,
            item_rarity: Knob::Random,
            item_type: Knob::Random,
            room_condition: Knob::Random,
            room_count: Some(1),
            room_furniture_quantity: Knob::Random,
            room_size: Knob::Random,
            room_type: Knob::Random,
        }
    }
}

/// Dungeon-wide configuration: the embedded room fields follow the same
/// resolution rules; the remaining knobs belong to the map layout
/// collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonConfig {
    pub room: RoomConfig,
    /// Scales room count and grid dimensions
    pub complexity: u32,
    /// Percent chance of extra connecting corridors
    pub connections: u32,
    /// Number of treasure maps to place
    pub maps: u32,
    /// Number of traps to place
    pub traps: u32,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            room: RoomConfig::random(),
            complexity: 5,
            connections: 12,
            maps: 2,
            traps: 4,
        }
    }
}

/// Flags controlling how `"random"` item fields resolve.
///
/// When a flag is off, the matching field stays unresolved and each item
/// rolls its own value during furnishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResolveOptions {
    pub uniform_item_condition: bool,
    pub uniform_item_rarity: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knob_defaults_to_unset() {
        let knob: Knob<Quantity> = Knob::default();
        assert!(knob.is_unset());
        assert_eq!(knob.fixed(), None);
    }

    #[test]
    fn test_knob_require() {
        let unset: Knob<Quantity> = Knob::Unset;
        assert_eq!(
            unset.require("item_quantity", "somewhere"),
            Err(ConfigError::MissingField {
                field: "item_quantity",
                context: "somewhere",
            })
        );

        let random: Knob<Quantity> = Knob::Random;
        assert_eq!(
            random.require("item_quantity", "somewhere"),
            Ok(Knob::Random)
        );
    }

    #[test]
    fn test_knob_parse() {
        assert_eq!(
            Knob::<Quantity>::parse("item_quantity", "random"),
            Ok(Knob::Random)
        );
        assert_eq!(
            Knob::<Quantity>::parse("item_quantity", "couple"),
            Ok(Knob::Fixed(Quantity::Couple))
        );
        assert_eq!(
            Knob::<Quantity>::parse("item_quantity", "bazillion"),
            Err(DomainViolation {
                domain: "item_quantity",
                value: "bazillion".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_domain_value_kebab_case() {
        assert_eq!(
            parse_domain_value::<RoomType>("room_type", "great-hall"),
            Ok(RoomType::GreatHall)
        );
        assert!(parse_domain_value::<RoomType>("room_type", "greatHall").is_err());
    }

    #[test]
    fn test_random_config_pins_nothing() {
        let config = RoomConfig::random();
        assert_eq!(config.room_type.fixed(), None);
        assert_eq!(config.room_count, Some(1));
    }
}
