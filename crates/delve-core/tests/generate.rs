//! End-to-end generation and rendering tests.

use proptest::prelude::*;

use delve_core::GenRng;
use delve_core::attribute::{Condition, FurnitureQuantity, Quantity, Rarity, RoomSize};
use delve_core::describe::{doorway_list, room_description_full, room_doorway_description};
use delve_core::door::{Direction, Door, DoorType};
use delve_core::error::ConfigError;
use delve_core::room::{
    Knob, ResolveOptions, RoomConfig, RoomType, generate_rooms, resolve_room_config,
};

fn valid_config() -> RoomConfig {
    RoomConfig {
        item_condition: Knob::Fixed(Condition::Average),
        item_quantity: Knob::Fixed(Quantity::Zero),
        item_rarity: Knob::Fixed(Rarity::Exotic),
        room_condition: Knob::Fixed(Condition::Average),
        room_count: Some(1),
        room_furniture_quantity: Knob::Fixed(FurnitureQuantity::None),
        room_size: Knob::Fixed(RoomSize::Medium),
        room_type: Knob::Fixed(RoomType::Room),
        ..RoomConfig::default()
    }
}

#[test]
fn generates_the_requested_number_of_rooms() {
    let mut rng = GenRng::new(100);
    let config = RoomConfig {
        room_count: Some(2),
        item_quantity: Knob::Fixed(Quantity::Couple),
        ..valid_config()
    };

    let rooms = generate_rooms(&config, &ResolveOptions::default(), &mut rng).unwrap();

    assert_eq!(rooms.len(), 2);
    for room in &rooms {
        assert!(room.settings.room_size.fixed().is_some());
        assert_eq!(room.item_set.total_count(), 2);
    }
}

#[test]
fn missing_required_fields_fail_in_declaration_order() {
    let mut rng = GenRng::new(101);
    let config = RoomConfig {
        room_condition: Knob::Unset,
        room_count: None,
        ..valid_config()
    };

    // room_condition outranks room_count in the error order
    assert_eq!(
        generate_rooms(&config, &ResolveOptions::default(), &mut rng),
        Err(ConfigError::MissingField {
            field: "room_condition",
            context: "generate_rooms",
        })
    );
}

#[test]
fn secret_doors_appear_in_the_list_but_not_the_narrative() {
    let doors = vec![Door::interior(DoorType::Secret, 2, Direction::East, 1)];

    let narrative = room_doorway_description(&doors, 2).unwrap();
    assert_eq!(narrative, None);

    let reference = doorway_list(&doors, 2).unwrap();
    assert!(reference.contains("<strong>East to Room 1 (<em>secret</em>)</strong>"));
}

#[test]
fn generated_rooms_render_identically_on_every_pass() {
    let mut rng = GenRng::new(102);
    let config = RoomConfig {
        item_quantity: Knob::Fixed(Quantity::Several),
        room_type: Knob::Fixed(RoomType::Library),
        ..valid_config()
    };

    let mut rooms = generate_rooms(&config, &ResolveOptions::default(), &mut rng).unwrap();
    let room = rooms.first_mut().unwrap();
    room.room_number = Some(1);

    let doors = vec![
        Door::interior(DoorType::Wooden, 1, Direction::North, 2).with_locked(true),
        Door::exterior(DoorType::Archway, 1, Direction::South),
    ];

    let first = room_description_full(room, Some(&doors)).unwrap();
    let second = room_description_full(room, Some(&doors)).unwrap();
    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn resolved_configs_hold_domain_values(
        seed in any::<u64>(),
        uniform_condition in any::<bool>(),
        uniform_rarity in any::<bool>(),
    ) {
        let mut rng = GenRng::new(seed);
        let options = ResolveOptions {
            uniform_item_condition: uniform_condition,
            uniform_item_rarity: uniform_rarity,
        };

        let resolved = resolve_room_config(&RoomConfig::random(), &options, &mut rng);

        prop_assert!(resolved.item_quantity.fixed().is_some());
        prop_assert!(resolved.room_condition.fixed().is_some());
        prop_assert!(resolved.room_furniture_quantity.fixed().is_some());
        prop_assert!(resolved.room_type.fixed().is_some());
        prop_assert!(resolved.room_size.fixed().is_some());

        prop_assert_eq!(resolved.item_condition.fixed().is_some(), uniform_condition);
        prop_assert_eq!(resolved.item_rarity.fixed().is_some(), uniform_rarity);
    }

    #[test]
    fn hallways_never_hold_numerous_items(seed in any::<u64>()) {
        let mut rng = GenRng::new(seed);
        let config = RoomConfig {
            room_type: Knob::Fixed(RoomType::Hallway),
            ..RoomConfig::random()
        };

        let resolved = resolve_room_config(&config, &ResolveOptions::default(), &mut rng);
        prop_assert_ne!(resolved.item_quantity.fixed(), Some(Quantity::Numerous));
    }

    #[test]
    fn resolved_sizes_are_legal_for_the_type(seed in any::<u64>(), index in 0usize..24) {
        let mut rng = GenRng::new(seed);
        let room_type = RoomType::ALL[index];
        let config = RoomConfig {
            room_type: Knob::Fixed(room_type),
            ..RoomConfig::random()
        };

        let resolved = resolve_room_config(&config, &ResolveOptions::default(), &mut rng);
        let size = resolved.room_size.fixed().unwrap();
        prop_assert!(room_type.sizes().contains(&size));
    }

    #[test]
    fn same_seed_generates_identical_rooms(seed in any::<u64>()) {
        let config = RoomConfig {
            room_count: Some(3),
            ..RoomConfig::random()
        };
        let options = ResolveOptions::default();

        let first = generate_rooms(&config, &options, &mut GenRng::new(seed)).unwrap();
        let second = generate_rooms(&config, &options, &mut GenRng::new(seed)).unwrap();
        prop_assert_eq!(first, second);
    }
}
