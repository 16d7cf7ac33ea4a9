//! delve: generate furnished dungeon rooms and describe them.
//!
//! Thin CLI over `delve-core`: parses knob words, resolves and generates
//! rooms, and prints narrative prose, HTML fragments, or JSON.

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;

use delve_core::{DomainViolation, GenRng};
use delve_core::describe::{
    content_description, item_condition_description, map_description, room_description,
    room_description_full,
};
use delve_core::error::ConfigError;
use delve_core::room::{
    DungeonConfig, Knob, ResolveOptions, Room, RoomConfig, generate_dungeon_rooms, generate_rooms,
};

/// Generate furnished dungeon rooms
#[derive(Parser, Debug)]
#[command(name = "delve")]
#[command(author, version, about = "Generate and describe dungeon rooms", long_about = None)]
struct Args {
    /// RNG seed; a random seed is drawn when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of rooms to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: u32,

    /// Derive the room count from dungeon complexity instead of --count
    #[arg(long)]
    complexity: Option<u32>,

    /// Room type (domain word or "random")
    #[arg(long, default_value = "random")]
    room_type: String,

    /// Room size
    #[arg(long, default_value = "random")]
    room_size: String,

    /// Room condition
    #[arg(long, default_value = "random")]
    room_condition: String,

    /// Item quantity
    #[arg(long, default_value = "random")]
    item_quantity: String,

    /// Item condition
    #[arg(long, default_value = "random")]
    item_condition: String,

    /// Item rarity
    #[arg(long, default_value = "random")]
    item_rarity: String,

    /// Item type
    #[arg(long, default_value = "random")]
    item_type: String,

    /// Furniture quantity
    #[arg(long, default_value = "random")]
    furniture: String,

    /// Resolve one condition and rarity for a whole room instead of
    /// rolling them per item
    #[arg(long)]
    uniform: bool,

    /// Emit HTML fragments instead of plain prose
    #[arg(long)]
    html: bool,

    /// Dump the resolved rooms as JSON
    #[arg(long)]
    json: bool,

    /// Report the seed in use on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn build_config(args: &Args) -> Result<RoomConfig, DomainViolation> {
    Ok(RoomConfig {
        item_condition: Knob::parse("item_condition", &args.item_condition)?,
        item_quantity: Knob::parse("item_quantity", &args.item_quantity)?,
        item_rarity: Knob::parse("item_rarity", &args.item_rarity)?,
        item_type: Knob::parse("item_type", &args.item_type)?,
        room_condition: Knob::parse("room_condition", &args.room_condition)?,
        room_count: Some(args.count),
        room_furniture_quantity: Knob::parse("furniture", &args.furniture)?,
        room_size: Knob::parse("room_size", &args.room_size)?,
        room_type: Knob::parse("room_type", &args.room_type)?,
    })
}

/// Narrative paragraph for a single room, without markup.
fn plain_description(room: &Room) -> Result<String, ConfigError> {
    let mut sentences = vec![room_description(&room.settings)];
    if let Some(content) = content_description(&room.settings)? {
        sentences.push(content);
    }
    if let Some(condition) = item_condition_description(&room.settings) {
        sentences.push(condition);
    }
    Ok(format!("{}.", sentences.join(". ")))
}

fn run(args: &Args) -> Result<String, Box<dyn Error>> {
    let config = build_config(args)?;
    let options = ResolveOptions {
        uniform_item_condition: args.uniform,
        uniform_item_rarity: args.uniform,
    };

    let mut rng = match args.seed {
        Some(seed) => GenRng::new(seed),
        None => GenRng::from_entropy(),
    };
    if args.verbose {
        eprintln!("seed: {}", rng.seed());
    }

    let mut rooms = match args.complexity {
        Some(complexity) => {
            let dungeon = DungeonConfig {
                room: config,
                complexity,
                ..DungeonConfig::default()
            };
            generate_dungeon_rooms(&dungeon, &options, &mut rng)?
        }
        None => generate_rooms(&config, &options, &mut rng)?,
    };

    // Stand in for the map layout collaborator: number rooms sequentially.
    for (index, room) in rooms.iter_mut().enumerate() {
        room.room_number = Some(index as u32 + 1);
    }

    if args.json {
        return Ok(serde_json::to_string_pretty(&rooms)?);
    }

    let mut blocks = Vec::with_capacity(rooms.len());
    if args.html {
        for room in &rooms {
            blocks.push(room_description_full(room, None)?);
        }
        blocks.push(map_description());
    } else {
        for room in &rooms {
            let number = room.room_number.unwrap_or_default();
            blocks.push(format!("Room {number}\n{}", plain_description(room)?));
        }
    }

    Ok(blocks.join("\n\n"))
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("delve: {err}");
            ExitCode::FAILURE
        }
    }
}
