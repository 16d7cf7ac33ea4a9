//! delve-core: room resolution and description for the delve dungeon
//! generator.
//!
//! This crate contains the generation logic with no I/O dependencies:
//! closed attribute vocabularies and their compatibility tables, the
//! configuration resolver, the door/connection data contract, item
//! furnishing, and the description engine that renders resolved rooms as
//! narrative prose and HTML reference fragments.
//!
//! Map layout (placing rooms on a grid, carving corridors, building the
//! actual `Door` graph) is a collaborator, not part of this crate; the
//! engine only guarantees that rendered text faithfully reflects the room
//! and door data it is given.

pub mod attribute;
pub mod describe;
pub mod door;
pub mod error;
pub mod item;
pub mod room;

mod rng;

pub use error::{ConfigError, DomainViolation};
pub use rng::GenRng;
