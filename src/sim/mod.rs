//! Event-driven gameplay module
//!
//! All gameplay logic lives here. The host physics engine detects and
//! resolves collisions; this module reacts to the contact events it reports:
//! - Synchronous, single-threaded callbacks only
//! - Stable iteration order (blocks by entity ID)
//! - No rendering or platform dependencies

pub mod ball;
pub mod block;
pub mod body;
pub mod grid;
pub mod registry;
pub mod session;

pub use ball::{BallController, GamePhase, hit_factor};
pub use block::{Block, BlockOutcome, EntityKind, SpawnedEntity};
pub use body::{KinematicBody, PhysicsBody};
pub use grid::{GridCell, GridGenerator, generate};
pub use registry::BlockRegistry;
pub use session::{Contact, HostEvent, Region, Session, Snapshot};
