//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Randomness only from the caller's `RandomSource`
//! - Stable iteration order (pipes in spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod lidar;
pub mod pipes;
pub mod player;
pub mod rect;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{Collision, check};
pub use lidar::Lidar;
pub use pipes::{PipeField, PipePair};
pub use player::Player;
pub use rect::Aabb;
pub use rng::{GameRng, RandomSource, seeded_rng};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{Action, TickOutcome, tick};
