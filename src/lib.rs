//! Flappy Sim - a deterministic Flappy Bird simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipes, collisions, lidar, game state)
//! - `config`: Construction-time configuration and validation
//! - `error`: Configuration and misuse errors

pub mod config;
pub mod error;
pub mod sim;

pub use config::{Background, BirdColor, EngineConfig, FlapGating, LidarConfig, PipeColor};
pub use error::EngineError;
pub use sim::{Action, GamePhase, GameState, TickOutcome};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default screen dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 288.0;
    pub const SCREEN_HEIGHT: f32 = 512.0;
    /// Ground line as a fraction of screen height
    pub const GROUND_RATIO: f32 = 0.79;
    /// Ceiling line (top of the screen)
    pub const CEILING_Y: f32 = 0.0;

    /// Player box
    pub const PLAYER_WIDTH: f32 = 34.0;
    pub const PLAYER_HEIGHT: f32 = 24.0;
    /// Player's left edge as a fraction of screen width
    pub const PLAYER_X_RATIO: f32 = 0.2;

    /// Player vertical physics (pixels per tick)
    pub const PLAYER_MAX_VEL_Y: f32 = 10.0;
    pub const PLAYER_ACC_Y: f32 = 1.0;
    pub const PLAYER_FLAP_VEL: f32 = -9.0;
    pub const PLAYER_START_VEL_Y: f32 = -9.0;

    /// Player rotation (degrees, cosmetic)
    pub const PLAYER_VEL_ROT: f32 = 3.0;
    pub const PLAYER_MIN_ROT: f32 = -90.0;
    pub const PLAYER_FLAP_ROT: f32 = 45.0;

    /// Pipe geometry
    pub const PIPE_WIDTH: f32 = 52.0;
    pub const PIPE_HEIGHT: f32 = 320.0;
    pub const PIPE_GAP: f32 = 100.0;
    /// Scroll speed (pixels per tick, leftward)
    pub const PIPE_VEL_X: f32 = -4.0;
    /// First pipe pair starts this far past the right edge
    pub const PIPE_FIRST_OFFSET: f32 = 200.0;
    /// New pairs appear this far past the right edge
    pub const PIPE_SPAWN_OFFSET: f32 = 10.0;
    /// Gap keeps this fraction of the ground height clear above and below
    pub const PIPE_GAP_MARGIN_RATIO: f32 = 0.2;

    /// Lidar defaults
    pub const LIDAR_RAYS: usize = 360;
    pub const LIDAR_ARC_DEGREES: f32 = 360.0;
    pub const LIDAR_MAX_DISTANCE: f32 = 180.0;
    pub const LIDAR_MAX_RAYS: usize = 3600;

    /// Per-tick rewards
    pub const REWARD_ALIVE: f32 = 0.1;
    pub const REWARD_PASS: f32 = 1.0;
    pub const REWARD_DEATH: f32 = -1.0;
}

/// Unit direction for an angle in degrees (0 = +x, positive turns toward +y)
#[inline]
pub fn direction_from_degrees(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

/// Point at distance `r` from `origin` along `degrees`
#[inline]
pub fn polar_offset(origin: Vec2, r: f32, degrees: f32) -> Vec2 {
    origin + direction_from_degrees(degrees) * r
}
