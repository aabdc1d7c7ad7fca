//! The bird: flap impulse, gravity and cosmetic rotation

use glam::Vec2;

use super::rect::Aabb;
use super::tick::Action;
use crate::config::{EngineConfig, FlapGating};
use crate::consts::*;

/// Player body. Horizontal position never changes; the world scrolls instead.
#[derive(Debug, Clone)]
pub struct Player {
    /// Center of the hitbox
    pub pos: Vec2,
    /// Vertical velocity (pixels per tick, positive = down)
    pub vel_y: f32,
    /// Rotation in degrees, bounded to [PLAYER_MIN_ROT, PLAYER_FLAP_ROT]
    pub rotation: f32,
    pub half_extents: Vec2,
    /// Flap fired this tick (gravity skipped)
    flapped: bool,
    /// Action held on the previous tick, for rising-edge gating
    prev_flap_held: bool,
}

impl Player {
    /// Spawn at the episode start position for this screen
    pub fn new(config: &EngineConfig) -> Self {
        let half_extents = Vec2::new(PLAYER_WIDTH / 2.0, PLAYER_HEIGHT / 2.0);
        let top = ((config.screen_height - PLAYER_HEIGHT) / 2.0).floor();
        Self {
            pos: Vec2::new(config.player_x() + half_extents.x, top + half_extents.y),
            vel_y: PLAYER_START_VEL_Y,
            rotation: PLAYER_FLAP_ROT,
            half_extents,
            flapped: false,
            prev_flap_held: false,
        }
    }

    /// Hitbox
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.half_extents)
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.half_extents.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.half_extents.y
    }

    /// Apply this tick's action. Returns true if the flap fired.
    pub fn apply_action(&mut self, action: Action, gating: FlapGating) -> bool {
        let held = action == Action::Flap;
        let fire = match gating {
            FlapGating::EveryTick => held,
            FlapGating::RisingEdge => held && !self.prev_flap_held,
        };
        self.prev_flap_held = held;

        if fire {
            self.vel_y = PLAYER_FLAP_VEL;
            self.flapped = true;
        }
        fire
    }

    /// Advance one tick: rotation, gravity, then position
    pub fn integrate(&mut self) {
        if self.rotation > PLAYER_MIN_ROT {
            self.rotation = (self.rotation - PLAYER_VEL_ROT).max(PLAYER_MIN_ROT);
        }

        if self.flapped {
            self.flapped = false;
            self.rotation = PLAYER_FLAP_ROT;
        } else if self.vel_y < PLAYER_MAX_VEL_Y {
            self.vel_y = (self.vel_y + PLAYER_ACC_Y).min(PLAYER_MAX_VEL_Y);
        }

        self.pos.y += self.vel_y;
    }

    /// Freeze vertical motion (on death)
    pub fn stop(&mut self) {
        self.vel_y = 0.0;
    }
}
