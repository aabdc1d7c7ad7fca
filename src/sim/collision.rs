//! Collision detection between the bird and the world
//!
//! Everything here is a pure function of the current geometry. The bird's
//! hitbox is an axis-aligned box and every comparison is closed: touching an
//! edge is a crash, which fixes the exact tick a death reward lands on.

use super::pipes::PipeField;
use super::player::Player;
use super::rect::Aabb;

/// What the bird ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Ground,
    Ceiling,
    Pipe,
}

/// Check the bird against ground, ceiling and every pipe it overlaps horizontally
pub fn check(player: &Player, field: &PipeField, ground_y: f32, ceiling_y: f32) -> Option<Collision> {
    if player_ground_collision(player, ground_y) {
        return Some(Collision::Ground);
    }
    if player_ceiling_collision(player, ceiling_y) {
        return Some(Collision::Ceiling);
    }
    if player_pipe_collision(&player.bounds(), field) {
        return Some(Collision::Pipe);
    }
    None
}

/// Bottom edge at or below the ground line
#[inline]
pub fn player_ground_collision(player: &Player, ground_y: f32) -> bool {
    player.bottom() >= ground_y
}

/// Top edge at or above the ceiling line
#[inline]
pub fn player_ceiling_collision(player: &Player, ceiling_y: f32) -> bool {
    player.top() <= ceiling_y
}

/// Box against the upper and lower pipe of each horizontally overlapping pair
pub fn player_pipe_collision(hitbox: &Aabb, field: &PipeField) -> bool {
    field
        .pairs_in_span(hitbox.min.x, hitbox.max.x)
        .any(|pair| pair.rects().iter().any(|r| hitbox.overlaps(r)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::consts::*;

    fn setup() -> (EngineConfig, Player, PipeField) {
        let config = EngineConfig::default();
        let player = Player::new(&config);
        let field = PipeField::empty(&config);
        (config, player, field)
    }

    #[test]
    fn test_free_flight() {
        let (config, player, field) = setup();
        assert_eq!(check(&player, &field, config.ground_y(), CEILING_Y), None);
    }

    #[test]
    fn test_ground_touch_counts() {
        let (_, mut player, field) = setup();
        let ground = 400.0;
        player.pos.y = ground - player.half_extents.y - 0.01;
        assert_eq!(check(&player, &field, ground, CEILING_Y), None);
        player.pos.y = ground - player.half_extents.y;
        assert_eq!(check(&player, &field, ground, CEILING_Y), Some(Collision::Ground));
    }

    #[test]
    fn test_ceiling_touch_counts() {
        let (config, mut player, field) = setup();
        player.pos.y = player.half_extents.y + 0.5;
        assert_eq!(check(&player, &field, config.ground_y(), CEILING_Y), None);
        player.pos.y = player.half_extents.y;
        assert_eq!(
            check(&player, &field, config.ground_y(), CEILING_Y),
            Some(Collision::Ceiling)
        );
        player.pos.y = -100.0;
        assert_eq!(
            check(&player, &field, config.ground_y(), CEILING_Y),
            Some(Collision::Ceiling)
        );
    }

    #[test]
    fn test_pipe_edge_contact() {
        let (config, player, mut field) = setup();
        // Player spans x in [57, 91], y in [244, 268]
        // Gap [150, 250]: bird pokes into the lower pipe when overlapping
        field.push(91.0, 200.0);
        assert_eq!(
            check(&player, &field, config.ground_y(), CEILING_Y),
            Some(Collision::Pipe)
        );

        let mut field = PipeField::empty(&config);
        field.push(91.5, 200.0);
        assert_eq!(check(&player, &field, config.ground_y(), CEILING_Y), None);
    }

    #[test]
    fn test_inside_gap_is_safe() {
        let (config, player, mut field) = setup();
        // Gap [206, 306] contains the bird's [244, 268]
        field.push(60.0, 256.0);
        assert_eq!(check(&player, &field, config.ground_y(), CEILING_Y), None);
    }

    #[test]
    fn test_gap_edge_touch_counts() {
        let (config, player, mut field) = setup();
        // Gap bottom exactly at the bird's bottom edge (268)
        field.push(60.0, 268.0 - PIPE_GAP / 2.0);
        assert_eq!(
            check(&player, &field, config.ground_y(), CEILING_Y),
            Some(Collision::Pipe)
        );
    }
}
