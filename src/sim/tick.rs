//! Fixed timestep simulation tick
//!
//! One call = one frame = one agent decision. Order within a tick:
//! player, pipes, scoring, collision, reward, observation.

use super::collision;
use super::rng::RandomSource;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::error::EngineError;

/// The agent's choice for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    Noop,
    Flap,
}

/// Result of one tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    /// Raw (un-normalized) lidar distances
    pub reading: Vec<f32>,
    /// -1.0 on death, else +1.0 on a pass, else +0.1
    pub reward: f32,
    pub alive: bool,
}

/// Advance the game state by one tick
pub fn tick<R: RandomSource + ?Sized>(
    state: &mut GameState<'_, R>,
    action: Action,
) -> Result<TickOutcome, EngineError> {
    if state.phase == GamePhase::Dead {
        log::warn!("tick after episode end (tick {})", state.time_ticks);
        return Err(EngineError::EpisodeOver);
    }

    state.events.clear();
    state.time_ticks += 1;

    // 1. Player
    let gating = state.config().flap_gating;
    if state.player.apply_action(action, gating) {
        state.events.push(GameEvent::Flap);
    }
    state.player.integrate();

    // 2. Pipes
    state.pipes.advance(&mut *state.rng);

    // 3. Score
    let passes = state.pipes.collect_passes(state.player.pos.x);
    if passes > 0 {
        state.score += passes;
        state.events.push(GameEvent::Point);
        log::debug!("Passed pipe at tick {}, score {}", state.time_ticks, state.score);
    }

    // 4. Collision
    let hit = collision::check(&state.player, &state.pipes, state.ground_y, CEILING_Y);

    // 5. Reward: death > pass > alive
    let reward = if let Some(kind) = hit {
        state.phase = GamePhase::Dead;
        state.player.stop();
        state.events.push(GameEvent::Hit(kind));
        log::debug!(
            "Crashed into {:?} at tick {} with score {}",
            kind,
            state.time_ticks,
            state.score
        );
        REWARD_DEATH
    } else if passes > 0 {
        REWARD_PASS
    } else {
        REWARD_ALIVE
    };

    // 6. Observation from the post-tick geometry
    Ok(TickOutcome {
        reading: state.observe(),
        reward,
        alive: state.phase == GamePhase::Alive,
    })
}
