//! Game state and episode lifecycle
//!
//! `GameState` exclusively owns every entity of one episode and borrows the
//! caller's random source. The renderer and the training wrapper see it only
//! through read-only accessors.

use super::collision::Collision;
use super::lidar::Lidar;
use super::pipes::PipeField;
use super::player::Player;
use super::rng::RandomSource;
use super::tick::{Action, TickOutcome};
use crate::config::EngineConfig;
use crate::consts::CEILING_Y;
use crate::error::EngineError;

/// Episode phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Alive,
    /// Terminal until reset
    Dead,
}

/// Things that happened during the last tick (audio/render cues)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Flap,
    Point,
    Hit(Collision),
}

/// One episode of the game
pub struct GameState<'r, R: RandomSource + ?Sized> {
    config: EngineConfig,
    pub(super) rng: &'r mut R,
    lidar: Lidar,
    pub(super) player: Player,
    pub(super) pipes: PipeField,
    pub(super) ground_y: f32,
    pub(super) score: u32,
    pub(super) time_ticks: u64,
    pub(super) phase: GamePhase,
    pub(super) events: Vec<GameEvent>,
    episode: u32,
}

impl<'r, R: RandomSource + ?Sized> GameState<'r, R> {
    /// Validate the config and start the first episode
    pub fn new(config: EngineConfig, rng: &'r mut R) -> Result<Self, EngineError> {
        config.validate()?;

        let pipes = PipeField::new(&config, rng);
        let state = Self {
            lidar: Lidar::new(&config.lidar),
            player: Player::new(&config),
            ground_y: config.ground_y(),
            pipes,
            rng,
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Alive,
            events: Vec::new(),
            episode: 0,
            config,
        };
        log::info!(
            "New game: {}x{} gap {} ({} lidar rays)",
            state.config.screen_width,
            state.config.screen_height,
            state.config.pipe_gap,
            state.lidar.ray_count()
        );
        Ok(state)
    }

    /// Start a fresh episode on the same random stream and return its first reading
    pub fn reset(&mut self) -> Vec<f32> {
        self.player = Player::new(&self.config);
        self.pipes = PipeField::new(&self.config, &mut *self.rng);
        self.score = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Alive;
        self.events.clear();
        self.episode += 1;
        log::info!("Episode {} started", self.episode);
        self.observe()
    }

    /// Advance one tick. Fails with `EpisodeOver` once the bird is dead.
    pub fn tick(&mut self, action: Action) -> Result<TickOutcome, EngineError> {
        super::tick::tick(self, action)
    }

    /// Raw lidar reading for the current geometry
    pub fn observe(&self) -> Vec<f32> {
        self.lidar.scan(self.player.pos, &self.pipes, self.ground_y)
    }

    /// Raw lidar reading into a caller buffer
    pub fn observe_into(&self, out: &mut [f32]) {
        self.lidar
            .scan_into(self.player.pos, &self.pipes, self.ground_y, out);
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn lidar(&self) -> &Lidar {
        &self.lidar
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn pipes(&self) -> &PipeField {
        &self.pipes
    }

    pub fn ground_y(&self) -> f32 {
        self.ground_y
    }

    pub fn ceiling_y(&self) -> f32 {
        CEILING_Y
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_alive(&self) -> bool {
        self.phase == GamePhase::Alive
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Episodes started since construction (0 for the first)
    pub fn episode(&self) -> u32 {
        self.episode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::rng::seeded_rng;

    #[test]
    fn test_new_game() {
        let mut rng = seeded_rng(12345);
        let state = GameState::new(EngineConfig::default(), &mut rng).unwrap();
        assert!(state.is_alive());
        assert_eq!(state.score(), 0);
        assert_eq!(state.time_ticks(), 0);
        assert_eq!(state.pipes().len(), 2);
        assert_eq!(state.ground_y(), EngineConfig::default().ground_y());
        assert_eq!(state.observe().len(), LIDAR_RAYS);
        assert!(state.events().is_empty());

        let mut buf = vec![0.0; LIDAR_RAYS];
        state.observe_into(&mut buf);
        assert_eq!(buf, state.observe());
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let mut rng = seeded_rng(1);
        let config = EngineConfig {
            screen_height: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            GameState::new(config, &mut rng),
            Err(EngineError::InvalidScreen { .. })
        ));
    }

    #[test]
    fn test_reset_restores_start() {
        let mut rng = seeded_rng(9);
        let mut state = GameState::new(EngineConfig::default(), &mut rng).unwrap();
        while state.is_alive() {
            state.tick(Action::Noop).unwrap();
        }
        assert_eq!(state.phase(), GamePhase::Dead);

        let reading = state.reset();
        assert!(state.is_alive());
        assert_eq!(state.score(), 0);
        assert_eq!(state.time_ticks(), 0);
        assert_eq!(state.episode(), 1);
        assert_eq!(state.player().pos, Player::new(state.config()).pos);
        assert_eq!(reading, state.observe());
        assert!(state.tick(Action::Flap).is_ok());
    }

    #[test]
    fn test_trait_object_source() {
        let mut rng = seeded_rng(4);
        let source: &mut dyn RandomSource = &mut rng;
        let mut state = GameState::new(EngineConfig::default(), source).unwrap();
        assert!(state.tick(Action::Noop).is_ok());
    }
}
