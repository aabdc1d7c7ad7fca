//! Scrolling pipe pairs
//!
//! Pairs enter past the right edge at a fixed spacing, scroll left at a fixed
//! rate and leave once fully past the left edge. Spawn order equals
//! horizontal order, so the field stays sorted without ever re-sorting.

use std::collections::VecDeque;

use super::rect::Aabb;
use super::rng::RandomSource;
use crate::config::EngineConfig;
use crate::consts::*;

/// One upper/lower pipe pair
#[derive(Debug, Clone)]
pub struct PipePair {
    /// Left edge
    pub x: f32,
    /// Vertical center of the opening
    pub gap_center: f32,
    /// Opening height
    pub gap: f32,
    /// Already scored
    pub passed: bool,
    /// Upper pipe reaches at least this high
    ceiling_y: f32,
    /// Lower pipe reaches at least this low
    ground_y: f32,
}

impl PipePair {
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + PIPE_WIDTH
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + PIPE_WIDTH / 2.0
    }

    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.gap_center - self.gap / 2.0
    }

    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_center + self.gap / 2.0
    }

    /// Upper pipe, extended to cover the ceiling
    pub fn upper_rect(&self) -> Aabb {
        let top = (self.gap_top() - PIPE_HEIGHT).min(self.ceiling_y);
        Aabb::new(
            glam::Vec2::new(self.x, top),
            glam::Vec2::new(self.right(), self.gap_top()),
        )
    }

    /// Lower pipe, extended to cover the ground
    pub fn lower_rect(&self) -> Aabb {
        let bottom = (self.gap_bottom() + PIPE_HEIGHT).max(self.ground_y);
        Aabb::new(
            glam::Vec2::new(self.x, self.gap_bottom()),
            glam::Vec2::new(self.right(), bottom),
        )
    }

    pub fn rects(&self) -> [Aabb; 2] {
        [self.upper_rect(), self.lower_rect()]
    }
}

/// Ordered, scrolling set of pipe pairs
#[derive(Debug, Clone)]
pub struct PipeField {
    pairs: VecDeque<PipePair>,
    gap: f32,
    spacing: f32,
    spawn_x: f32,
    gap_center_min: f32,
    gap_center_max: f32,
    ceiling_y: f32,
    ground_y: f32,
}

impl PipeField {
    /// Empty field laid out for this config
    pub fn empty(config: &EngineConfig) -> Self {
        let ground_y = config.ground_y();
        let margin = config.gap_margin();
        let half_gap = config.pipe_gap / 2.0;
        Self {
            pairs: VecDeque::with_capacity(4),
            gap: config.pipe_gap,
            spacing: config.pipe_spacing(),
            spawn_x: config.screen_width + PIPE_SPAWN_OFFSET,
            gap_center_min: margin + half_gap,
            gap_center_max: ground_y - margin - half_gap,
            ceiling_y: CEILING_Y,
            ground_y,
        }
    }

    /// Field with the two opening pairs
    pub fn new<R: RandomSource + ?Sized>(config: &EngineConfig, rng: &mut R) -> Self {
        let mut field = Self::empty(config);
        let first_x = config.screen_width + PIPE_FIRST_OFFSET;
        field.spawn_at(first_x, rng);
        field.spawn_at(first_x + field.spacing, rng);
        field
    }

    /// Insert a pair with a random gap at `x`
    fn spawn_at<R: RandomSource + ?Sized>(&mut self, x: f32, rng: &mut R) {
        let gap_center = rng.uniform(self.gap_center_min, self.gap_center_max);
        log::debug!("Spawned pipe pair at x={x} gap_center={gap_center:.1}");
        self.push(x, gap_center);
    }

    /// Insert a pair with a known gap. Must be right of every existing pair.
    pub fn push(&mut self, x: f32, gap_center: f32) {
        debug_assert!(self.pairs.back().is_none_or(|p| p.x <= x));
        self.pairs.push_back(PipePair {
            x,
            gap_center,
            gap: self.gap,
            passed: false,
            ceiling_y: self.ceiling_y,
            ground_y: self.ground_y,
        });
    }

    /// Scroll one tick, then spawn and despawn
    pub fn advance<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        for pair in &mut self.pairs {
            pair.x += PIPE_VEL_X;
        }

        match self.pairs.back().map(|p| p.x) {
            Some(rightmost) if rightmost + self.spacing <= self.spawn_x => {
                self.spawn_at(rightmost + self.spacing, rng);
            }
            Some(_) => {}
            None => self.spawn_at(self.spawn_x, rng),
        }

        while self.pairs.front().is_some_and(|p| p.right() < 0.0) {
            if let Some(gone) = self.pairs.pop_front() {
                log::debug!("Despawned pipe pair (gap_center={:.1})", gone.gap_center);
            }
        }
    }

    /// Mark pairs whose center crossed `player_x` during the last scroll.
    /// Each pair is counted at most once.
    pub fn collect_passes(&mut self, player_x: f32) -> u32 {
        let mut passes = 0;
        for pair in &mut self.pairs {
            if pair.passed {
                continue;
            }
            let now = pair.center_x();
            let before = now - PIPE_VEL_X;
            if before > player_x && now <= player_x {
                pair.passed = true;
                passes += 1;
            }
        }
        passes
    }

    /// First pair whose right edge has not yet passed `player_x`
    pub fn nearest_pair_ahead(&self, player_x: f32) -> Option<&PipePair> {
        // Sorted by x, and right edges share the same order
        let idx = self.pairs.partition_point(|p| p.right() < player_x);
        self.pairs.get(idx)
    }

    /// Pairs whose horizontal span intersects [min_x, max_x]
    pub fn pairs_in_span(&self, min_x: f32, max_x: f32) -> impl Iterator<Item = &PipePair> {
        self.pairs
            .iter()
            .filter(move |p| p.x <= max_x && p.right() >= min_x)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PipePair> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn gap_center_bounds(&self) -> (f32, f32) {
        (self.gap_center_min, self.gap_center_max)
    }
}
