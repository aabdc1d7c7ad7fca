//! Range sensor: a fan of rays cast from the bird
//!
//! Rays test the pipes within reach and the ground half-plane. A ray that
//! hits nothing reports exactly `max_range`, so every reading stays in
//! `[0, max_range]` and a linear rescale to `[-1, 1]` never overflows.

use glam::Vec2;

use super::pipes::PipeField;
use crate::config::LidarConfig;
use crate::{direction_from_degrees, polar_offset};

/// Precomputed ray fan
#[derive(Debug, Clone)]
pub struct Lidar {
    max_range: f32,
    /// Ray angles in degrees (0 = ahead, positive turns downward)
    angles: Vec<f32>,
    /// Unit directions matching `angles`
    directions: Vec<Vec2>,
}

impl Lidar {
    /// Build the fan. Ray `i` points at `-arc/2 + i * arc/rays` degrees.
    pub fn new(config: &LidarConfig) -> Self {
        let step = config.arc_degrees / config.rays as f32;
        let start = -config.arc_degrees / 2.0;
        let angles: Vec<f32> = (0..config.rays).map(|i| start + i as f32 * step).collect();
        let directions = angles.iter().map(|&a| direction_from_degrees(a)).collect();
        Self {
            max_range: config.max_range,
            angles,
            directions,
        }
    }

    pub fn max_range(&self) -> f32 {
        self.max_range
    }

    pub fn ray_count(&self) -> usize {
        self.directions.len()
    }

    pub fn ray_angles(&self) -> &[f32] {
        &self.angles
    }

    /// One distance per ray, in ray order
    pub fn scan(&self, origin: Vec2, field: &PipeField, ground_y: f32) -> Vec<f32> {
        let mut out = vec![self.max_range; self.directions.len()];
        self.scan_into(origin, field, ground_y, &mut out);
        out
    }

    /// Allocation-free variant. Writes `min(ray_count, out.len())` values.
    pub fn scan_into(&self, origin: Vec2, field: &PipeField, ground_y: f32, out: &mut [f32]) {
        // Only pairs horizontally within reach can be hit
        let (reach_min, reach_max) = (origin.x - self.max_range, origin.x + self.max_range);

        for (slot, &dir) in out.iter_mut().zip(&self.directions) {
            let mut best = ground_distance(origin, dir, ground_y).unwrap_or(f32::INFINITY);
            for pair in field.pairs_in_span(reach_min, reach_max) {
                for rect in pair.rects() {
                    if let Some(t) = rect.ray_entry(origin, dir) {
                        best = best.min(t);
                    }
                }
            }
            *slot = best.clamp(0.0, self.max_range);
        }
    }

    /// End point of each ray (hit point or full range), for debug drawing
    pub fn hit_points(&self, origin: Vec2, field: &PipeField, ground_y: f32) -> Vec<Vec2> {
        self.scan(origin, field, ground_y)
            .into_iter()
            .zip(&self.angles)
            .map(|(d, &angle)| polar_offset(origin, d, angle))
            .collect()
    }
}

/// Distance to the ground half-plane `y >= ground_y`
fn ground_distance(origin: Vec2, dir: Vec2, ground_y: f32) -> Option<f32> {
    if origin.y >= ground_y {
        return Some(0.0);
    }
    if dir.y <= f32::EPSILON {
        return None;
    }
    Some((ground_y - origin.y) / dir.y)
}
