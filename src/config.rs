//! Engine configuration
//!
//! Everything fixed for the lifetime of an episode. Validated once at
//! construction so no tick ever runs on bad geometry.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::EngineError;

/// When a held flap input re-triggers the upward impulse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FlapGating {
    /// Every FLAP tick fires
    #[default]
    EveryTick,
    /// Only a NOOP -> FLAP transition fires
    RisingEdge,
}

/// Bird sprite color (cosmetic, ignored by the simulation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BirdColor {
    #[default]
    Yellow,
    Blue,
    Red,
}

impl BirdColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            BirdColor::Yellow => "yellow",
            BirdColor::Blue => "blue",
            BirdColor::Red => "red",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "yellow" => Some(BirdColor::Yellow),
            "blue" => Some(BirdColor::Blue),
            "red" => Some(BirdColor::Red),
            _ => None,
        }
    }
}

/// Pipe sprite color (cosmetic)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PipeColor {
    #[default]
    Green,
    Red,
}

impl PipeColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipeColor::Green => "green",
            PipeColor::Red => "red",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "green" => Some(PipeColor::Green),
            "red" => Some(PipeColor::Red),
            _ => None,
        }
    }
}

/// Background image (cosmetic)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Background {
    #[default]
    Day,
    Night,
}

impl Background {
    pub fn as_str(&self) -> &'static str {
        match self {
            Background::Day => "day",
            Background::Night => "night",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "day" => Some(Background::Day),
            "night" => Some(Background::Night),
            _ => None,
        }
    }
}

/// Ray fan layout. One distance per ray, no angles interleaved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LidarConfig {
    /// Number of rays (observation length)
    pub rays: usize,
    /// Total swept arc in degrees, centered on straight ahead
    pub arc_degrees: f32,
    /// Distance reported by rays that hit nothing
    pub max_range: f32,
}

impl Default for LidarConfig {
    fn default() -> Self {
        Self {
            rays: LIDAR_RAYS,
            arc_degrees: LIDAR_ARC_DEGREES,
            max_range: LIDAR_MAX_DISTANCE,
        }
    }
}

impl LidarConfig {
    /// Forward-facing half circle, one ray per degree
    pub fn half_circle() -> Self {
        Self {
            rays: 180,
            arc_degrees: 180.0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.rays == 0 || self.rays > LIDAR_MAX_RAYS {
            return Err(EngineError::InvalidRayCount {
                rays: self.rays,
                max: LIDAR_MAX_RAYS,
            });
        }
        if !(self.arc_degrees > 0.0 && self.arc_degrees <= 360.0) {
            return Err(EngineError::InvalidLidarArc(self.arc_degrees));
        }
        if !(self.max_range.is_finite() && self.max_range > 0.0) {
            return Err(EngineError::InvalidLidarRange(self.max_range));
        }
        Ok(())
    }
}

/// Construction-time engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === Geometry ===
    /// Screen width (pixels)
    pub screen_width: f32,
    /// Screen height (pixels)
    pub screen_height: f32,
    /// Vertical space between upper and lower pipe
    pub pipe_gap: f32,

    // === Control ===
    pub flap_gating: FlapGating,

    // === Sensing ===
    pub lidar: LidarConfig,

    // === Cosmetic (renderer only) ===
    pub bird_color: BirdColor,
    pub pipe_color: PipeColor,
    /// `None` draws no background
    pub background: Option<Background>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            pipe_gap: PIPE_GAP,

            flap_gating: FlapGating::EveryTick,

            lidar: LidarConfig::default(),

            bird_color: BirdColor::Yellow,
            pipe_color: PipeColor::Green,
            background: Some(Background::Day),
        }
    }
}

impl EngineConfig {
    /// Ground line y
    pub fn ground_y(&self) -> f32 {
        self.screen_height * GROUND_RATIO
    }

    /// Clearance kept between the gap and ground/ceiling
    pub fn gap_margin(&self) -> f32 {
        self.ground_y() * PIPE_GAP_MARGIN_RATIO
    }

    /// Largest gap that still leaves room for random placement
    pub fn max_pipe_gap(&self) -> f32 {
        self.ground_y() - 2.0 * self.gap_margin()
    }

    /// Player's fixed left edge
    pub fn player_x(&self) -> f32 {
        (self.screen_width * PLAYER_X_RATIO).floor()
    }

    /// Horizontal distance between consecutive pipe pairs
    pub fn pipe_spacing(&self) -> f32 {
        self.screen_width / 2.0
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let dims_ok = self.screen_width.is_finite()
            && self.screen_height.is_finite()
            && self.screen_width > 0.0
            && self.screen_height > 0.0;
        if !dims_ok {
            return Err(EngineError::InvalidScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }

        // Slower spacing than scroll would spawn pairs on screen and drain the field
        let min_spacing = PIPE_VEL_X.abs();
        if self.pipe_spacing() < min_spacing {
            return Err(EngineError::InvalidPipeSpacing {
                spacing: self.pipe_spacing(),
                min: min_spacing,
            });
        }

        // The bird must fit through, and the gap must leave placement slack
        let max = self.max_pipe_gap();
        if !(self.pipe_gap > PLAYER_HEIGHT && self.pipe_gap < max) {
            return Err(EngineError::InvalidPipeGap {
                gap: self.pipe_gap,
                max,
            });
        }

        self.lidar.validate()
    }

    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        log::info!(
            "Loaded engine config: {}x{} gap {}",
            config.screen_width,
            config.screen_height,
            config.pipe_gap
        );
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.player_x(), 57.0);
        assert_eq!(config.pipe_spacing(), 144.0);
        assert_eq!(config.lidar.rays, 360);
    }

    #[test]
    fn test_rejects_bad_screen() {
        let config = EngineConfig {
            screen_width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidScreen { .. })
        ));

        let config = EngineConfig {
            screen_height: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidScreen { .. })
        ));
    }

    #[test]
    fn test_rejects_spacing_below_scroll_step() {
        for width in [1.0, 6.0, 7.9] {
            let config = EngineConfig {
                screen_width: width,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(EngineError::InvalidPipeSpacing { .. })),
                "width {width} should be rejected"
            );
        }

        let config = EngineConfig {
            screen_width: 8.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_gap() {
        for gap in [0.0, -5.0, 10.0, 400.0] {
            let config = EngineConfig {
                pipe_gap: gap,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(EngineError::InvalidPipeGap { .. })),
                "gap {gap} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_bad_lidar() {
        let mut config = EngineConfig::default();
        config.lidar.rays = 0;
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidRayCount { .. })
        ));

        config.lidar.rays = LIDAR_MAX_RAYS + 1;
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidRayCount { .. })
        ));

        config.lidar = LidarConfig {
            arc_degrees: 361.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidLidarArc(_))
        ));

        config.lidar = LidarConfig {
            max_range: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidLidarRange(_))
        ));
    }

    #[test]
    fn test_json_partial_uses_defaults() {
        let config =
            EngineConfig::from_json(r#"{"pipe_gap": 120.0, "flap_gating": "RisingEdge"}"#).unwrap();
        assert_eq!(config.pipe_gap, 120.0);
        assert_eq!(config.flap_gating, FlapGating::RisingEdge);
        assert_eq!(config.screen_width, SCREEN_WIDTH);
        assert_eq!(config.lidar, LidarConfig::default());
    }

    #[test]
    fn test_json_round_trip_and_errors() {
        let config = EngineConfig {
            background: None,
            bird_color: BirdColor::Red,
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        let back = EngineConfig::from_json(&json).unwrap();
        assert_eq!(back.background, None);
        assert_eq!(back.bird_color, BirdColor::Red);

        assert!(matches!(
            EngineConfig::from_json("{not json"),
            Err(EngineError::Json(_))
        ));
        assert!(matches!(
            EngineConfig::from_json(r#"{"pipe_gap": 1.0}"#),
            Err(EngineError::InvalidPipeGap { .. })
        ));
    }

    #[test]
    fn test_theme_names() {
        assert_eq!(BirdColor::from_str("BLUE"), Some(BirdColor::Blue));
        assert_eq!(PipeColor::from_str("red").map(|c| c.as_str()), Some("red"));
        assert_eq!(Background::from_str("night"), Some(Background::Night));
        assert_eq!(Background::from_str("dusk"), None);
    }
}
