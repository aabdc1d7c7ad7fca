use thiserror::Error;

/// Errors surfaced by engine construction and misuse
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("screen dimensions must be positive and finite, got {width}x{height}")]
    InvalidScreen { width: f32, height: f32 },
    #[error("pipe gap {gap} must be positive and below {max}")]
    InvalidPipeGap { gap: f32, max: f32 },
    #[error("pipe spacing {spacing} must be at least the scroll step {min}")]
    InvalidPipeSpacing { spacing: f32, min: f32 },
    #[error("lidar ray count {rays} outside 1..={max}")]
    InvalidRayCount { rays: usize, max: usize },
    #[error("lidar arc {0} degrees outside (0, 360]")]
    InvalidLidarArc(f32),
    #[error("lidar max range {0} must be positive and finite")]
    InvalidLidarRange(f32),
    #[error("tick called after the episode ended; reset first")]
    EpisodeOver,
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
}
