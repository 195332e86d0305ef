use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("sphere radius must be positive, got {0}")]
    NonPositiveRadius(f32),
    #[error("countdown interval must be positive, got {0} ms")]
    NonPositiveInterval(i32),
    #[error("damping factor must be in (0, 1], got {0}")]
    DampingOutOfRange(f32),
    #[error("invalid camera distance range {min}..{max}")]
    DistanceRange { min: f32, max: f32 },
    #[error("invalid countdown target {0:?}")]
    InvalidTarget(String),
}
