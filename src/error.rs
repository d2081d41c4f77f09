use thiserror::Error;

/// Errors raised while building or generating a terrain.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TerrainError {
    #[error("grid exponent must be between 1 and {max}, got {got}")]
    InvalidExponent { got: u32, max: u32 },

    #[error("roughness must be within [0, 1], got {0}")]
    InvalidRoughness(f32),

    #[error("coordinate ({x}, {y}) is outside the height field")]
    OutOfBounds { x: isize, y: isize },

    #[error("no in-bounds samples around ({x}, {y})")]
    NoSamples { x: isize, y: isize },

    #[error("invalid terrain settings: {0}")]
    Settings(String),
}
