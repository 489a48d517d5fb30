use thiserror::Error;

/// Errors raised while building the surface or animation parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Surface dimensions must both be positive and fit in memory
    #[error("invalid surface dimensions {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// World window axis with an empty or non-finite range
    #[error("invalid world window range [{min}, {max}]")]
    InvalidWorldWindow { min: f32, max: f32 },

    /// Animation parameter out of range
    #[error("invalid animation config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
