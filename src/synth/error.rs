use thiserror::Error;

/// Rejected synthesis parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SynthError {
    #[error("image size must be at least one pixel")]
    EmptyImage,
    #[error("pitch must be a finite positive number of pixels, got {0}")]
    InvalidPitch(f64),
    #[error("noise level must be finite and non-negative, got {0}")]
    InvalidNoiseLevel(f64),
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("center defect width must be finite and positive, got {0}")]
    InvalidCenterWidth(f64),
    #[error("blob radius range [{min}, {max}) must be non-empty and start above zero")]
    InvalidBlobRadius { min: u32, max: u32 },
    #[error("blob amplitude range [{min}, {max}) is empty")]
    InvalidBlobAmplitude { min: i32, max: i32 },
    #[error("no room to place blob defects in a {size}x{size} image")]
    EmptyPlacementWindow { size: usize },
}
