use thiserror::Error;

/// Errors produced by the canvas core.
///
/// Every variant is recoverable: the operation that returned it leaves the
/// surface and the stroke engine exactly as they were before the call.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Invalid canvas dimensions: {width}x{height} (both must be positive)")]
    InvalidDimension { width: i64, height: i64 },

    #[error("Point ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode image: {0}")]
    Encode(String),
}

impl From<image::ImageError> for CanvasError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(io) => CanvasError::Io(io),
            other => CanvasError::Encode(other.to_string()),
        }
    }
}

/// Result type for canvas operations
pub type CanvasResult<T> = Result<T, CanvasError>;
