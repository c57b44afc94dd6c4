// SPDX-License-Identifier: MPL-2.0
use thiserror::Error as ThisError;

#[derive(Debug, Clone, ThisError)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Image Error: {0}")]
    Image(String),
    #[error("Surface Error: {0}")]
    Surface(#[from] SurfaceError),
    #[error("Zoom Error: {0}")]
    Zoom(#[from] ZoomError),
}

/// Rejected 32-bit surfaces handed to the viewport.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum SurfaceError {
    /// Row stride is shorter than `width * 4` bytes.
    #[error("stride {stride} is smaller than the minimum row length {min}")]
    StrideTooSmall { stride: usize, min: usize },

    /// Pixel buffer does not cover every row at the given stride.
    #[error("buffer holds {len} bytes but {required} are required")]
    BufferTooShort { len: usize, required: usize },

    /// `stride * height` does not fit in memory.
    #[error("surface of {width}x{height} pixels is too large")]
    DimensionsOverflow { width: u32, height: u32 },
}

/// Zoom requests that violate the caller contract.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum ZoomError {
    /// Zoom factor is zero, negative or not finite.
    #[error("zoom factor must be positive and finite, got {0}")]
    NonPositive(f64),

    /// Best-fit zoom needs a source image with non-zero dimensions.
    #[error("cannot fit an empty image")]
    EmptyImage,

    /// Resampled bitmap would exceed the allocation limit.
    #[error("zoomed bitmap of {width}x{height} pixels is too large")]
    TooLarge { width: u32, height: u32 },
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
