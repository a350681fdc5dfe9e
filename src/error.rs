//! Error types for trueno-raster operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
///
/// Drawing calls validate their arguments before touching the target, so an
/// error never leaves a shape half drawn. A region the target cannot provide
/// is not an error: the call simply draws nothing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// A drawing argument is outside its valid domain.
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Region cell storage does not match its width and height.
    #[error("Region size mismatch: expected {expected} cells, got {actual}")]
    RegionSize {
        /// `width * height`.
        expected: usize,
        /// Number of cells supplied.
        actual: usize,
    },
}

impl Error {
    pub(crate) fn negative_radius(name: &'static str, value: i64) -> Self {
        Self::InvalidArgument {
            name,
            reason: format!("radius must not be negative, got {value}"),
        }
    }

    pub(crate) fn too_few(name: &'static str, min: usize, actual: usize) -> Self {
        Self::InvalidArgument {
            name,
            reason: format!("at least {min} points required, got {actual}"),
        }
    }
}
