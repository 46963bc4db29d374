//! Error types for lbp-texture
//!
//! The two failure kinds callers usually branch on have their own variants:
//! [`LbpError::InvalidInput`] for images that cannot be normalized to gray
//! and [`LbpError::InvalidRadius`] for a sampling radius of zero.

use thiserror::Error;

/// Errors that can occur while computing texture descriptors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LbpError {
    /// Input image must have 1 or 3 channels
    #[error("invalid input: image must have 1 or 3 channels, got {channels}")]
    InvalidInput {
        /// Channel count of the rejected image
        channels: u32,
    },

    /// Sampling radius must be at least 1
    #[error("invalid radius: {0} (must be >= 1)")]
    InvalidRadius(u32),

    /// Invalid argument other than the radius
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Core library error
    #[error("core error: {0}")]
    Core(lbp_core::Error),
}

impl From<lbp_core::Error> for LbpError {
    fn from(err: lbp_core::Error) -> Self {
        match err {
            lbp_core::Error::UnsupportedChannelCount(channels) => {
                LbpError::InvalidInput { channels }
            }
            other => LbpError::Core(other),
        }
    }
}

/// Result type for texture operations
pub type LbpResult<T> = Result<T, LbpError>;
