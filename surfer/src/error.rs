//! Module containing the universal error type
use crate::uniforms::View;
use thiserror::Error;

/// Universal error type for Surfer
#[derive(Error, Debug)]
pub enum Error {
    /// View index is not 0 or 1
    #[error("view index {0} is out of range; expected 0 or 1")]
    BadViewIndex(usize),

    /// Camera matrix could not be inverted
    #[error("camera matrix for the {0} view is singular")]
    SingularCamera(View),

    /// Image must have at least one pixel in each direction
    #[error("bad image size {0}x{1}; both dimensions must be non-zero")]
    BadImageSize(u32, u32),

    /// Steering input could not be read
    #[error("input error: {0}")]
    Input(String),
}
