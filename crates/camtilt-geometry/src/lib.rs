#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the geometry module.
pub mod error;

/// Fixed-size matrix types.
pub mod matrix;

/// Perspective matrix builder for a rotated pinhole camera.
pub mod perspective;

/// Coordinate frame transforms composed by the perspective builder.
pub mod stages;

pub use crate::error::PerspectiveError;
pub use crate::matrix::{Mat3, Mat3x4, Mat4, Mat4x3, Matrix};
pub use crate::perspective::{
    perspective_matrix, CanvasRounding, CanvasSize, PerspectiveParams, PerspectiveTransform,
    DEFAULT_FOV,
};
