use camtilt_geometry::PerspectiveError;
use camtilt_image::ImageError;

/// An error type for the warp operations.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WarpError {
    /// Error when allocating or accessing an image.
    #[error("Image error. {0}")]
    Image(#[from] ImageError),

    /// Error when building or inverting the transform.
    #[error("Perspective error. {0}")]
    Perspective(#[from] PerspectiveError),

    /// Error when the coordinate maps do not match the destination size.
    #[error("Map size ({0}, {1}) does not match the destination size ({2}, {3})")]
    InvalidMapSize(usize, usize, usize, usize),
}
