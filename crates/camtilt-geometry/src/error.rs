/// An error type for the perspective matrix construction.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PerspectiveError {
    /// The image width or height is not a positive finite number.
    #[error("Invalid image dimension: width {width}, height {height}")]
    InvalidDimension {
        /// The requested image width.
        width: f64,
        /// The requested image height.
        height: f64,
    },

    /// The field of view is outside the open interval (0, pi).
    #[error("Invalid field of view: {0} radians, expected a value in (0, pi)")]
    InvalidFieldOfView(f64),

    /// A rotation angle is NaN or infinite.
    #[error("Invalid rotation angle: theta {theta}, phi {phi}")]
    InvalidAngle {
        /// The in-plane rotation angle.
        theta: f64,
        /// The tilt angle.
        phi: f64,
    },

    /// The derived canvas side length rounds down to zero pixels.
    #[error("Output canvas is empty: side length {0} pixels")]
    EmptyCanvas(f64),

    /// The matrix has no inverse.
    #[error("Matrix is singular")]
    SingularMatrix,
}
