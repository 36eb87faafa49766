use std::f64::consts::{FRAC_PI_4, PI};

use serde::{Deserialize, Serialize};

use crate::{
    error::PerspectiveError,
    matrix::Mat3,
    stages::{center, intrinsics, pull_back, rotate_x, rotate_z, to_camera_frame, to_plane_3d},
};

/// Default field of view in radians.
pub const DEFAULT_FOV: f64 = FRAC_PI_4;

/// How the real valued canvas side length is turned into pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanvasRounding {
    /// Truncate towards zero. The canvas may be up to one pixel smaller than
    /// the projected extent.
    #[default]
    Floor,
    /// Round up so the canvas always contains the projected extent.
    Ceil,
}

/// Size of the output canvas in pixels.
///
/// The canvas is always square since the field of view is shared by both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    /// Width of the canvas in pixels
    pub width: usize,
    /// Height of the canvas in pixels
    pub height: usize,
}

impl std::fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// The result of [`perspective_matrix`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveTransform {
    /// The 3x3 projective transform mapping source pixels to canvas pixels.
    pub matrix: Mat3,
    /// The size of the canvas the transformed image fits in.
    pub output_size: CanvasSize,
    /// The focal length of the virtual camera in pixels.
    pub focal_length: f64,
    /// The distance between the camera and the image center.
    pub camera_distance: f64,
    /// The width and height of the source image.
    pub source_size: (f64, f64),
}

impl PerspectiveTransform {
    /// Project the four corners of the source image onto the canvas.
    ///
    /// The corners are returned in the order top-left, top-right,
    /// bottom-right, bottom-left.
    pub fn project_corners(&self) -> Option<[(f64, f64); 4]> {
        let (w, h) = self.source_size;
        Some([
            self.matrix.transform_point(0.0, 0.0)?,
            self.matrix.transform_point(w, 0.0)?,
            self.matrix.transform_point(w, h)?,
            self.matrix.transform_point(0.0, h)?,
        ])
    }
}

/// Parameters of the virtual camera.
///
/// All angles are in radians. Missing fields fall back to [`Default`] when
/// deserialized, so a config file only needs the values it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerspectiveParams {
    /// Clockwise rotation of the image around the optical axis.
    pub theta: f64,
    /// Tilt of the camera around its x-axis.
    pub phi: f64,
    /// Field of view, shared by both axes.
    pub fov: f64,
    /// Canvas rounding policy.
    pub rounding: CanvasRounding,
}

impl Default for PerspectiveParams {
    fn default() -> Self {
        Self {
            theta: 0.0,
            phi: 0.0,
            fov: DEFAULT_FOV,
            rounding: CanvasRounding::Floor,
        }
    }
}

impl PerspectiveParams {
    /// Create parameters with the default field of view.
    pub fn new(theta: f64, phi: f64) -> Self {
        Self {
            theta,
            phi,
            ..Default::default()
        }
    }

    /// Set the field of view.
    pub fn with_fov(mut self, fov: f64) -> Self {
        self.fov = fov;
        self
    }

    /// Set the canvas rounding policy.
    pub fn with_rounding(mut self, rounding: CanvasRounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Build the perspective transform for an image of the given size.
    pub fn build(
        &self,
        image_w: f64,
        image_h: f64,
    ) -> Result<PerspectiveTransform, PerspectiveError> {
        build_with_rounding(
            image_w,
            image_h,
            self.theta,
            self.phi,
            self.fov,
            self.rounding,
        )
    }
}

/// Compute the perspective transform of a flat image seen through a rotated pinhole camera.
///
/// The image is placed in 3d at `z = 0`, centered, rotated by `phi` around the
/// camera x-axis and then by `theta` around the camera z-axis, and pulled back
/// far enough that a camera with the given field of view sees it under any
/// rotation. The returned canvas is square.
///
/// # Arguments
///
/// * `image_w` - The width of the source image in pixels.
/// * `image_h` - The height of the source image in pixels.
/// * `theta` - The in-plane clockwise rotation in radians.
/// * `phi` - The tilt in radians.
/// * `fov` - The field of view in radians, in the open interval (0, pi). See [`DEFAULT_FOV`].
///
/// # Returns
///
/// The 3x3 transform and the canvas size. The canvas side is truncated, see
/// [`CanvasRounding::Floor`].
///
/// # Errors
///
/// Fails before any matrix is built if a dimension is not positive, the field
/// of view is out of range, an angle is not finite or the canvas would be empty.
///
/// # Example
///
/// ```
/// use camtilt_geometry::perspective::{perspective_matrix, DEFAULT_FOV};
/// use std::f64::consts::PI;
///
/// let transform = perspective_matrix(640.0, 480.0, PI / 6.0, PI / 6.0, DEFAULT_FOV).unwrap();
///
/// assert_eq!(transform.output_size.width, 534);
/// assert_eq!(transform.output_size.height, 534);
/// ```
pub fn perspective_matrix(
    image_w: f64,
    image_h: f64,
    theta: f64,
    phi: f64,
    fov: f64,
) -> Result<PerspectiveTransform, PerspectiveError> {
    build_with_rounding(image_w, image_h, theta, phi, fov, CanvasRounding::Floor)
}

fn build_with_rounding(
    image_w: f64,
    image_h: f64,
    theta: f64,
    phi: f64,
    fov: f64,
    rounding: CanvasRounding,
) -> Result<PerspectiveTransform, PerspectiveError> {
    if !(image_w > 0.0 && image_w.is_finite() && image_h > 0.0 && image_h.is_finite()) {
        return Err(PerspectiveError::InvalidDimension {
            width: image_w,
            height: image_h,
        });
    }

    if !theta.is_finite() || !phi.is_finite() {
        return Err(PerspectiveError::InvalidAngle { theta, phi });
    }

    // NOTE: the negated comparison also rejects NaN
    if !(fov > 0.0 && fov < PI) {
        return Err(PerspectiveError::InvalidFieldOfView(fov));
    }

    let half_fov = fov / 2.0;
    let (sin_half, tan_half) = (half_fov.sin(), half_fov.tan());
    if sin_half == 0.0 || !sin_half.is_finite() || tan_half == 0.0 || !tan_half.is_finite() {
        return Err(PerspectiveError::InvalidFieldOfView(fov));
    }

    // the diagonal bounds the image extent under any rotation
    let diagonal = image_w.hypot(image_h);

    // a cone of half angle fov / 2 contains a sphere of radius diagonal / 2 from this distance
    let distance = diagonal / (2.0 * sin_half);

    // the image plane touches the nearest point of that sphere
    let focal = distance - diagonal / 2.0;

    let side = 2.0 * focal * tan_half;
    if !side.is_finite() {
        return Err(PerspectiveError::InvalidFieldOfView(fov));
    }

    let side_px = match rounding {
        CanvasRounding::Floor => side.trunc() as usize,
        CanvasRounding::Ceil => side.ceil() as usize,
    };

    if side_px == 0 {
        return Err(PerspectiveError::EmptyCanvas(side));
    }

    let principal = side_px as f64 / 2.0;

    let projection = intrinsics(focal, principal, principal)
        * pull_back(distance)
        * rotate_z(theta)
        * rotate_x(phi)
        * to_camera_frame()
        * center(image_w, image_h);

    let matrix: Mat3 = projection * to_plane_3d();

    Ok(PerspectiveTransform {
        matrix,
        output_size: CanvasSize {
            width: side_px,
            height: side_px,
        },
        focal_length: focal,
        camera_distance: distance,
        source_size: (image_w, image_h),
    })
}
