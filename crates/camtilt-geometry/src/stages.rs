//! The individual coordinate frame transforms of the perspective pipeline.
//!
//! Each function builds one homogeneous matrix. They are composed right to
//! left in [`crate::perspective::perspective_matrix`]:
//!
//! ```text
//! K * pull_back * rotate_z(theta) * rotate_x(phi) * to_camera_frame * center * to_plane_3d
//! ```

use crate::matrix::{Mat3x4, Mat4, Mat4x3};

/// Embed the 2d image plane in 3d space at `z = 0`.
///
/// `(x, y, 1)` maps to `(x, y, 0, 1)`.
#[rustfmt::skip]
pub fn to_plane_3d() -> Mat4x3 {
    Mat4x3::from_rows([
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0],
    ])
}

/// Translate the image so that its center is the origin.
///
/// # Arguments
///
/// * `width` - The image width in pixels.
/// * `height` - The image height in pixels.
pub fn center(width: f64, height: f64) -> Mat4 {
    let mut m = Mat4::identity();
    m[(0, 3)] = -width / 2.0;
    m[(1, 3)] = -height / 2.0;
    m
}

/// Convert from image axes (y down) to a right-handed camera frame (y up).
///
/// This is a 180 degree rotation around the z-axis.
pub fn to_camera_frame() -> Mat4 {
    let mut m = Mat4::identity();
    m[(0, 0)] = -1.0;
    m[(1, 1)] = -1.0;
    m
}

/// Rotate by `theta` radians around the camera z-axis.
pub fn rotate_z(theta: f64) -> Mat4 {
    let (s, c) = theta.sin_cos();
    let mut m = Mat4::identity();
    m[(0, 0)] = c;
    m[(0, 1)] = -s;
    m[(1, 0)] = s;
    m[(1, 1)] = c;
    m
}

/// Rotate by `phi` radians around the camera x-axis.
pub fn rotate_x(phi: f64) -> Mat4 {
    let (s, c) = phi.sin_cos();
    let mut m = Mat4::identity();
    m[(1, 1)] = c;
    m[(1, 2)] = -s;
    m[(2, 1)] = s;
    m[(2, 2)] = c;
    m
}

/// Move the plane `distance` units away from the camera along the optical axis.
pub fn pull_back(distance: f64) -> Mat4 {
    let mut m = Mat4::identity();
    m[(2, 3)] = -distance;
    m
}

/// Pinhole intrinsics as a 3x4 projection.
///
/// The homogeneous scale of a projected point is its depth `z` with no
/// constant offset; an offset there pushes the corners of small images more
/// than a pixel past the canvas edge.
///
/// # Arguments
///
/// * `focal` - The focal length in pixels, shared by both axes.
/// * `cx` - The x coordinate of the principal point.
/// * `cy` - The y coordinate of the principal point.
#[rustfmt::skip]
pub fn intrinsics(focal: f64, cx: f64, cy: f64) -> Mat3x4 {
    Mat3x4::from_rows([
        [focal, 0.0,   cx,  0.0],
        [0.0,   focal, cy,  0.0],
        [0.0,   0.0,   1.0, 0.0],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn apply(m: &Mat4, p: [f64; 3]) -> [f64; 3] {
        let v = *m * crate::matrix::Matrix::<4, 1>::from_rows([[p[0]], [p[1]], [p[2]], [1.0]]);
        [v[(0, 0)], v[(1, 0)], v[(2, 0)]]
    }

    #[test]
    fn plane_embedding_drops_z() {
        let p = to_plane_3d() * crate::matrix::Matrix::<3, 1>::from_rows([[3.0], [4.0], [1.0]]);
        assert_eq!(p.0, [[3.0], [4.0], [0.0], [1.0]]);
    }

    #[test]
    fn center_moves_middle_to_origin() {
        let p = apply(&center(640.0, 480.0), [320.0, 240.0, 0.0]);
        assert_eq!(p, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn camera_frame_flips_xy() {
        let p = apply(&to_camera_frame(), [1.0, 2.0, 3.0]);
        assert_eq!(p, [-1.0, -2.0, 3.0]);
    }

    #[test]
    fn rotate_z_quarter_turn() {
        let p = apply(&rotate_z(FRAC_PI_2), [1.0, 0.0, 5.0]);
        assert_relative_eq!(p[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(p[1], 1.0, epsilon = 1e-12);
        assert_relative_eq!(p[2], 5.0, epsilon = 1e-12);
    }

    #[test]
    fn rotate_x_quarter_turn() {
        let p = apply(&rotate_x(FRAC_PI_2), [7.0, 1.0, 0.0]);
        assert_relative_eq!(p[0], 7.0, epsilon = 1e-12);
        assert_relative_eq!(p[1], 0.0, epsilon = 1e-12);
        assert_relative_eq!(p[2], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn pull_back_translates_z() {
        let p = apply(&pull_back(10.0), [1.0, 2.0, 3.0]);
        assert_eq!(p, [1.0, 2.0, -7.0]);
    }

    #[test]
    fn intrinsics_layout() {
        let k = intrinsics(500.0, 320.0, 240.0);
        assert_eq!(k[(0, 0)], 500.0);
        assert_eq!(k[(1, 1)], 500.0);
        assert_eq!(k[(0, 2)], 320.0);
        assert_eq!(k[(1, 2)], 240.0);
        assert_eq!(k.0[2], [0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn intrinsics_scale_is_depth() {
        let k = intrinsics(500.0, 320.0, 240.0);
        let p = k * crate::matrix::Matrix::<4, 1>::from_rows([[2.0], [-1.0], [-925.0], [1.0]]);
        assert_eq!(p[(2, 0)], -925.0);
    }
}
