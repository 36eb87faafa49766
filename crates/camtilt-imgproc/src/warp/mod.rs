//! Geometric image transformations using perspective warps.
//!
//! - [`warp_perspective`] resamples an image under any 3x3 projective transform.
//! - [`warp_perspective_tilt`] builds the transform of a tilted pinhole camera
//!   with [`camtilt_geometry::perspective_matrix`] and warps onto a canvas
//!   large enough to hold the whole image.
//!
//! # Examples
//!
//! ```no_run
//! use camtilt_geometry::PerspectiveParams;
//! use camtilt_image::Image;
//! use camtilt_imgproc::{interpolation::InterpolationMode, warp::warp_perspective_tilt};
//!
//! let image = Image::<f32, 3>::from_size_val([640, 480].into(), 0.5).unwrap();
//! let params = PerspectiveParams::new(0.5, 0.3);
//! let (warped, _transform) =
//!     warp_perspective_tilt(&image, &params, InterpolationMode::Bilinear).unwrap();
//! ```

mod perspective;

pub use perspective::{warp_perspective, warp_perspective_tilt};
