use camtilt_geometry::{Mat3, PerspectiveParams, PerspectiveTransform};
use camtilt_image::{Image, ImageSize};

use crate::{
    error::WarpError,
    interpolation::{grid::meshgrid_from_fn, remap, InterpolationMode},
};

/// Applies a perspective transformation to an image.
///
/// Each destination pixel is mapped back through the inverse of `m` and
/// sampled from `src`. Pixels that fall outside the source are left untouched.
///
/// * `src` - The input image with shape (height, width, channels).
/// * `dst` - The output image with shape (height, width, channels).
/// * `m` - The 3x3 perspective transformation matrix src -> dst.
/// * `interpolation` - The interpolation mode to use.
///
/// # Errors
///
/// Fails if `m` is singular.
///
/// # Example
///
/// ```
/// use camtilt_geometry::Mat3;
/// use camtilt_image::{Image, ImageSize};
/// use camtilt_imgproc::interpolation::InterpolationMode;
/// use camtilt_imgproc::warp::warp_perspective;
///
/// let src = Image::<f32, 1>::new(
///   ImageSize {
///     width: 4,
///     height: 5,
///   },
///   vec![0.0f32; 4 * 5]
/// ).unwrap();
///
/// let m = Mat3::from_rows([[1.0, 0.0, -1.0], [0.0, 1.0, 1.0], [0.0, 0.0, 1.0]]);
///
/// let mut dst = Image::<f32, 1>::from_size_val(
///   ImageSize {
///     width: 2,
///     height: 3,
///   },
///   0.0
/// ).unwrap();
///
/// warp_perspective(&src, &mut dst, &m, InterpolationMode::Bilinear).unwrap();
///
/// assert_eq!(dst.size().width, 2);
/// assert_eq!(dst.size().height, 3);
/// ```
pub fn warp_perspective<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    m: &Mat3,
    interpolation: InterpolationMode,
) -> Result<(), WarpError> {
    let inv_m = m.inverse()?;

    // create meshgrid to find corresponding positions in src from dst
    let (dst_rows, dst_cols) = (dst.rows(), dst.cols());
    let (map_x, map_y) = meshgrid_from_fn(dst_cols, dst_rows, |x, y| {
        // points mapped to infinity are marked as outside the source
        let (u, v) = inv_m
            .transform_point(x as f64, y as f64)
            .unwrap_or((-1.0, -1.0));
        Ok((u as f32, v as f32))
    })?;

    remap(src, dst, &map_x, &map_y, interpolation)?;

    Ok(())
}

/// Renders an image as seen through a rotated pinhole camera.
///
/// Builds the transform for `src` with [`PerspectiveParams::build`], allocates
/// a zero filled canvas of the derived size and warps `src` onto it.
///
/// # Arguments
///
/// * `src` - The input image with shape (height, width, channels).
/// * `params` - The camera rotation, field of view and canvas rounding.
/// * `interpolation` - The interpolation mode to use.
///
/// # Returns
///
/// The warped image together with the transform used to produce it.
///
/// # Errors
///
/// Fails if the parameters are rejected by the geometry builder.
pub fn warp_perspective_tilt<const C: usize>(
    src: &Image<f32, C>,
    params: &PerspectiveParams,
    interpolation: InterpolationMode,
) -> Result<(Image<f32, C>, PerspectiveTransform), WarpError> {
    let transform = params.build(src.width() as f64, src.height() as f64)?;

    log::debug!(
        "tilt warp {} -> canvas {} (focal length {:.3}, camera distance {:.3})",
        src.size(),
        transform.output_size,
        transform.focal_length,
        transform.camera_distance,
    );

    let canvas_size = ImageSize {
        width: transform.output_size.width,
        height: transform.output_size.height,
    };

    let mut dst = Image::from_size_val(canvas_size, 0.0)?;
    warp_perspective(src, &mut dst, &transform.matrix, interpolation)?;

    Ok((dst, transform))
}
