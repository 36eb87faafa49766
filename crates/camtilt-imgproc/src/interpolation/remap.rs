use crate::error::WarpError;
use crate::parallel;

use super::interpolate::interpolate_pixel;
use super::InterpolationMode;
use camtilt_image::Image;

/// Apply generic geometric transformation to an image.
///
/// Destination pixels whose coordinates fall outside the source are left untouched.
///
/// # Arguments
///
/// * `src` - The input image container with shape (height, width, C).
/// * `dst` - The output image container with shape (height, width, C).
/// * `map_x` - The x coordinates of the pixels to interpolate.
/// * `map_y` - The y coordinates of the pixels to interpolate.
/// * `interpolation` - The interpolation mode to use.
///
/// # Errors
///
/// * The map_x and map_y must have the same size.
/// * The output image must have the same size as the map_x and map_y.
pub fn remap<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    map_x: &Image<f32, 1>,
    map_y: &Image<f32, 1>,
    interpolation: InterpolationMode,
) -> Result<(), WarpError> {
    if map_x.size() != map_y.size() {
        return Err(WarpError::InvalidMapSize(
            map_x.cols(),
            map_x.rows(),
            map_y.cols(),
            map_y.rows(),
        ));
    }

    if dst.size() != map_x.size() {
        return Err(WarpError::InvalidMapSize(
            map_x.cols(),
            map_x.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let (src_cols, src_rows) = (src.cols() as f32, src.rows() as f32);

    // parallelize the remap operation by rows
    parallel::par_iter_rows_resample(dst, map_x, map_y, |&x, &y, dst_pixel| {
        // check if the position is within the bounds of the src image
        if x >= 0.0f32 && x < src_cols && y >= 0.0f32 && y < src_rows {
            dst_pixel.copy_from_slice(&interpolate_pixel(src, x, y, interpolation));
        }
    });

    Ok(())
}
