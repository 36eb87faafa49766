use std::path::Path;

use camtilt_image::{Image, ImageSize};

use crate::error::IoError;

/// Reads an image from the given file path as 8-bit RGB.
///
/// The method reads any image format supported by the image crate and
/// converts it to three channels.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An image containing the RGB data.
pub fn read_image_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let img = image::open(file_path)?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    log::debug!("read {} from {}", size, file_path.display());

    Ok(Image::new(size, img.into_rgb8().into_raw())?)
}

/// Writes an 8-bit RGB image to the given file path.
///
/// The format is deduced from the file extension.
///
/// # Arguments
///
/// * `file_path` - The path to the output image.
/// * `image` - The image to write.
pub fn write_image_rgb8(file_path: impl AsRef<Path>, image: &Image<u8, 3>) -> Result<(), IoError> {
    let file_path = file_path.as_ref();
    let size = image.size();

    let (width, height) = match (u32::try_from(size.width), u32::try_from(size.height)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => return Err(IoError::ImageTooLarge(size.width, size.height)),
    };

    image::save_buffer(
        file_path,
        image.as_slice(),
        width,
        height,
        image::ExtendedColorType::Rgb8,
    )?;

    log::debug!("wrote {} to {}", size, file_path.display());

    Ok(())
}
