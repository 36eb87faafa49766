use argh::FromArgs;
use std::path::PathBuf;

use camtilt::{
    geometry::{CanvasRounding, PerspectiveParams},
    image::Image,
    imgproc::{interpolation::InterpolationMode, warp::warp_perspective_tilt},
    io::functional as F,
};

/// Render an image as seen through a tilted and rotated pinhole camera
#[derive(FromArgs)]
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// path to write the transformed image to
    #[argh(option, short = 'o', default = "PathBuf::from(\"transformed.png\")")]
    output_path: PathBuf,

    /// json file with the camera parameters, overrides the angle options
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,

    /// clockwise rotation around the optical axis in degrees
    #[argh(option, short = 't', default = "30.0")]
    theta: f64,

    /// tilt around the camera x-axis in degrees
    #[argh(option, short = 'p', default = "30.0")]
    phi: f64,

    /// field of view in degrees
    #[argh(option, short = 'f', default = "45.0")]
    fov: f64,

    /// round the canvas size up instead of truncating it
    #[argh(switch)]
    ceil: bool,

    /// use nearest neighbor instead of bilinear interpolation
    #[argh(switch)]
    nearest: bool,
}

fn load_params(args: &Args) -> Result<PerspectiveParams, Box<dyn std::error::Error>> {
    if let Some(config) = &args.config {
        let params: PerspectiveParams = serde_json::from_str(&std::fs::read_to_string(config)?)?;
        log::info!("loaded camera parameters from {}", config.display());
        return Ok(params);
    }

    let rounding = if args.ceil {
        CanvasRounding::Ceil
    } else {
        CanvasRounding::Floor
    };

    Ok(
        PerspectiveParams::new(args.theta.to_radians(), args.phi.to_radians())
            .with_fov(args.fov.to_radians())
            .with_rounding(rounding),
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();
    let params = load_params(&args)?;

    // read the image
    let image = F::read_image_rgb8(&args.image_path)?;
    let image: Image<f32, 3> = image.cast()?;

    let interpolation = if args.nearest {
        InterpolationMode::Nearest
    } else {
        InterpolationMode::Bilinear
    };

    let (warped, transform) = warp_perspective_tilt(&image, &params, interpolation)?;

    log::info!(
        "theta {:.4} rad, phi {:.4} rad, fov {:.4} rad: {} -> {}",
        params.theta,
        params.phi,
        params.fov,
        image.size(),
        transform.output_size,
    );
    log::debug!("perspective matrix {:?}", transform.matrix.rows());

    // back to bytes, rounding and clamping each channel
    let output: Image<u8, 3> = warped.to_dtype()?;

    F::write_image_rgb8(&args.output_path, &output)?;
    log::info!("saved {}", args.output_path.display());

    Ok(())
}
