#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use camtilt_geometry as geometry;

#[doc(inline)]
pub use camtilt_image as image;

#[doc(inline)]
pub use camtilt_imgproc as imgproc;

#[doc(inline)]
pub use camtilt_io as io;
