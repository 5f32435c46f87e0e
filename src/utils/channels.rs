//! Channel split/merge and pixel inspection.

use crate::error::{Result, ensure_same_size};
use crate::models::ImageInfo;
use image::{GrayImage, ImageBuffer, Luma, Pixel, Rgb, RgbImage};
use imageproc::map::{blue_channel, green_channel, map_colors, red_channel};

/// Split a color raster into its `[R, G, B]` planes
pub fn split(image: &RgbImage) -> [GrayImage; 3] {
    [red_channel(image), green_channel(image), blue_channel(image)]
}

/// Interleave three planes back into a color raster
pub fn merge(planes: &[GrayImage; 3]) -> Result<RgbImage> {
    let [r, g, b] = planes;
    ensure_same_size(r.dimensions(), g.dimensions())?;
    ensure_same_size(r.dimensions(), b.dimensions())?;

    let (width, height) = r.dimensions();
    Ok(ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([
            r.get_pixel(x, y)[0],
            g.get_pixel(x, y)[0],
            b.get_pixel(x, y)[0],
        ])
    }))
}

/// Turn a single-channel mask into a 3-channel one with equal planes
pub fn replicate(mask: &GrayImage) -> RgbImage {
    map_colors(mask, |Luma([v])| Rgb([v, v, v]))
}

/// Sample triple at `(row, col)`, `None` outside the image
pub fn pixel_at(image: &RgbImage, row: u32, col: u32) -> Option<[u8; 3]> {
    image.get_pixel_checked(col, row).map(|p| p.0)
}

/// Shape of a color raster
pub fn info(image: &RgbImage) -> ImageInfo {
    ImageInfo {
        rows: image.height(),
        cols: image.width(),
        channels: Rgb::<u8>::CHANNEL_COUNT,
    }
}

/// Shape of a grayscale raster
pub fn info_gray(image: &GrayImage) -> ImageInfo {
    ImageInfo {
        rows: image.height(),
        cols: image.width(),
        channels: Luma::<u8>::CHANNEL_COUNT,
    }
}
