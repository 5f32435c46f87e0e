//! Smoothing and padding.

use super::threshold::sigma_for_kernel;
use crate::error::{Result, TourError};
use crate::models::Region;
use image::{Rgb, RgbImage, imageops};
use imageproc::filter::gaussian_blur_f32;

fn resolve_sigma(ksize: u32, sigma: f32) -> Result<f32> {
    if ksize == 0 || ksize % 2 == 0 {
        return Err(TourError::InvalidParameter(format!(
            "gaussian kernel size must be odd and positive, got {ksize}"
        )));
    }
    if sigma > 0.0 {
        Ok(sigma)
    } else {
        Ok(sigma_for_kernel(ksize))
    }
}

/// Gaussian blur with a `ksize` kernel; `sigma <= 0` derives sigma from `ksize`
pub fn gaussian_blur(image: &RgbImage, ksize: u32, sigma: f32) -> Result<RgbImage> {
    let sigma = resolve_sigma(ksize, sigma)?;
    Ok(gaussian_blur_f32(image, sigma))
}

/// Blur only the pixels inside `region`
///
/// Samples around the region are still read so the blur does not darken or
/// smear its edges.
pub fn blur_region(image: &mut RgbImage, region: Region, ksize: u32, sigma: f32) -> Result<()> {
    region.check(image.width(), image.height())?;
    let sigma = resolve_sigma(ksize, sigma)?;

    let pad = ksize / 2;
    let x0 = region.x.saturating_sub(pad);
    let y0 = region.y.saturating_sub(pad);
    let x1 = (region.right() + pad as u64).min(image.width() as u64) as u32;
    let y1 = (region.bottom() + pad as u64).min(image.height() as u64) as u32;

    let patch = imageops::crop_imm(&*image, x0, y0, x1 - x0, y1 - y0).to_image();
    let blurred = gaussian_blur_f32(&patch, sigma);
    let inner = imageops::crop_imm(
        &blurred,
        region.x - x0,
        region.y - y0,
        region.width,
        region.height,
    )
    .to_image();

    log::debug!("blurred region {region} with ksize {ksize}, sigma {sigma:.2}");
    imageops::replace(image, &inner, region.x as i64, region.y as i64);
    Ok(())
}

/// Pad an image with a constant-colored frame
pub fn copy_make_border(
    image: &RgbImage,
    top: u32,
    bottom: u32,
    left: u32,
    right: u32,
    color: Rgb<u8>,
) -> RgbImage {
    let width = image.width() + left + right;
    let height = image.height() + top + bottom;
    let mut framed = RgbImage::from_pixel(width, height, color);
    imageops::replace(&mut framed, image, left as i64, top as i64);
    framed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> RgbImage {
        RgbImage::from_fn(20, 20, |x, y| {
            if (x + y) % 2 == 0 {
                Rgb([255, 255, 255])
            } else {
                Rgb([0, 0, 0])
            }
        })
    }

    #[test]
    fn blur_region_leaves_outside_untouched() {
        let original = checker();
        let mut image = original.clone();
        let region = Region::new(5, 5, 6, 6);
        blur_region(&mut image, region, 5, 0.0).unwrap();

        assert_eq!(image.get_pixel(0, 0), original.get_pixel(0, 0));
        assert_eq!(image.get_pixel(4, 8), original.get_pixel(4, 8));
        assert_eq!(image.get_pixel(11, 11), original.get_pixel(11, 11));
        let inside = image.get_pixel(8, 8)[0];
        assert!(inside > 50 && inside < 205, "inside {inside}");
    }

    #[test]
    fn blur_region_rejects_out_of_bounds() {
        let mut image = checker();
        assert!(blur_region(&mut image, Region::new(15, 15, 10, 10), 5, 0.0).is_err());
    }

    #[test]
    fn blur_rejects_even_kernel() {
        assert!(gaussian_blur(&checker(), 4, 0.0).is_err());
        assert!(gaussian_blur(&checker(), 0, 1.0).is_err());
        assert!(gaussian_blur(&checker(), 3, 0.0).is_ok());
    }

    #[test]
    fn border_adds_frame_of_color() {
        let image = RgbImage::from_pixel(3, 2, Rgb([9, 9, 9]));
        let framed = copy_make_border(&image, 1, 2, 3, 4, Rgb([0, 0, 255]));
        assert_eq!(framed.dimensions(), (10, 5));
        assert_eq!(framed.get_pixel(0, 0).0, [0, 0, 255]);
        assert_eq!(framed.get_pixel(3, 1).0, [9, 9, 9]);
        assert_eq!(framed.get_pixel(5, 2).0, [9, 9, 9]);
        assert_eq!(framed.get_pixel(6, 2).0, [0, 0, 255]);
        assert_eq!(framed.get_pixel(3, 3).0, [0, 0, 255]);
    }
}
