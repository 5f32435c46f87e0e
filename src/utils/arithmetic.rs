//! Per-pixel arithmetic and bitwise combines.
//!
//! Every binary operation requires both rasters to have the same size and
//! returns [`TourError::SizeMismatch`](crate::error::TourError) otherwise.

use super::channels::replicate;
use crate::error::{Result, ensure_same_size};
use image::{GrayImage, Rgb, RgbImage, imageops};
use imageproc::map::map_colors2;

/// Saturating per-sample sum
pub fn add(a: &RgbImage, b: &RgbImage) -> Result<RgbImage> {
    ensure_same_size(a.dimensions(), b.dimensions())?;
    Ok(map_colors2(a, b, |p, q| {
        Rgb([
            p[0].saturating_add(q[0]),
            p[1].saturating_add(q[1]),
            p[2].saturating_add(q[2]),
        ])
    }))
}

/// `a * alpha + b * beta + gamma`, rounded and clamped to `0..=255`
pub fn add_weighted(
    a: &RgbImage,
    alpha: f32,
    b: &RgbImage,
    beta: f32,
    gamma: f32,
) -> Result<RgbImage> {
    ensure_same_size(a.dimensions(), b.dimensions())?;
    let blend = |s: u8, t: u8| {
        (s as f32 * alpha + t as f32 * beta + gamma)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    Ok(map_colors2(a, b, |p, q| {
        Rgb([blend(p[0], q[0]), blend(p[1], q[1]), blend(p[2], q[2])])
    }))
}

/// Per-sample bitwise AND
pub fn bitwise_and(a: &RgbImage, b: &RgbImage) -> Result<RgbImage> {
    ensure_same_size(a.dimensions(), b.dimensions())?;
    Ok(map_colors2(a, b, |p, q| {
        Rgb([p[0] & q[0], p[1] & q[1], p[2] & q[2]])
    }))
}

/// Per-sample bitwise NOT of a mask
pub fn bitwise_not(mask: &GrayImage) -> GrayImage {
    let mut inverted = mask.clone();
    imageops::invert(&mut inverted);
    inverted
}

/// Luma conversion of a color raster
pub fn to_gray(image: &RgbImage) -> GrayImage {
    imageops::grayscale(image)
}

/// Zero out every pixel of `roi` where `mask` is set
pub fn black_out(roi: &RgbImage, mask: &GrayImage) -> Result<RgbImage> {
    bitwise_and(roi, &replicate(&bitwise_not(mask)))
}

/// Paste the masked part of `logo` over `roi`
///
/// Pixels of `roi` under the mask are blacked out, pixels of `logo` outside
/// the mask are dropped, and the two are added so the logo keeps its own
/// colors where the mask is set.
pub fn overlay_masked(roi: &RgbImage, logo: &RgbImage, mask: &GrayImage) -> Result<RgbImage> {
    ensure_same_size(roi.dimensions(), logo.dimensions())?;
    ensure_same_size(roi.dimensions(), mask.dimensions())?;

    let background = black_out(roi, mask)?;
    let foreground = bitwise_and(logo, &replicate(mask))?;
    add(&background, &foreground)
}
