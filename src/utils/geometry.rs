//! Resizing, rotations and projective warps.

use crate::error::{Result, TourError};
use crate::models::{Interpolation, RotateFlag};
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use imageproc::geometric_transformations::{Interpolation as Sampling, Projection, warp_into};
use std::f64::consts::PI;

/// Degrees to radians
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Radians to degrees
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

fn scaled_dim(dim: u32, factor: f64) -> Result<u32> {
    if !(factor.is_finite() && factor > 0.0) {
        return Err(TourError::InvalidParameter(format!(
            "scale factor must be positive, got {factor}"
        )));
    }
    Ok(((dim as f64 * factor).round() as u32).max(1))
}

/// Resize by independent horizontal and vertical factors
pub fn resize(
    image: &RgbImage,
    fx: f64,
    fy: f64,
    interpolation: Interpolation,
) -> Result<RgbImage> {
    let width = scaled_dim(image.width(), fx)?;
    let height = scaled_dim(image.height(), fy)?;

    let filter = match interpolation {
        Interpolation::Nearest => FilterType::Nearest,
        Interpolation::Linear => FilterType::Triangle,
        Interpolation::Cubic => FilterType::CatmullRom,
        Interpolation::Lanczos => FilterType::Lanczos3,
        Interpolation::Area if width <= image.width() && height <= image.height() => {
            return Ok(imageops::thumbnail(image, width, height));
        }
        // area averaging degenerates to bilinear when enlarging
        Interpolation::Area => FilterType::Triangle,
    };
    Ok(imageops::resize(image, width, height, filter))
}

/// Lossless quarter-turn rotations
pub fn rotate(image: &RgbImage, flag: RotateFlag) -> RgbImage {
    match flag {
        RotateFlag::Clockwise90 => imageops::rotate90(image),
        RotateFlag::Rotate180 => imageops::rotate180(image),
        RotateFlag::CounterClockwise90 => imageops::rotate270(image),
    }
}

/// Rotation by `angle_deg` (counter-clockwise) and uniform `scale` about `center`
pub fn rotation_projection(center: (f32, f32), angle_deg: f64, scale: f64) -> Projection {
    let (cx, cy) = center;
    Projection::translate(cx, cy)
        * Projection::rotate(-deg_to_rad(angle_deg) as f32)
        * Projection::scale(scale as f32, scale as f32)
        * Projection::translate(-cx, -cy)
}

/// Canvas size that holds a `width` x `height` image after rotating and scaling it
pub fn rotated_bounds(width: u32, height: u32, angle_deg: f64, scale: f64) -> (u32, u32) {
    let rad = deg_to_rad(angle_deg);
    let (sw, sh) = (width as f64 * scale, height as f64 * scale);
    let new_w = (sw * rad.cos()).abs() + (sh * rad.sin()).abs();
    let new_h = (sw * rad.sin()).abs() + (sh * rad.cos()).abs();
    // cos(90deg) is not exactly zero, absorb the rounding noise before truncating
    let snap = |v: f64| (v + 1e-9).floor().max(1.0) as u32;
    (snap(new_w), snap(new_h))
}

/// Rotate about the center, enlarging the canvas so no corner is cropped
///
/// The image is scaled, rotated, then translated so the old center lands on
/// the center of the enlarged canvas.
pub fn rotate_expanded(image: &RgbImage, angle_deg: f64, scale: f64) -> Result<RgbImage> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(TourError::InvalidParameter(format!(
            "rotation scale must be positive, got {scale}"
        )));
    }
    let (cols, rows) = image.dimensions();
    let (new_w, new_h) = rotated_bounds(cols, rows, angle_deg, scale);

    let center = ((cols / 2) as f32, (rows / 2) as f32);
    let tx = (new_w as f32 - cols as f32) / 2.0;
    let ty = (new_h as f32 - rows as f32) / 2.0;
    let projection = Projection::translate(tx, ty) * rotation_projection(center, angle_deg, scale);

    log::debug!("rotating {cols}x{rows} by {angle_deg} deg into {new_w}x{new_h}");
    Ok(warp_affine(image, &projection, (new_w, new_h)))
}

/// Warp into a `size` canvas; `projection` maps source to destination coordinates.
///
/// The bilinear sampler needs both neighbours of a sample, so the source is
/// sampled through a one pixel edge-replicated frame. Points that land on the
/// last row or column then keep their source value instead of the black fill.
pub fn warp_affine(image: &RgbImage, projection: &Projection, size: (u32, u32)) -> RgbImage {
    let mut out = RgbImage::new(size.0, size.1);
    if image.width() == 0 || image.height() == 0 {
        return out;
    }
    let (max_x, max_y) = (image.width() - 1, image.height() - 1);
    let framed = RgbImage::from_fn(image.width() + 2, image.height() + 2, |x, y| {
        let sx = x.saturating_sub(1).min(max_x);
        let sy = y.saturating_sub(1).min(max_y);
        *image.get_pixel(sx, sy)
    });
    let shifted = *projection * Projection::translate(-1.0, -1.0);
    warp_into(&framed, &shifted, Sampling::Bilinear, Rgb([0, 0, 0]), &mut out);
    out
}

#[allow(clippy::needless_range_loop)]
fn quad_area(quad: &[(f32, f32); 4]) -> f32 {
    let mut twice = 0.0;
    for i in 0..4 {
        let (x0, y0) = quad[i];
        let (x1, y1) = quad[(i + 1) % 4];
        twice += x0 * y1 - x1 * y0;
    }
    (twice / 2.0).abs()
}

/// Warp so the `from` quad lands on the `to` quad
pub fn warp_perspective(
    image: &RgbImage,
    from: [(f32, f32); 4],
    to: [(f32, f32); 4],
    size: (u32, u32),
) -> Result<RgbImage> {
    if quad_area(&from) < 1e-3 || quad_area(&to) < 1e-3 {
        return Err(TourError::InvalidParameter(format!(
            "perspective quads must enclose an area, got {from:?} -> {to:?}"
        )));
    }
    let projection = Projection::from_control_points(from, to).ok_or_else(|| {
        TourError::InvalidParameter(format!("no projection maps {from:?} onto {to:?}"))
    })?;
    Ok(warp_affine(image, &projection, size))
}

fn last_index(width: u32, height: u32) -> (f32, f32) {
    (width.saturating_sub(1) as f32, height.saturating_sub(1) as f32)
}

/// Quad inset at the top edge by `inset` (a fraction of the width), giving a
/// keystone view of a `width` x `height` image.
///
/// Images narrower or shorter than 2px give a degenerate quad.
pub fn keystone_quad(width: u32, height: u32, inset: f32) -> [(f32, f32); 4] {
    let (w, h) = last_index(width, height);
    [
        (w * inset, 0.0),
        (w * (1.0 - inset), 0.0),
        (w, h),
        (0.0, h),
    ]
}

/// Corners of a `width` x `height` image, clockwise from top-left
pub fn corners(width: u32, height: u32) -> [(f32, f32); 4] {
    let (w, h) = last_index(width, height);
    [(0.0, 0.0), (w, 0.0), (w, h), (0.0, h)]
}
