//! Global and adaptive thresholding.

use crate::error::{Result, TourError};
use crate::models::{AdaptiveMethod, ThresholdKind};
use image::{GrayImage, Luma};
use imageproc::contrast;
use imageproc::filter::{box_filter, gaussian_blur_f32};
use imageproc::map::{map_colors, map_colors2};

/// Apply a global threshold to a grayscale raster
pub fn threshold(gray: &GrayImage, thresh: u8, max_value: u8, kind: ThresholdKind) -> GrayImage {
    map_colors(gray, |Luma([src])| {
        let above = src > thresh;
        let out = match kind {
            ThresholdKind::Binary if above => max_value,
            ThresholdKind::BinaryInv if !above => max_value,
            ThresholdKind::Trunc if above => thresh,
            ThresholdKind::ToZero if above => src,
            ThresholdKind::ToZeroInv if !above => src,
            ThresholdKind::Trunc => src,
            _ => 0,
        };
        Luma([out])
    })
}

/// Threshold level that best separates the histogram into two classes
pub fn otsu_level(gray: &GrayImage) -> u8 {
    contrast::otsu_level(gray)
}

/// Standard deviation used for a Gaussian kernel of `ksize` taps when none is given
pub fn sigma_for_kernel(ksize: u32) -> f32 {
    0.3 * ((ksize as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Threshold each pixel against statistics of its `block_size` neighbourhood
///
/// A pixel passes when it is brighter than the local mean minus `c`.
/// `block_size` must be odd and at least 3, and only the binary kinds are
/// accepted.
pub fn adaptive_threshold(
    gray: &GrayImage,
    max_value: u8,
    method: AdaptiveMethod,
    kind: ThresholdKind,
    block_size: u32,
    c: f32,
) -> Result<GrayImage> {
    if block_size < 3 || block_size % 2 == 0 {
        return Err(TourError::InvalidParameter(format!(
            "adaptive block size must be odd and >= 3, got {block_size}"
        )));
    }
    let invert = match kind {
        ThresholdKind::Binary => false,
        ThresholdKind::BinaryInv => true,
        other => {
            return Err(TourError::InvalidParameter(format!(
                "adaptive threshold supports Binary and BinaryInv, got {other:?}"
            )));
        }
    };

    let radius = block_size / 2;
    let local = match method {
        AdaptiveMethod::Mean => box_filter(gray, radius, radius),
        AdaptiveMethod::Gaussian => gaussian_blur_f32(gray, sigma_for_kernel(block_size)),
    };

    Ok(map_colors2(gray, &local, |Luma([src]), Luma([mean])| {
        let pass = src as f32 > mean as f32 - c;
        Luma([if pass != invert { max_value } else { 0 }])
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ramp() -> GrayImage {
        GrayImage::from_fn(4, 1, |x, _| Luma([[5u8, 10, 11, 200][x as usize]]))
    }

    fn row(image: &GrayImage) -> Vec<u8> {
        image.pixels().map(|p| p[0]).collect()
    }

    #[test]
    fn binary_and_inverse_are_complements() {
        let bin = threshold(&ramp(), 10, 255, ThresholdKind::Binary);
        let inv = threshold(&ramp(), 10, 255, ThresholdKind::BinaryInv);
        assert_eq!(row(&bin), vec![0, 0, 255, 255]);
        assert_eq!(row(&inv), vec![255, 255, 0, 0]);
    }

    #[test]
    fn trunc_and_to_zero_kinds() {
        assert_eq!(row(&threshold(&ramp(), 10, 255, ThresholdKind::Trunc)), vec![5, 10, 10, 10]);
        assert_eq!(row(&threshold(&ramp(), 10, 255, ThresholdKind::ToZero)), vec![0, 0, 11, 200]);
        assert_eq!(row(&threshold(&ramp(), 10, 255, ThresholdKind::ToZeroInv)), vec![5, 10, 0, 0]);
    }

    #[test]
    fn otsu_separates_two_classes() {
        let gray = GrayImage::from_fn(10, 10, |_, y| Luma([if y < 5 { 50 } else { 200 }]));
        let level = otsu_level(&gray);
        assert!((50..200).contains(&level), "level {level}");
        let bin = threshold(&gray, level, 255, ThresholdKind::Binary);
        assert_eq!(bin.get_pixel(0, 0)[0], 0);
        assert_eq!(bin.get_pixel(0, 9)[0], 255);
    }

    #[test]
    fn sigma_matches_kernel_size() {
        assert_relative_eq!(sigma_for_kernel(5), 1.1, epsilon = 1e-6);
        assert_relative_eq!(sigma_for_kernel(35), 5.6, epsilon = 1e-5);
    }

    #[test]
    fn adaptive_flat_image_passes_everywhere() {
        // src > mean - c holds on a constant image for any positive c
        let gray = GrayImage::from_pixel(9, 9, Luma([120]));
        for method in [AdaptiveMethod::Mean, AdaptiveMethod::Gaussian] {
            let out =
                adaptive_threshold(&gray, 255, method, ThresholdKind::Binary, 5, 4.0).unwrap();
            assert!(out.pixels().all(|p| p[0] == 255));
        }
    }

    fn adaptive_mean(gray: &GrayImage, kind: ThresholdKind, block_size: u32) -> Result<GrayImage> {
        adaptive_threshold(gray, 255, AdaptiveMethod::Mean, kind, block_size, 4.0)
    }

    #[test]
    fn adaptive_marks_dark_line_on_bright_paper() {
        let gray = GrayImage::from_fn(11, 11, |x, _| Luma([if x == 5 { 20 } else { 230 }]));
        let out = adaptive_mean(&gray, ThresholdKind::Binary, 5).unwrap();
        assert_eq!(out.get_pixel(5, 5)[0], 0);
        assert_eq!(out.get_pixel(0, 5)[0], 255);

        let inv = adaptive_mean(&gray, ThresholdKind::BinaryInv, 5).unwrap();
        assert_eq!(inv.get_pixel(5, 5)[0], 255);
    }

    #[test]
    fn adaptive_rejects_bad_parameters() {
        let gray = GrayImage::new(4, 4);
        assert!(adaptive_mean(&gray, ThresholdKind::Binary, 4).is_err());
        assert!(adaptive_mean(&gray, ThresholdKind::Binary, 1).is_err());
        assert!(adaptive_mean(&gray, ThresholdKind::Trunc, 5).is_err());
    }
}
