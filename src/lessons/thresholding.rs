//! Grayscale conversion and thresholding.

use crate::error::Result;
use crate::models::{AdaptiveMethod, Lesson, LessonReport, ThresholdKind};
use crate::tools::{TourConfig, load_color, load_gray, save_gray};
use crate::utils::arithmetic::to_gray;
use crate::utils::threshold::{adaptive_threshold, otsu_level, threshold};
use image::GrayImage;

/// Photo converted to gray
pub const PHOTO: &str = "messi.jpg";
/// Logo turned into masks
pub const LOGO: &str = "commons.png";
/// Unevenly lit page for the adaptive thresholds
pub const SUDOKU: &str = "sudoku.jpg";

/// Grayscale photo
pub const GRAY_OUTPUT: &str = "gray_messi.jpeg";
/// Logo mask
pub const BINARY_OUTPUT: &str = "bin_logo.jpeg";
/// Inverted logo mask
pub const BINARY_INV_OUTPUT: &str = "inv_bin_logo.jpeg";
/// Logo mask at the Otsu level
pub const OTSU_OUTPUT: &str = "otsu_logo.jpeg";
/// Sudoku through the mean adaptive threshold
pub const ADAPTIVE_MEAN_OUTPUT: &str = "sudoku_adaptive_mean.jpeg";
/// Sudoku through the Gaussian adaptive threshold
pub const ADAPTIVE_GAUSS_OUTPUT: &str = "sudoku_adaptive_gauss.jpeg";

/// Global threshold applied to the logo
pub const LOGO_THRESHOLD: u8 = 10;
/// Neighbourhood size of the adaptive thresholds
pub const BLOCK_SIZE: u32 = 5;
/// Offset subtracted from the local mean
pub const OFFSET: f32 = 4.0;

fn write(
    config: &TourConfig,
    report: &mut LessonReport,
    name: &str,
    image: &GrayImage,
) -> Result<()> {
    let path = config.output(name);
    save_gray(&path, image)?;
    report.output(&path);
    Ok(())
}

/// Run the lesson: photo to gray, logo to binary masks, sudoku through
/// adaptive thresholds
pub fn run(config: &TourConfig) -> Result<LessonReport> {
    let mut report = LessonReport::new(Lesson::Thresholding);

    let photo = load_color(config.input(PHOTO))?;
    write(config, &mut report, GRAY_OUTPUT, &to_gray(&photo))?;

    let gray_logo = to_gray(&load_color(config.input(LOGO))?);
    let binary = threshold(&gray_logo, LOGO_THRESHOLD, 255, ThresholdKind::Binary);
    write(config, &mut report, BINARY_OUTPUT, &binary)?;
    let binary_inv = threshold(&gray_logo, LOGO_THRESHOLD, 255, ThresholdKind::BinaryInv);
    write(config, &mut report, BINARY_INV_OUTPUT, &binary_inv)?;

    let level = otsu_level(&gray_logo);
    report.note(format!("Otsu level for {LOGO}: {level}"));
    let otsu = threshold(&gray_logo, level, 255, ThresholdKind::Binary);
    write(config, &mut report, OTSU_OUTPUT, &otsu)?;

    let sudoku = load_gray(config.input(SUDOKU))?;
    for (method, name) in [
        (AdaptiveMethod::Mean, ADAPTIVE_MEAN_OUTPUT),
        (AdaptiveMethod::Gaussian, ADAPTIVE_GAUSS_OUTPUT),
    ] {
        let adaptive =
            adaptive_threshold(&sudoku, 255, method, ThresholdKind::Binary, BLOCK_SIZE, OFFSET)?;
        write(config, &mut report, name, &adaptive)?;
    }

    Ok(report)
}
