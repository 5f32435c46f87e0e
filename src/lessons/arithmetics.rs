//! Adding, blending and masking a logo onto a photo.

use crate::error::{Result, TourError};
use crate::models::{Lesson, LessonReport, Region, ThresholdKind};
use crate::tools::{TourConfig, load_color, save_rgb};
use crate::utils::arithmetic::{add, add_weighted, black_out, overlay_masked, to_gray};
use crate::utils::channels::info;
use crate::utils::threshold::threshold;
use image::{RgbImage, imageops};

/// Background photo
pub const PHOTO: &str = "messi.jpg";
/// Logo pasted into the bottom-left corner
pub const LOGO: &str = "commons.png";

/// Saturating sum of the corner and the logo
pub const ADD_OUTPUT: &str = "add_logo_messi.jpeg";
/// Weighted blend of the corner and the logo
pub const BLEND_OUTPUT: &str = "add_weighted_logo_messi.jpeg";
/// Corner with the logo shape cut out
pub const BLACKOUT_OUTPUT: &str = "wiki_commons_blackout_messi.jpeg";
/// Logo overlaid through its own mask
pub const OVERLAY_OUTPUT: &str = "wiki_commons_messi.jpeg";

/// Weight of the photo in the blend
pub const ALPHA: f32 = 0.6;
/// Weight of the logo in the blend
pub const BETA: f32 = 0.4;
/// Gray level above which a logo pixel belongs to the mask
pub const MASK_THRESHOLD: u8 = 10;

/// Bottom-left region of `photo` with the size of `logo`
pub fn corner_region(photo: &RgbImage, logo: &RgbImage) -> Result<Region> {
    let (cols, rows) = photo.dimensions();
    let (logo_cols, logo_rows) = logo.dimensions();
    if logo_cols > cols || logo_rows > rows {
        return Err(TourError::SizeMismatch {
            expected: (cols, rows),
            actual: (logo_cols, logo_rows),
        });
    }
    Ok(Region::from_corners((0, rows - logo_rows), (logo_cols, rows)))
}

fn pasted(base: &RgbImage, patch: &RgbImage, region: Region) -> RgbImage {
    let mut out = base.clone();
    imageops::replace(&mut out, patch, region.x as i64, region.y as i64);
    out
}

fn write(
    config: &TourConfig,
    report: &mut LessonReport,
    name: &str,
    image: &RgbImage,
) -> Result<()> {
    let path = config.output(name);
    save_rgb(&path, image)?;
    report.output(&path);
    Ok(())
}

/// Run the lesson against the images in `config.data_dir`
pub fn run(config: &TourConfig) -> Result<LessonReport> {
    let mut report = LessonReport::new(Lesson::Arithmetics);

    let photo_path = config.input(PHOTO);
    let photo = load_color(&photo_path)?;
    let logo_path = config.input(LOGO);
    let logo = load_color(&logo_path)?;

    for (path, image) in [(&photo_path, &photo), (&logo_path, &logo)] {
        let shape = info(image);
        report.note(format!(
            "{} channels: {}, size: {}x{}",
            path.display(),
            shape.channels,
            shape.rows,
            shape.cols
        ));
    }

    let region = corner_region(&photo, &logo)?;
    let roi =
        imageops::crop_imm(&photo, region.x, region.y, region.width, region.height).to_image();
    report.note(format!("Logo region: {region}"));

    let summed = add(&roi, &logo)?;
    write(config, &mut report, ADD_OUTPUT, &pasted(&photo, &summed, region))?;

    let blended = add_weighted(&roi, ALPHA, &logo, BETA, 0.0)?;
    write(config, &mut report, BLEND_OUTPUT, &pasted(&photo, &blended, region))?;

    let mask = threshold(&to_gray(&logo), MASK_THRESHOLD, 255, ThresholdKind::Binary);
    let blacked = black_out(&roi, &mask)?;
    write(config, &mut report, BLACKOUT_OUTPUT, &pasted(&photo, &blacked, region))?;

    let overlaid = overlay_masked(&roi, &logo, &mask)?;
    write(config, &mut report, OVERLAY_OUTPUT, &pasted(&photo, &overlaid, region))?;

    Ok(report)
}
