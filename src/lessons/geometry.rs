//! Resizing, rotating and warping.

use crate::error::Result;
use crate::models::{Interpolation, Lesson, LessonReport, RotateFlag};
use crate::tools::{TourConfig, load_color, save_rgb};
use crate::utils::geometry::{
    corners, keystone_quad, resize, rotate, rotate_expanded, warp_perspective,
};
use image::RgbImage;

/// Input photo
pub const INPUT: &str = "messi.jpg";

/// Photo scaled up twice
pub const BIGGER_OUTPUT: &str = "bigger_messi.jpeg";
/// Photo scaled down by half
pub const SMALLER_OUTPUT: &str = "smaller_messi.jpeg";
/// Photo turned 90 degrees clockwise
pub const ROTATED_OUTPUT: &str = "rotated_messi.jpeg";
/// Photo rotated on an enlarged canvas
pub const ROTATED_PROPERLY_OUTPUT: &str = "rotated_properly_messi.jpeg";
/// Photo warped onto a keystone
pub const PERSPECTIVE_OUTPUT: &str = "perspective_messi.jpeg";

/// Arbitrary rotation angle, counter-clockwise
pub const ANGLE: f64 = 45.0;
/// Scale applied together with the arbitrary rotation
pub const SCALE: f64 = 1.0;
/// Fraction of the width pulled in on each side of the top edge
pub const KEYSTONE_INSET: f32 = 0.2;

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

fn size_note(image: &RgbImage) -> String {
    format!("Rows: {}, Cols: {}", image.height(), image.width())
}

/// Run the lesson
pub fn run(config: &TourConfig) -> Result<LessonReport> {
    let mut report = LessonReport::new(Lesson::Geometry);

    let image = load_color(config.input(INPUT))?;
    report.note(size_note(&image));

    let bigger = resize(&image, 2.0, 2.0, Interpolation::Cubic)?;
    report.note(size_note(&bigger));
    write(config, &mut report, BIGGER_OUTPUT, &bigger)?;

    let smaller = resize(&image, 0.5, 0.5, Interpolation::Area)?;
    report.note(size_note(&smaller));
    write(config, &mut report, SMALLER_OUTPUT, &smaller)?;

    let rotated = rotate(&image, RotateFlag::Clockwise90);
    write(config, &mut report, ROTATED_OUTPUT, &rotated)?;

    let rotated_properly = rotate_expanded(&image, ANGLE, SCALE)?;
    report.note(size_note(&rotated_properly));
    write(config, &mut report, ROTATED_PROPERLY_OUTPUT, &rotated_properly)?;

    let (cols, rows) = image.dimensions();
    // a single row or column has no area to pull into a keystone
    if cols < 2 || rows < 2 {
        log::warn!("skipping the perspective warp of a {cols}x{rows} image");
        report.note(format!("Perspective skipped for a {cols}x{rows} image"));
        return Ok(report);
    }
    let keystone = warp_perspective(
        &image,
        corners(cols, rows),
        keystone_quad(cols, rows, KEYSTONE_INSET),
        (cols, rows),
    )?;
    write(config, &mut report, PERSPECTIVE_OUTPUT, &keystone)?;

    Ok(report)
}
