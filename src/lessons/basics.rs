//! Reading an image, inspecting it, blurring a region and framing it.

use crate::error::Result;
use crate::models::{Lesson, LessonReport, Region};
use crate::tools::{TourConfig, load_color, save_rgb};
use crate::utils::channels::{info, pixel_at, split};
use crate::utils::filters::{blur_region, copy_make_border};
use image::Rgb;

/// Input photo
pub const INPUT: &str = "messi.jpg";
/// Blurred-ball output
pub const BLUR_OUTPUT: &str = "blur_messi.jpg";
/// Blurred-ball output with a blue frame
pub const BORDER_OUTPUT: &str = "border_blur_messi.jpg";

/// Corners of the ball, max corner exclusive
pub const BALL_CORNERS: ((u32, u32), (u32, u32)) = ((214, 383), (292, 460));
/// Gaussian kernel applied to the ball
pub const BLUR_KERNEL: u32 = 35;
/// Frame width on every side
pub const BORDER: u32 = 10;
/// Frame color
pub const BORDER_COLOR: Rgb<u8> = Rgb([0, 0, 255]);
/// Pixel whose samples are printed, as (row, col)
pub const SAMPLE_PIXEL: (u32, u32) = (100, 100);

/// Run the lesson against the images in `config.data_dir`
pub fn run(config: &TourConfig) -> Result<LessonReport> {
    let mut report = LessonReport::new(Lesson::Basics);

    let path = config.input(INPUT);
    let mut image = load_color(&path)?;
    let shape = info(&image);
    report.note(format!(
        "{} size: {} x {}, channels: {}",
        path.display(),
        shape.rows,
        shape.cols,
        shape.channels
    ));

    let planes = split(&image);
    report.note(format!("Number of channels: {}", planes.len()));
    report.note(format!("Image type: {}", shape.type_label()));

    let (row, col) = SAMPLE_PIXEL;
    match pixel_at(&image, row, col) {
        Some(samples) => {
            for (label, plane) in ["R", "G", "B"].iter().zip(&planes) {
                report.note(format!("Pixel {label}: {}", plane.get_pixel(col, row)[0]));
            }
            report.note(format!("Pixel (all channels): {samples:?}"));
        }
        None => report.note(format!("Pixel ({row}, {col}) is outside the image")),
    }

    let ball = Region::from_corners(BALL_CORNERS.0, BALL_CORNERS.1);
    blur_region(&mut image, ball, BLUR_KERNEL, 0.0)?;
    let blur_path = config.output(BLUR_OUTPUT);
    save_rgb(&blur_path, &image)?;
    report.output(&blur_path);

    let framed = copy_make_border(&image, BORDER, BORDER, BORDER, BORDER, BORDER_COLOR);
    let border_path = config.output(BORDER_OUTPUT);
    save_rgb(&border_path, &framed)?;
    report.output(&border_path);

    Ok(report)
}
