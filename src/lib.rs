//! vision_tour - a guided tour of everyday image processing calls
//!
//! Four short lessons (basics, arithmetics, thresholding, geometry) each read
//! a sample image, run a handful of `image`/`imageproc` operations and write
//! the results to disk. The heavy lifting (codecs, color conversion,
//! filtering, interpolation, warp sampling) stays inside those crates.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Error type shared by every lesson
pub mod error;
/// The lessons and their dispatcher
pub mod lessons;
/// Plain data types (regions, lessons, reports, operation flags)
pub mod models;
/// Configuration and image file I/O
pub mod tools;
/// Wrappers over the vision library calls
pub mod utils;

pub use error::{Result, TourError};
pub use lessons::{run_all, run_lesson};
pub use models::{Lesson, LessonReport, Region};
pub use tools::TourConfig;

/// Run `lesson` with the environment configuration and print its notes
///
/// This is the body shared by the one-shot lesson binaries. Failures are
/// printed to stdout and end the process with exit code 1.
pub fn run_standalone(lesson: Lesson) {
    let config = TourConfig::from_env();
    match run_lesson(lesson, &config) {
        Ok(report) => {
            for line in &report.notes {
                println!("{line}");
            }
        }
        Err(err) => {
            println!("{err}");
            std::process::exit(1);
        }
    }
}
