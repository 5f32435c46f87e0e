//! The tour's lessons
//!
//! Each lesson is one linear procedure: decode its inputs, make a few library
//! calls, encode its outputs. Lessons share nothing, so [`run_all`] is free to
//! run them side by side.

pub mod arithmetics;
pub mod basics;
pub mod geometry;
pub mod thresholding;

use crate::error::Result;
use crate::models::{Lesson, LessonReport};
use crate::tools::TourConfig;
use rayon::prelude::*;

/// Run a single lesson
pub fn run_lesson(lesson: Lesson, config: &TourConfig) -> Result<LessonReport> {
    log::debug!("running lesson {lesson}");
    match lesson {
        Lesson::Basics => basics::run(config),
        Lesson::Arithmetics => arithmetics::run(config),
        Lesson::Thresholding => thresholding::run(config),
        Lesson::Geometry => geometry::run(config),
    }
}

/// Run every lesson in parallel; results keep [`Lesson::ALL`] order
pub fn run_all(config: &TourConfig) -> Vec<(Lesson, Result<LessonReport>)> {
    Lesson::ALL
        .par_iter()
        .map(|&lesson| (lesson, run_lesson(lesson, config)))
        .collect()
}
