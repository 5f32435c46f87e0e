//! Lessons and what they report.

use crate::error::TourError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// One of the tour's lessons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lesson {
    /// Reading, inspecting, blurring a region and framing an image
    Basics,
    /// Adding, blending and masking two images
    Arithmetics,
    /// Grayscale conversion, global and adaptive thresholds
    Thresholding,
    /// Resizing, rotating and warping
    Geometry,
}

impl Lesson {
    /// Every lesson, in tour order
    pub const ALL: [Lesson; 4] = [
        Lesson::Basics,
        Lesson::Arithmetics,
        Lesson::Thresholding,
        Lesson::Geometry,
    ];

    /// Stable lowercase name, also the binary and subcommand name
    pub fn name(&self) -> &'static str {
        match self {
            Lesson::Basics => "basics",
            Lesson::Arithmetics => "arithmetics",
            Lesson::Thresholding => "thresholding",
            Lesson::Geometry => "geometry",
        }
    }

    /// One line summary
    pub fn description(&self) -> &'static str {
        match self {
            Lesson::Basics => "read an image, split channels, blur a region, add a border",
            Lesson::Arithmetics => "add, blend and mask a logo onto an image",
            Lesson::Thresholding => "grayscale, binary, Otsu and adaptive thresholds",
            Lesson::Geometry => "resize, rotate and warp an image",
        }
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Lesson {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Lesson::ALL
            .into_iter()
            .find(|lesson| lesson.name() == wanted)
            .ok_or_else(|| TourError::UnknownLesson(s.to_string()))
    }
}

/// What a lesson printed and wrote
#[derive(Debug, Clone, PartialEq)]
pub struct LessonReport {
    /// Lesson that produced the report
    pub lesson: Lesson,
    /// Lines meant for stdout, in order
    pub notes: Vec<String>,
    /// Files written, in order
    pub outputs: Vec<PathBuf>,
}

impl LessonReport {
    /// Start an empty report
    pub fn new(lesson: Lesson) -> Self {
        Self {
            lesson,
            notes: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Record a line of output
    pub fn note(&mut self, line: impl Into<String>) {
        let line = line.into();
        log::debug!("[{}] {}", self.lesson, line);
        self.notes.push(line);
    }

    /// Record a written file
    pub fn output(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        log::info!("[{}] wrote {}", self.lesson, path.display());
        self.outputs.push(path.to_path_buf());
    }
}
