use crate::error::{Result, TourError};
use std::fmt;

/// Rectangular region of interest inside a raster image
///
/// The max corner is exclusive, so a region built from `(214, 383)` and
/// `(292, 460)` covers 78 columns and 77 rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    /// Left column
    pub x: u32,
    /// Top row
    pub y: u32,
    /// Number of columns
    pub width: u32,
    /// Number of rows
    pub height: u32,
}

impl Region {
    /// Create a new region from its top-left corner and size
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a region from two corners, max corner exclusive
    pub fn from_corners(a: (u32, u32), b: (u32, u32)) -> Self {
        let (x0, x1) = (a.0.min(b.0), a.0.max(b.0));
        let (y0, y1) = (a.1.min(b.1), a.1.max(b.1));
        Self::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Column one past the right edge
    pub fn right(&self) -> u64 {
        self.x as u64 + self.width as u64
    }

    /// Row one past the bottom edge
    pub fn bottom(&self) -> u64 {
        self.y as u64 + self.height as u64
    }

    /// Number of pixels covered
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Whether the region lies inside a `width` x `height` image
    pub fn fits(&self, width: u32, height: u32) -> bool {
        self.right() <= width as u64 && self.bottom() <= height as u64
    }

    /// Fail unless the region is non-empty and fits a `width` x `height` image
    pub fn check(&self, width: u32, height: u32) -> Result<()> {
        if self.area() == 0 {
            Err(TourError::InvalidParameter(format!("region {self} is empty")))
        } else if self.fits(width, height) {
            Ok(())
        } else {
            Err(TourError::RegionOutOfBounds {
                region: *self,
                width,
                height,
            })
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})-({}, {})",
            self.x,
            self.y,
            self.right(),
            self.bottom()
        )
    }
}
