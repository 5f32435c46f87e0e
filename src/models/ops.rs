//! Flags selecting library behaviour, and raster shape.

/// Interpolation used when resizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Nearest neighbour
    Nearest,
    /// Bilinear
    #[default]
    Linear,
    /// Bicubic (Catmull-Rom)
    Cubic,
    /// Pixel area averaging, best for shrinking
    Area,
    /// Lanczos with a window of 3
    Lanczos,
}

/// Fixed rotations that need no resampling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateFlag {
    /// 90 degrees clockwise
    Clockwise90,
    /// 180 degrees
    Rotate180,
    /// 90 degrees counter-clockwise
    CounterClockwise90,
}

/// Global threshold rules
///
/// `src` is the input sample, `t` the threshold and `max` the value assigned
/// to passing pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdKind {
    /// `src > t ? max : 0`
    Binary,
    /// `src > t ? 0 : max`
    BinaryInv,
    /// `src > t ? t : src`
    Trunc,
    /// `src > t ? src : 0`
    ToZero,
    /// `src > t ? 0 : src`
    ToZeroInv,
}

/// How the local threshold of an adaptive threshold is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdaptiveMethod {
    /// Unweighted mean of the block
    Mean,
    /// Gaussian-weighted mean of the block
    Gaussian,
}

/// Shape of a decoded raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    /// Row count (height)
    pub rows: u32,
    /// Column count (width)
    pub cols: u32,
    /// Samples per pixel
    pub channels: u8,
}

impl ImageInfo {
    /// Sample type label, e.g. `u8C3`
    pub fn type_label(&self) -> String {
        format!("u8C{}", self.channels)
    }
}
