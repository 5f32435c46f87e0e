use crate::error::{Result, TourError};
use image::{GrayImage, ImageError, RgbImage};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Where lessons read their inputs and write their outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourConfig {
    /// Directory holding `messi.jpg`, `commons.png` and `sudoku.jpg`.
    pub data_dir: PathBuf,
    /// Directory receiving the lesson outputs.
    pub out_dir: PathBuf,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            out_dir: PathBuf::from("."),
        }
    }
}

fn dir_from_env(key: &str) -> Option<PathBuf> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(PathBuf::from(value.trim())),
        _ => None,
    }
}

impl TourConfig {
    /// Both directories set to `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref().to_path_buf();
        Self {
            data_dir: dir.clone(),
            out_dir: dir,
        }
    }

    /// Read `VISION_TOUR_DATA_DIR` and `VISION_TOUR_OUT_DIR`, defaulting to the
    /// working directory.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            data_dir: dir_from_env("VISION_TOUR_DATA_DIR").unwrap_or(defaults.data_dir),
            out_dir: dir_from_env("VISION_TOUR_OUT_DIR").unwrap_or(defaults.out_dir),
        }
    }

    /// Override whichever directories are given.
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, out_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if let Some(dir) = out_dir {
            self.out_dir = dir;
        }
        self
    }

    /// Path of an input file.
    pub fn input(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    /// Path of an output file.
    pub fn output(&self, name: &str) -> PathBuf {
        self.out_dir.join(name)
    }
}

fn read_error(path: &Path, source: ImageError) -> TourError {
    TourError::Read {
        path: path.to_path_buf(),
        source,
    }
}

/// Decode an image as 8-bit RGB.
pub fn load_color<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| read_error(path, e))?;
    log::debug!("decoded {} ({}x{})", path.display(), img.width(), img.height());
    Ok(img.to_rgb8())
}

/// Decode an image as 8-bit grayscale.
pub fn load_gray<P: AsRef<Path>>(path: P) -> Result<GrayImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| read_error(path, e))?;
    log::debug!("decoded {} ({}x{})", path.display(), img.width(), img.height());
    Ok(img.to_luma8())
}

fn prepare_output(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| TourError::Write {
                path: path.to_path_buf(),
                source: ImageError::IoError(e),
            })
        }
        _ => Ok(()),
    }
}

/// Encode a color image; the format follows the file extension.
pub fn save_rgb<P: AsRef<Path>>(path: P, image: &RgbImage) -> Result<()> {
    let path = path.as_ref();
    prepare_output(path)?;
    image.save(path).map_err(|source| TourError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Encode a grayscale image; the format follows the file extension.
pub fn save_gray<P: AsRef<Path>>(path: P, image: &GrayImage) -> Result<()> {
    let path = path.as_ref();
    prepare_output(path)?;
    image.save(path).map_err(|source| TourError::Write {
        path: path.to_path_buf(),
        source,
    })
}
