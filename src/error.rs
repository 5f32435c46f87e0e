use crate::models::Region;
use std::path::PathBuf;

/// Errors raised while running a lesson.
#[derive(thiserror::Error, Debug)]
pub enum TourError {
    /// An input file could not be opened or decoded.
    #[error("Failed to read image: {}", path.display())]
    Read {
        /// Path of the input image.
        path: PathBuf,
        /// Underlying decoder error.
        #[source]
        source: image::ImageError,
    },

    /// An output file could not be encoded or written.
    #[error("Failed to write image: {}", path.display())]
    Write {
        /// Path of the output image.
        path: PathBuf,
        /// Underlying encoder error.
        #[source]
        source: image::ImageError,
    },

    /// A region of interest reaches outside its parent image.
    #[error("Region {region} is outside of a {width}x{height} image")]
    RegionOutOfBounds {
        /// The offending region.
        region: Region,
        /// Parent width.
        width: u32,
        /// Parent height.
        height: u32,
    },

    /// Two rasters that must agree in size do not.
    #[error(
        "Image size mismatch: expected {}x{}, got {}x{}",
        expected.0,
        expected.1,
        actual.0,
        actual.1
    )]
    SizeMismatch {
        /// Expected (width, height).
        expected: (u32, u32),
        /// Actual (width, height).
        actual: (u32, u32),
    },

    /// A kernel size, block size, scale or quad was rejected.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A lesson name did not match any lesson.
    #[error("Unknown lesson: {0}")]
    UnknownLesson(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TourError>;

/// Fail with [`TourError::SizeMismatch`] unless both dimensions agree.
pub(crate) fn ensure_same_size(expected: (u32, u32), actual: (u32, u32)) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(TourError::SizeMismatch { expected, actual })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_the_path() {
        let err = TourError::Read {
            path: PathBuf::from("messi.jpg"),
            source: image::ImageError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "missing",
            )),
        };
        assert_eq!(err.to_string(), "Failed to read image: messi.jpg");
    }

    #[test]
    fn ensure_same_size_reports_both_sizes() {
        assert!(ensure_same_size((3, 4), (3, 4)).is_ok());
        let err = ensure_same_size((3, 4), (4, 3)).unwrap_err();
        assert_eq!(err.to_string(), "Image size mismatch: expected 3x4, got 4x3");
    }
}
