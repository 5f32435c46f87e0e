//! Thin wrappers over the `image` and `imageproc` crates
//!
//! This module groups the library calls the lessons make:
//! - Channels (split, merge, pixel inspection)
//! - Arithmetic (saturating add, weighted blend, bitwise masks)
//! - Thresholding (global, Otsu, adaptive)
//! - Filters (Gaussian blur, region blur, constant borders)
//! - Geometry (resize, rotations, affine and perspective warps)

pub mod arithmetic;
pub mod channels;
pub mod filters;
pub mod geometry;
pub mod threshold;
