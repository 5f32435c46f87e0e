//! Synthetic sample images shared by the integration tests.
#![allow(dead_code)]

use image::{GrayImage, Luma, Rgb, RgbImage};
use std::path::Path;

pub const PHOTO_SIZE: (u32, u32) = (560, 480);
pub const LOGO_SIZE: (u32, u32) = (60, 40);

/// Gradient photo standing in for `messi.jpg`
pub fn write_photo(dir: &Path, (w, h): (u32, u32)) {
    let photo = RgbImage::from_fn(w, h, |x, y| {
        Rgb([(x * 255 / w) as u8, (y * 255 / h) as u8, 90])
    });
    photo.save(dir.join("messi.jpg")).unwrap();
}

pub fn write_logo(dir: &Path) {
    let (w, h) = LOGO_SIZE;
    // white square on black, the square is what the mask keeps
    let logo = RgbImage::from_fn(w, h, |x, y| {
        if (20..40).contains(&x) && (10..30).contains(&y) {
            Rgb([255, 255, 255])
        } else {
            Rgb([0, 0, 0])
        }
    });
    logo.save(dir.join("commons.png")).unwrap();
}

pub fn write_sudoku(dir: &Path) {
    let page = GrayImage::from_fn(90, 90, |x, y| {
        let shade = 120 + (x / 2) as u8;
        if x % 10 == 0 || y % 10 == 0 { Luma([20]) } else { Luma([shade]) }
    });
    page.save(dir.join("sudoku.jpg")).unwrap();
}

/// Every input the lessons read
pub fn write_inputs(dir: &Path) {
    write_photo(dir, PHOTO_SIZE);
    write_logo(dir);
    write_sudoku(dir);
}
