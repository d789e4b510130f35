#![allow(dead_code)]

use image::{GrayImage, Luma, Rgb, RgbImage};
use std::fs;
use std::path::PathBuf;

/// Fresh per-test directory under the system temp dir.
pub fn scratch_dir(name: &str) -> PathBuf {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = std::env::temp_dir().join(format!("image_filter_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

pub fn gradient_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 30) as u8, (y * 40) as u8, ((x + y) * 10) as u8])
    })
}

pub fn grey_from_rows(rows: &[&[u8]]) -> GrayImage {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.len()) as u32;
    GrayImage::from_fn(width, height, |x, y| Luma([rows[y as usize][x as usize]]))
}
