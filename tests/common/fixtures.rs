#![allow(dead_code)]

use std::path::Path;

use image::{ImageBuffer, Rgb};
use portfolio::{Assets, Config};
use tempfile::TempDir;

use super::{Extent, Page, Section, SectionMap};

/// Home spans [0, 800) and work spans [800, 1600).
pub fn two_sections() -> SectionMap {
    SectionMap::default()
        .with(Section::Home, Extent::new(0.0, 800.0))
        .with(Section::Work, Extent::new(800.0, 800.0))
}

/// Writes a small solid PNG at `relative` under `root`.
pub fn write_test_image(root: &Path, relative: &str, width: u32, height: u32) {
    let img = ImageBuffer::from_fn(width, height, |_, _| Rgb([183u8, 109u8, 164u8]));
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().expect("image path has a parent"))
        .expect("Failed to create image directory");
    img.save_with_format(&path, image::ImageFormat::Png)
        .expect("Failed to save test image");
}

/// Creates an asset directory holding a fake resume PDF.
/// Returns the assets and the temp directory (which must be kept alive).
pub fn assets_with_resume(contents: &[u8]) -> (Assets, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let assets = Assets::new(dir.path());
    let resume = assets.resume();
    std::fs::create_dir_all(resume.parent().expect("resume path has a parent"))
        .expect("Failed to create resume directory");
    std::fs::write(&resume, contents).expect("Failed to write resume");
    (assets, dir)
}

/// Config pointing at a directory that does not exist.
pub fn test_config(start_page: Page) -> Config {
    Config {
        assets: Assets::new("does-not-exist"),
        start_page,
        ..Config::default()
    }
}
