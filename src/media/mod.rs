// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for comparison pairs.

use crate::error::{Error, Result};
use crate::pair_navigator::ComparisonPair;
use iced::widget::image;
use image_rs::GenericImageView;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Aspect ratio (width over height). Zero-height images report 1.0.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            return 1.0;
        }
        #[allow(clippy::cast_precision_loss)] // dimensions are far below 2^24
        {
            self.width as f32 / self.height as f32
        }
    }
}

/// A fully decoded before/after pair ready for display.
#[derive(Debug, Clone)]
pub struct LoadedPair {
    pub before: ImageData,
    pub after: ImageData,
    pub title: Option<String>,
}

/// Decodes a single raster image into RGBA.
pub fn load_image(path: &Path) -> Result<ImageData> {
    let decoded = image_rs::open(path)?;
    let (width, height) = decoded.dimensions();
    let rgba = decoded.into_rgba8().into_raw();
    Ok(ImageData::from_rgba(width, height, rgba))
}

/// Loads both halves of a comparison pair.
///
/// The before image is decoded first; its failure takes precedence so the
/// error surface points at the base layer.
pub fn load_pair(pair: &ComparisonPair) -> Result<LoadedPair> {
    let before = load_image(&pair.before)?;
    let after = load_image(&pair.after)?;
    Ok(LoadedPair {
        before,
        after,
        title: pair.title.clone(),
    })
}

/// Loads a pair on the blocking thread pool, keeping decoding off the
/// runtime threads that drive the UI.
pub async fn load_pair_async(pair: ComparisonPair) -> Result<LoadedPair> {
    tokio::task::spawn_blocking(move || load_pair(&pair))
        .await
        .map_err(|err| Error::Io(err.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::path::PathBuf;

    #[test]
    fn from_rgba_preserves_dimensions() {
        let pixels = vec![255_u8; 4 * 2 * 3];
        let data = ImageData::from_rgba(2, 3, pixels);
        assert_eq!(data.width, 2);
        assert_eq!(data.height, 3);
    }

    #[test]
    fn aspect_ratio_handles_zero_height() {
        let data = ImageData::from_rgba(2, 0, Vec::new());
        assert_eq!(data.aspect_ratio(), 1.0);
    }

    #[test]
    fn load_image_reports_missing_file() {
        let result = load_image(Path::new("/nonexistent/photo.png"));
        assert!(matches!(result, Err(Error::Image(_) | Error::Io(_))));
    }

    #[test]
    fn load_pair_carries_the_title() {
        let temp_dir = tempfile::tempdir().expect("temp dir");
        let before_path = temp_dir.path().join("shot_before.png");
        let after_path = temp_dir.path().join("shot_after.png");
        write_test_png(&before_path);
        write_test_png(&after_path);

        let pair = ComparisonPair {
            title: Some("shot".to_string()),
            before: before_path,
            after: after_path,
        };
        let loaded = load_pair(&pair).expect("pair should load");
        assert_eq!(loaded.title.as_deref(), Some("shot"));
        assert_eq!(loaded.before.width, 2);
        assert_eq!(loaded.after.height, 2);
    }

    #[tokio::test]
    async fn load_pair_async_decodes_on_the_blocking_pool() {
        let temp_dir = tempfile::tempdir().expect("temp dir");
        let before_path = temp_dir.path().join("ridge_before.png");
        let after_path = temp_dir.path().join("ridge_after.png");
        write_test_png(&before_path);
        write_test_png(&after_path);

        let pair = ComparisonPair {
            title: Some("ridge".to_string()),
            before: before_path,
            after: after_path,
        };
        let loaded = load_pair_async(pair).await.expect("pair should load");
        assert_eq!(loaded.title.as_deref(), Some("ridge"));
        assert_eq!(loaded.before.width, 2);

        let missing = ComparisonPair {
            title: None,
            before: temp_dir.path().join("nope_before.png"),
            after: temp_dir.path().join("nope_after.png"),
        };
        assert!(load_pair_async(missing).await.is_err());
    }

    fn write_test_png(path: &PathBuf) {
        let img = image_rs::RgbaImage::from_pixel(2, 2, image_rs::Rgba([10, 20, 30, 255]));
        img.save(path).expect("failed to write test png");
    }
}
