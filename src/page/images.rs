//! Decoding deferred images into terminal-cell thumbnails.

use image::imageops::FilterType;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Image '{path}' does not exist")]
    Missing { path: PathBuf },

    #[error("Failed to decode image '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// RGB pixels sized for half-block rendering: two pixel rows per terminal row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Thumbnail {
    pub width: u16,
    pub height: u16,
    pixels: Vec<[u8; 3]>,
}

impl Thumbnail {
    pub fn new(width: u16, height: u16, pixels: Vec<[u8; 3]>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn pixel(&self, x: u16, y: u16) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}

/// Decode `path` and scale it to `columns` x `rows` terminal cells.
pub fn load_thumbnail(path: &Path, columns: u16, rows: u16) -> Result<Thumbnail, ImageError> {
    if !path.exists() {
        return Err(ImageError::Missing {
            path: path.to_path_buf(),
        });
    }

    let decoded = image::open(path).map_err(|source| ImageError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let width = columns.max(1);
    let height = rows.max(1) * 2;
    let rgb = decoded
        .resize_exact(width as u32, height as u32, FilterType::Triangle)
        .to_rgb8();
    let pixels = rgb.pixels().map(|pixel| pixel.0).collect();

    Ok(Thumbnail::new(width, height, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn missing_file_is_reported() {
        let err = load_thumbnail(Path::new("/nonexistent/landing.png"), 4, 2).unwrap_err();
        assert!(matches!(err, ImageError::Missing { .. }));
    }

    #[test]
    fn garbage_file_fails_to_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image").unwrap();
        let err = load_thumbnail(&path, 4, 2).unwrap_err();
        assert!(matches!(err, ImageError::Decode { .. }));
    }

    #[test]
    fn thumbnail_has_two_pixel_rows_per_cell() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("red.png");
        RgbImage::from_pixel(16, 16, Rgb([200, 10, 10])).save(&path).unwrap();

        let thumbnail = load_thumbnail(&path, 8, 3).unwrap();
        assert_eq!(thumbnail.width, 8);
        assert_eq!(thumbnail.height, 6);
        assert_eq!(thumbnail.pixel(0, 0), Some([200, 10, 10]));
        assert_eq!(thumbnail.pixel(8, 0), None);
    }
}
