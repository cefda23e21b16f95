//! Output helpers for grayscale grids and JSON.
//!
//! - `save_grayscale_u8`: encode an owned 8-bit gray grid as a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::GrayImageU8;
use image::{DynamicImage, ImageBuffer, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Save an 8-bit grayscale grid to a single-channel image file.
///
/// The format follows the file extension (PNG for the fixture names used by
/// the sample driver).
pub fn save_grayscale_u8(buffer: &GrayImageU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let data = buffer.data().to_vec();
    let image: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_raw(buffer.width() as u32, buffer.height() as u32, data)
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageLuma8(image)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_is_written_with_grid_dimensions() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("grid.png");
        let grid = GrayImageU8::new(3, 2, vec![0, 64, 128, 192, 255, 7]);

        save_grayscale_u8(&grid, &path).expect("png written");

        let (w, h) = image::image_dimensions(&path).expect("png header readable");
        assert_eq!((w, h), (3, 2));
    }

    #[test]
    fn json_file_is_pretty_printed() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("report.json");
        write_json_file(&path, &vec![1, 2, 3]).expect("json written");
        let text = fs::read_to_string(&path).expect("json readable");
        assert!(text.contains('\n'), "expected pretty JSON, got {text:?}");
        let parsed: Vec<i32> = serde_json::from_str(&text).expect("valid JSON");
        assert_eq!(parsed, vec![1, 2, 3]);
    }
}
