//! I/O helpers for frames and JSON reports.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an owned interleaved RGB buffer.
//! - `save_grayscale_u8`: write an owned 8-bit gray buffer to a PNG.
//! - `save_mask`: write a binary mask to a black-and-white PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! These are demo conveniences; the inspection core itself never touches the
//! filesystem.
use super::{GrayImageU8, Mask, RgbBufferU8};
use image::{DynamicImage, ImageBuffer, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to interleaved 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<RgbBufferU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw();
    Ok(RgbBufferU8::new(width, height, data))
}

/// Save an 8-bit grayscale buffer to a PNG.
pub fn save_grayscale_u8(buffer: &GrayImageU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let data = buffer.as_bytes().to_vec();
    let image: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_raw(buffer.width() as u32, buffer.height() as u32, data)
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageLuma8(image)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save a binary mask as a black-and-white PNG (foreground = white).
pub fn save_mask(mask: &Mask, path: &Path) -> Result<(), String> {
    let bytes: Vec<u8> = mask
        .data
        .iter()
        .map(|&v| if v != 0 { 255u8 } else { 0u8 })
        .collect();
    let gray = GrayImageU8::new(mask.w, mask.h, bytes);
    save_grayscale_u8(&gray, path)
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
