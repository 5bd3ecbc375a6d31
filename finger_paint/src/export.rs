//! PNG snapshot of the composed canvas.

use std::path::Path;

use thiserror::Error;
use zune_core::colorspace::ColorSpace;
use zune_image::codecs::ImageFormat;
use zune_image::image::Image;

use crate::canvas::Canvas;

/// Where the two-peace-sign gesture writes unless told otherwise.
pub const DEFAULT_EXPORT_PATH: &str = "output.png";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("writing snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("encoding snapshot: {0}")]
    Encode(String),
}

/// Packed ARGB → interleaved RGB bytes, alpha dropped.
fn rgb_bytes(pixels: &[u32]) -> Vec<u8> {
    pixels.iter()
        .flat_map(|&p| [(p >> 16) as u8, (p >> 8) as u8, p as u8])
        .collect()
}

/// Write the canvas as it stands to `path`, overwriting any earlier export.
pub fn export_png(path: &Path, canvas: &Canvas) -> Result<(), ExportError> {
    let bytes = rgb_bytes(canvas.pixels());
    let image = Image::from_u8(&bytes, canvas.width(), canvas.height(), ColorSpace::RGB);
    let encoded = image.write_to_vec(ImageFormat::PNG)
        .map_err(|e| ExportError::Encode(format!("{e:?}")))?;
    std::fs::write(path, encoded)?;
    Ok(())
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
