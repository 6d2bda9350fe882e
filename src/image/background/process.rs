use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ImageError, ImageFormat, ImageReader, Rgba, RgbaImage};

use crate::image::background::color::{CLEARED, matches_background};
use crate::image::background::detect::detect_background_color;
use crate::image::background::error::ProcessError;

/// Outcome of a successful background removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removal {
    /// Sampled background color (`None` for an image with no pixels).
    pub reference: Option<Rgba<u8>>,
    pub width: u32,
    pub height: u32,
    /// Number of pixels replaced with transparent white.
    pub cleared: usize,
}

/// Remove background from an image file, overwriting it with PNG output.
///
/// The file is only written once the PNG has been fully encoded in memory.
pub fn remove_background(path: &Path) -> Result<Removal, ProcessError> {
    let img = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| ProcessError::Decode(ImageError::IoError(e)))?
        .decode()
        .map_err(ProcessError::Decode)?;

    let mut output = img.into_rgba8();
    let removal = clear_background(&mut output);

    let mut buf = Cursor::new(Vec::new());
    output
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(ProcessError::Encode)?;
    fs::write(path, buf.into_inner()).map_err(ProcessError::Write)?;

    Ok(removal)
}

/// Replace every pixel matching the top-left color with transparent white.
///
/// The reference is copied before the scan, so clearing pixel 0 does not
/// affect the comparison for the rest of the buffer.
pub(super) fn clear_background(img: &mut RgbaImage) -> Removal {
    let (width, height) = img.dimensions();
    let reference = detect_background_color(img);

    let mut cleared = 0;
    if let Some(reference) = reference {
        for pixel in img.pixels_mut() {
            if matches_background(pixel, &reference) {
                *pixel = CLEARED;
                cleared += 1;
            }
        }
    }

    Removal {
        reference,
        width,
        height,
        cleared,
    }
}
