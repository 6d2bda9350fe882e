use image::{Rgba, RgbaImage};

/// Sample the background reference color from the top-left pixel.
///
/// Returns `None` for an image with no pixels.
pub(super) fn detect_background_color(img: &RgbaImage) -> Option<Rgba<u8>> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return None;
    }
    Some(*img.get_pixel(0, 0))
}
