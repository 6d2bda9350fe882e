use image::Rgba;

/// Exclusive per-channel tolerance for background matching.
pub(super) const TOLERANCE: u8 = 10;

/// Replacement for every background pixel: white, fully transparent.
pub(super) const CLEARED: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Whether `pixel` is within tolerance of `reference` on R, G and B.
///
/// Alpha takes no part in the comparison.
#[inline]
pub(super) fn matches_background(pixel: &Rgba<u8>, reference: &Rgba<u8>) -> bool {
    pixel.0[..3]
        .iter()
        .zip(&reference.0[..3])
        .all(|(p, r)| p.abs_diff(*r) < TOLERANCE)
}
