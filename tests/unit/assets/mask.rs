use super::*;
use crate::foundation::core::Rgba8;

#[test]
fn bright_mask_pixels_become_holes() {
    let mut img = PixelBuffer::filled(3, 1, Rgba8::opaque(10, 20, 30)).unwrap();
    let mut mask = PixelBuffer::filled(3, 1, Rgba8::opaque(0, 0, 0)).unwrap();
    mask.set(1, 0, Rgba8::opaque(255, 255, 255));
    mask.set(2, 0, Rgba8::new(255, 255, 255, 0));

    let marked = apply_mask(&mut img, &mask, 0).unwrap();
    assert_eq!(marked, 1);
    assert_eq!(img.get(0, 0), Rgba8::opaque(10, 20, 30));
    assert_eq!(img.get(1, 0), Rgba8::new(10, 20, 30, 0));
    assert_eq!(img.get(2, 0), Rgba8::opaque(10, 20, 30));
}

#[test]
fn threshold_uses_luma() {
    assert_eq!(luma(255, 255, 255), 255);
    assert_eq!(luma(0, 0, 0), 0);
    // Pure blue is dark, pure green is bright.
    assert!(luma(0, 0, 255) < MASK_LUMA_THRESHOLD);
    assert!(luma(0, 255, 0) >= MASK_LUMA_THRESHOLD);
}

#[test]
fn size_mismatch_is_rejected() {
    let mut img = PixelBuffer::new(2, 2).unwrap();
    let mask = PixelBuffer::new(2, 1).unwrap();
    assert!(apply_mask(&mut img, &mask, 0).is_err());
}
