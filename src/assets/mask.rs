use crate::buffer::pixel_buffer::PixelBuffer;
use crate::foundation::error::{MipfillError, MipfillResult};

/// Mask pixels at or above this luma (and not transparent) mark holes.
pub const MASK_LUMA_THRESHOLD: u8 = 128;

/// Carve holes into `buf` wherever `mask` is bright.
///
/// A mask pixel marks a hole when its alpha is non-zero and its Rec. 601 luma is at least
/// [`MASK_LUMA_THRESHOLD`]. Marked pixels keep their color and get `mask_alpha` as alpha.
/// Returns the number of pixels marked.
pub fn apply_mask(buf: &mut PixelBuffer, mask: &PixelBuffer, mask_alpha: u8) -> MipfillResult<u64> {
    if buf.dimensions() != mask.dimensions() {
        return Err(MipfillError::validation(format!(
            "mask is {}x{} but image is {}x{}",
            mask.width(),
            mask.height(),
            buf.width(),
            buf.height()
        )));
    }

    let mut marked = 0u64;
    for (px, m) in buf
        .data_mut()
        .chunks_exact_mut(4)
        .zip(mask.data().chunks_exact(4))
    {
        if m[3] != 0 && luma(m[0], m[1], m[2]) >= MASK_LUMA_THRESHOLD {
            px[3] = mask_alpha;
            marked += 1;
        }
    }
    Ok(marked)
}

fn luma(r: u8, g: u8, b: u8) -> u8 {
    let y = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    ((y + 500) / 1000) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/assets/mask.rs"]
mod tests;
