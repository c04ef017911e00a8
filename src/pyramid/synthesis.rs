//! Synthesis pass: bilinear backfill from the next coarser level.
//!
//! Fine pixel `(x, y)` maps to coarse coordinate `(x / 2, y / 2)`. The 2x2 tap base is
//! `floor` of that coordinate clamped to `[0, len - 2]`, so the fractional offset may exceed 1
//! on the last fine column/row and the blend extrapolates; results are saturated into a byte.
//! A coarse axis of length 1 degenerates to its single sample.

use crate::buffer::pixel_buffer::PixelBuffer;
use crate::foundation::core::Rgba8;
use crate::foundation::math::{blerp, quantize_channel};
use crate::inpaint::threading::RowExecutor;

/// Per-level synthesis tally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FillTally {
    /// Holes that received an interpolated color.
    pub filled: u64,
    /// Holes left in place because the coarser level had no valid pixel at all.
    pub unfilled: u64,
}

impl std::ops::Add for FillTally {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            filled: self.filled + rhs.filled,
            unfilled: self.unfilled + rhs.unfilled,
        }
    }
}

/// Fill the holes of `fine` in place from `coarse`, which must be `fine` halved (rounding up).
///
/// Pixels that are not holes are never written. Coarse holes still take part in the blend with
/// the color the analysis pass left in them. When `coarse` holds no valid pixel, `fine` is left
/// untouched and all of its holes are reported as unfilled.
pub(crate) fn upsample_into_holes(
    coarse: &PixelBuffer,
    fine: &mut PixelBuffer,
    mask_alpha: u8,
    exec: &RowExecutor,
) -> FillTally {
    debug_assert_eq!(fine.dimensions().halved(), coarse.dimensions());

    if !coarse.has_valid_pixel(mask_alpha) {
        return FillTally {
            filled: 0,
            unfilled: fine.count_holes(mask_alpha),
        };
    }

    exec.for_each_row(fine, |fine_y, row| {
        let mut tally = FillTally::default();
        for (fine_x, px) in row.chunks_exact_mut(4).enumerate() {
            if px[3] != mask_alpha {
                continue;
            }
            px.copy_from_slice(&sample_coarse(coarse, fine_x as u32, fine_y).to_array());
            tally.filled += 1;
        }
        tally
    })
}

/// Interpolated opaque color for fine pixel `(fine_x, fine_y)`.
pub(crate) fn sample_coarse(coarse: &PixelBuffer, fine_x: u32, fine_y: u32) -> Rgba8 {
    let (x0, x1, tx) = axis_taps(fine_x, coarse.width());
    let (y0, y1, ty) = axis_taps(fine_y, coarse.height());

    let [c00, c10, c01, c11] = [
        coarse.get(x0, y0),
        coarse.get(x1, y0),
        coarse.get(x0, y1),
        coarse.get(x1, y1),
    ]
    .map(|c| c.rgb().map(f64::from));
    let ch = |i: usize| quantize_channel(blerp(c00[i], c10[i], c01[i], c11[i], tx, ty));
    Rgba8::opaque(ch(0), ch(1), ch(2))
}

/// Tap indices and fractional offset along one axis.
pub(crate) fn axis_taps(fine: u32, coarse_len: u32) -> (u32, u32, f64) {
    if coarse_len < 2 {
        return (0, 0, 0.0);
    }
    let g = f64::from(fine) / 2.0;
    let base = (g.floor() as u32).min(coarse_len - 2);
    (base, base + 1, g - f64::from(base))
}

#[cfg(test)]
#[path = "../../tests/unit/pyramid/synthesis.rs"]
mod tests;
