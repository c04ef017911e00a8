//! Analysis pass: masked 2x2 box-filter downsample.
//!
//! Each destination pixel averages the non-hole pixels of its 2x2 source block. A block with no
//! valid pixel produces a hole (`0,0,0,mask_alpha`); any other block produces an opaque pixel
//! with floored channel means.

use crate::buffer::pixel_buffer::PixelBuffer;
use crate::foundation::core::{Dimensions, Rgba8};
use crate::foundation::math::mean_channel;
use crate::inpaint::threading::RowExecutor;

/// Treatment of the `2x+1` / `2y+1` taps that fall past the last column or row of an
/// odd-sized source level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgePolicy {
    /// Missing taps contribute nothing; edge pixels average fewer samples.
    #[default]
    Skip,
    /// Missing taps reuse the last column/row, weighting the edge sample twice.
    Clamp,
}

impl EdgePolicy {
    /// Map a tap coordinate into the source level, or `None` when the tap is dropped.
    pub fn resolve(self, src: Dimensions, x: u32, y: u32) -> Option<(u32, u32)> {
        match self {
            Self::Skip => (x < src.width && y < src.height).then_some((x, y)),
            Self::Clamp => Some((x.min(src.width - 1), y.min(src.height - 1))),
        }
    }
}

const BLOCK_TAPS: [(u32, u32); 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];

/// Fill `dst` from `src`, where `dst` is `src` halved (rounding up). Returns the number of
/// holes left in `dst`.
pub(crate) fn downsample_level(
    src: &PixelBuffer,
    dst: &mut PixelBuffer,
    mask_alpha: u8,
    policy: EdgePolicy,
    exec: &RowExecutor,
) -> u64 {
    debug_assert_eq!(src.dimensions().halved(), dst.dimensions());

    exec.for_each_row(dst, |dst_y, row| {
        let mut holes = 0u64;
        for (dst_x, px) in row.chunks_exact_mut(4).enumerate() {
            let color = average_block(src, dst_x as u32, dst_y, mask_alpha, policy);
            if color.is_hole(mask_alpha) {
                holes += 1;
            }
            px.copy_from_slice(&color.to_array());
        }
        holes
    })
}

/// Mean of the valid pixels in the 2x2 block under destination pixel `(dst_x, dst_y)`.
pub(crate) fn average_block(
    src: &PixelBuffer,
    dst_x: u32,
    dst_y: u32,
    mask_alpha: u8,
    policy: EdgePolicy,
) -> Rgba8 {
    let dims = src.dimensions();
    let mut sum = [0u32; 3];
    let mut count = 0u32;

    for (dx, dy) in BLOCK_TAPS {
        let Some((sx, sy)) = policy.resolve(dims, dst_x * 2 + dx, dst_y * 2 + dy) else {
            continue;
        };
        let px = src.get(sx, sy);
        if px.is_hole(mask_alpha) {
            continue;
        }
        for (acc, c) in sum.iter_mut().zip(px.rgb()) {
            *acc += u32::from(c);
        }
        count += 1;
    }

    if count == 0 {
        return Rgba8::hole(mask_alpha);
    }
    Rgba8::opaque(
        mean_channel(sum[0], count),
        mean_channel(sum[1], count),
        mean_channel(sum[2], count),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/pyramid/analysis.rs"]
mod tests;
