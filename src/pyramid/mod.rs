//! Multi-resolution pyramid owned by a single inpaint call.

pub(crate) mod analysis;
pub(crate) mod levels;
pub(crate) mod synthesis;

use crate::buffer::pixel_buffer::PixelBuffer;
use crate::foundation::error::{MipfillError, MipfillResult};
use crate::inpaint::opts::InpaintOpts;
use crate::inpaint::threading::RowExecutor;
use analysis::{EdgePolicy, downsample_level};
use levels::{MAX_LEVELS, level_dimensions};
use synthesis::{FillTally, upsample_into_holes};

/// Ordered pyramid levels, `levels[0]` at full resolution.
///
/// Level `i` measures `ceil(width / 2^i) x ceil(height / 2^i)`.
#[derive(Clone, Debug)]
pub struct Pyramid {
    levels: Vec<PixelBuffer>,
}

impl Pyramid {
    /// Allocate `levels` buffers and copy `input` into level 0. Coarser levels start transparent.
    pub fn allocate(input: &PixelBuffer, levels: usize) -> MipfillResult<Self> {
        if levels == 0 {
            return Err(MipfillError::validation("pyramid needs at least one level"));
        }
        if levels > MAX_LEVELS {
            return Err(MipfillError::validation(format!(
                "pyramid level count {levels} exceeds the maximum of {MAX_LEVELS}"
            )));
        }
        let mut out = Vec::with_capacity(levels);
        out.push(input.clone());
        for dims in level_dimensions(input.dimensions(), levels).into_iter().skip(1) {
            out.push(PixelBuffer::new(dims.width, dims.height)?);
        }
        Ok(Self { levels: out })
    }

    /// Run the analysis pass with the given options.
    pub fn analyze(&mut self, opts: &InpaintOpts) -> MipfillResult<()> {
        opts.validate()?;
        let exec = RowExecutor::new(&opts.threading)?;
        self.analyze_with(opts.mask_alpha, opts.edge_policy, &exec);
        Ok(())
    }

    /// Run the synthesis pass with the given options; returns the total fill tally.
    pub fn synthesize(&mut self, opts: &InpaintOpts) -> MipfillResult<FillTally> {
        opts.validate()?;
        let exec = RowExecutor::new(&opts.threading)?;
        Ok(self.synthesize_with(opts.mask_alpha, &exec))
    }

    /// Build levels `1..len` from their finer neighbors.
    pub(crate) fn analyze_with(&mut self, mask_alpha: u8, policy: EdgePolicy, exec: &RowExecutor) {
        for level in 1..self.levels.len() {
            let (finer, rest) = self.levels.split_at_mut(level);
            let src = &finer[level - 1];
            let dst = &mut rest[0];
            let holes = downsample_level(src, dst, mask_alpha, policy, exec);
            tracing::debug!(
                level,
                width = dst.width(),
                height = dst.height(),
                holes,
                "analysis level built"
            );
        }
    }

    /// Fill holes from the coarsest level down to level 0.
    pub(crate) fn synthesize_with(&mut self, mask_alpha: u8, exec: &RowExecutor) -> FillTally {
        let mut total = FillTally::default();
        for level in (0..self.levels.len().saturating_sub(1)).rev() {
            let (finer, coarser) = self.levels.split_at_mut(level + 1);
            let fine = &mut finer[level];
            let coarse = &coarser[0];
            let tally = upsample_into_holes(coarse, fine, mask_alpha, exec);
            tracing::debug!(
                level,
                filled = tally.filled,
                unfilled = tally.unfilled,
                "synthesis level filled"
            );
            total = total + tally;
        }
        total
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always `false`; a pyramid has at least level 0.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Level `i`, if present.
    pub fn level(&self, i: usize) -> Option<&PixelBuffer> {
        self.levels.get(i)
    }

    /// All levels, finest first.
    pub fn levels(&self) -> &[PixelBuffer] {
        &self.levels
    }

    /// Hole count of every level, finest first.
    pub fn level_holes(&self, mask_alpha: u8) -> Vec<u64> {
        self.levels
            .iter()
            .map(|l| l.count_holes(mask_alpha))
            .collect()
    }

    /// Consume the pyramid and return level 0.
    pub fn into_base(self) -> PixelBuffer {
        let mut levels = self.levels;
        levels.swap_remove(0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pyramid/pyramid.rs"]
mod tests;
