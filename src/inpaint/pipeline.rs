use crate::buffer::pixel_buffer::PixelBuffer;
use crate::foundation::error::MipfillResult;
use crate::inpaint::opts::InpaintOpts;
use crate::inpaint::threading::RowExecutor;
use crate::pyramid::Pyramid;
use crate::pyramid::levels::levels_to_unit;

/// Outcome counters for one inpaint call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InpaintStats {
    /// Pyramid levels used, level 0 included.
    pub levels: usize,
    /// Holes in the input.
    pub holes_in: u64,
    /// Level-0 holes that received a color.
    pub filled: u64,
    /// Level-0 holes left unfilled (no valid pixel anywhere above them).
    pub unfilled: u64,
}

/// Fill the holes of `input` using `levels` pyramid levels and default options otherwise.
///
/// Returns a buffer of the same size in which every former hole has alpha 255 and every other
/// pixel is byte-identical to `input`.
pub fn inpaint(input: &PixelBuffer, levels: usize) -> MipfillResult<PixelBuffer> {
    inpaint_with_opts(input, &InpaintOpts::with_levels(levels))
}

/// Fill the holes of `input` with explicit options.
pub fn inpaint_with_opts(input: &PixelBuffer, opts: &InpaintOpts) -> MipfillResult<PixelBuffer> {
    inpaint_with_stats(input, opts).map(|(out, _)| out)
}

/// Fill the holes of `input` and report how many were filled.
#[tracing::instrument(skip(input), fields(width = input.width(), height = input.height()))]
pub fn inpaint_with_stats(
    input: &PixelBuffer,
    opts: &InpaintOpts,
) -> MipfillResult<(PixelBuffer, InpaintStats)> {
    opts.validate()?;

    let holes_in = input.count_holes(opts.mask_alpha);
    let useful = levels_to_unit(input.dimensions());
    if opts.levels > useful {
        tracing::warn!(
            requested = opts.levels,
            useful,
            "level count exceeds what is needed to reach 1x1; extra levels are 1x1 copies"
        );
    }

    if holes_in == 0 {
        tracing::debug!("input has no holes; returning it unchanged");
        return Ok((
            input.clone(),
            InpaintStats {
                levels: opts.levels,
                ..InpaintStats::default()
            },
        ));
    }

    let exec = RowExecutor::new(&opts.threading)?;
    let mut pyramid = Pyramid::allocate(input, opts.levels)?;

    pyramid.analyze_with(opts.mask_alpha, opts.edge_policy, &exec);
    pyramid.synthesize_with(opts.mask_alpha, &exec);

    let out = pyramid.into_base();
    let unfilled = out.count_holes(opts.mask_alpha);
    let stats = InpaintStats {
        levels: opts.levels,
        holes_in,
        filled: holes_in - unfilled,
        unfilled,
    };
    if unfilled > 0 {
        tracing::warn!(
            unfilled,
            "some holes have no valid pixel above them and were left unfilled"
        );
    }
    tracing::info!(
        holes_in,
        filled = stats.filled,
        unfilled,
        parallel = exec.is_parallel(),
        "inpaint finished"
    );
    Ok((out, stats))
}

#[cfg(test)]
#[path = "../../tests/unit/inpaint/pipeline.rs"]
mod tests;
