//! mipfill fills masked regions of an RGBA8 image with a multi-resolution pyramid.
//!
//! A pixel is a hole when its alpha equals the mask sentinel (`0` by default).
//!
//! # Pipeline overview
//!
//! 1. **Allocate**: level 0 is a copy of the input; level `i` is `ceil(w / 2^i) x ceil(h / 2^i)`.
//! 2. **Analyze**: each coarser level averages the valid pixels of 2x2 blocks of the finer one.
//! 3. **Synthesize**: from the coarsest level down, holes are filled by bilinear interpolation
//!    of the next coarser level. Valid pixels are never written.
//! 4. **Return** level 0.
//!
//! The transform is pure and deterministic. Row-parallel execution (rayon) yields the same
//! bytes as the sequential path.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod buffer;
mod foundation;
mod inpaint;
mod pyramid;

pub use assets::codec::{decode_image, load_image, save_png};
pub use assets::mask::{MASK_LUMA_THRESHOLD, apply_mask};
pub use buffer::pixel_buffer::PixelBuffer;
pub use foundation::core::{DEFAULT_MASK_ALPHA, Dimensions, OPAQUE_ALPHA, Rgba8};
pub use foundation::error::{MipfillError, MipfillResult};
pub use inpaint::opts::{DEFAULT_LEVELS, InpaintOpts, InpaintThreading};
pub use inpaint::pipeline::{InpaintStats, inpaint, inpaint_with_opts, inpaint_with_stats};
pub use pyramid::Pyramid;
pub use pyramid::analysis::EdgePolicy;
pub use pyramid::levels::{MAX_LEVELS, level_dimensions, levels_to_unit};
pub use pyramid::synthesis::FillTally;
