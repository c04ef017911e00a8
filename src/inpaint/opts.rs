use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::{DEFAULT_MASK_ALPHA, OPAQUE_ALPHA};
use crate::foundation::error::{MipfillError, MipfillResult};
use crate::pyramid::analysis::EdgePolicy;
use crate::pyramid::levels::MAX_LEVELS;

/// Default number of pyramid levels, level 0 included.
pub const DEFAULT_LEVELS: usize = 9;

/// Options for one inpaint call.
///
/// Deserializes from JSON with every field optional, e.g. `{"levels": 6, "edge_policy": "clamp"}`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InpaintOpts {
    /// Number of pyramid levels including the full-resolution level.
    pub levels: usize,
    /// Alpha value marking a pixel as a hole.
    pub mask_alpha: u8,
    /// How the analysis pass treats 2x2 taps that fall off an odd-sized level.
    pub edge_policy: EdgePolicy,
    /// Row-level parallelism for both passes.
    pub threading: InpaintThreading,
}

impl Default for InpaintOpts {
    fn default() -> Self {
        Self {
            levels: DEFAULT_LEVELS,
            mask_alpha: DEFAULT_MASK_ALPHA,
            edge_policy: EdgePolicy::default(),
            threading: InpaintThreading::default(),
        }
    }
}

impl InpaintOpts {
    /// Default options with a different level count.
    pub fn with_levels(levels: usize) -> Self {
        Self {
            levels,
            ..Self::default()
        }
    }

    /// Check option invariants before any buffer is allocated.
    pub fn validate(&self) -> MipfillResult<()> {
        if self.levels == 0 {
            return Err(MipfillError::validation("inpaint 'levels' must be >= 1"));
        }
        if self.levels > MAX_LEVELS {
            return Err(MipfillError::validation(format!(
                "inpaint 'levels' must be <= {MAX_LEVELS}, got {}",
                self.levels
            )));
        }
        if self.mask_alpha == OPAQUE_ALPHA {
            return Err(MipfillError::validation(
                "inpaint 'mask_alpha' must not be 255: filled pixels are written with alpha 255",
            ));
        }
        self.threading.validate()
    }

    /// Parse options from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> MipfillResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| MipfillError::serde(format!("parse inpaint options JSON: {e}")))
    }

    /// Parse options from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> MipfillResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            MipfillError::validation(format!("open inpaint options '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

/// Row-parallel execution settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InpaintThreading {
    /// Split each pass across rows on a dedicated rayon pool.
    pub parallel: bool,
    /// Worker thread override; `None` uses rayon defaults. Ignored unless `parallel`.
    pub threads: Option<usize>,
}

impl InpaintThreading {
    pub(crate) fn validate(&self) -> MipfillResult<()> {
        if let Some(n) = self.threads
            && n == 0
        {
            return Err(MipfillError::validation(
                "inpaint threading 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/inpaint/opts.rs"]
mod tests;
