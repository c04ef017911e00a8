use crate::foundation::core::Dimensions;

/// Upper bound on requested levels. A `u32` side reaches 1 after at most 33 levels.
pub const MAX_LEVELS: usize = 64;

/// Dimensions of every pyramid level, finest first.
///
/// Level `i` is `ceil(width / 2^i) x ceil(height / 2^i)`. Computed by repeated halving so any
/// level count is safe; once a level reaches 1x1 every further level is 1x1 too.
pub fn level_dimensions(base: Dimensions, levels: usize) -> Vec<Dimensions> {
    let mut out = Vec::with_capacity(levels.min(MAX_LEVELS));
    let mut dims = base;
    for _ in 0..levels {
        out.push(dims);
        dims = dims.halved();
    }
    out
}

/// Smallest level count whose coarsest level is 1x1.
///
/// Requests beyond this only append redundant 1x1 levels.
pub fn levels_to_unit(base: Dimensions) -> usize {
    let mut levels = 1usize;
    let mut dims = base;
    while !dims.is_unit() {
        dims = dims.halved();
        levels += 1;
    }
    levels
}

#[cfg(test)]
#[path = "../../tests/unit/pyramid/levels.rs"]
mod tests;
