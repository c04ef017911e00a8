//! Boundary helpers: image files in and out, and mask images carved into alpha.

pub(crate) mod codec;
pub(crate) mod mask;
