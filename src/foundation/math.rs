pub(crate) fn lerp(s: f64, e: f64, t: f64) -> f64 {
    s + (e - s) * t
}

/// Bilinear blend of a 2x2 neighborhood; `tx` runs along `c00 -> c10`, `ty` along rows.
pub(crate) fn blerp(c00: f64, c10: f64, c01: f64, c11: f64, tx: f64, ty: f64) -> f64 {
    lerp(lerp(c00, c10, tx), lerp(c01, c11, tx), ty)
}

/// Quantize an interpolated channel: round half to even, then saturate into `[0, 255]`.
///
/// Offsets past the last coarse sample extrapolate, so values outside the byte range are
/// expected here.
pub(crate) fn quantize_channel(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round_ties_even().clamp(0.0, 255.0) as u8
}

/// Floor of `sum / count`, saturated into a byte. `count` must be non-zero.
pub(crate) fn mean_channel(sum: u32, count: u32) -> u8 {
    debug_assert!(count > 0);
    (sum / count).min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
