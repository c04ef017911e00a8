use crate::foundation::error::{MipfillError, MipfillResult};

/// Alpha written into every pixel produced by the analysis or synthesis pass.
pub const OPAQUE_ALPHA: u8 = 255;

/// Default hole sentinel: a pixel whose alpha equals this value is unknown.
pub const DEFAULT_MASK_ALPHA: u8 = 0;

/// Width and height of one raster, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Create validated dimensions; both sides must be non-zero.
    pub fn new(width: u32, height: u32) -> MipfillResult<Self> {
        if width == 0 || height == 0 {
            return Err(MipfillError::validation(format!(
                "image dimensions must be non-zero, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Number of pixels covered.
    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of RGBA8 bytes needed to store a raster of this size.
    ///
    /// Returns `None` when the byte count does not fit in `usize`.
    pub fn rgba8_len(self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4))
    }

    /// Dimensions of the next coarser level: each side halved, rounding up.
    pub fn halved(self) -> Self {
        Self {
            width: self.width.div_ceil(2),
            height: self.height.div_ceil(2),
        }
    }

    /// `true` once both sides have collapsed to a single pixel.
    pub fn is_unit(self) -> bool {
        self.width == 1 && self.height == 1
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; doubles as the validity flag.
    pub a: u8,
}

impl Rgba8 {
    /// Build a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, OPAQUE_ALPHA)
    }

    /// The placeholder written for a pixel that has no valid data.
    pub const fn hole(mask_alpha: u8) -> Self {
        Self::new(0, 0, 0, mask_alpha)
    }

    /// `true` when this pixel is an unknown hole under `mask_alpha`.
    pub const fn is_hole(self, mask_alpha: u8) -> bool {
        self.a == mask_alpha
    }

    /// Channels as `[r, g, b, a]`.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Color channels only, in `[r, g, b]` order.
    pub const fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from(px: [u8; 4]) -> Self {
        Self::new(px[0], px[1], px[2], px[3])
    }
}

impl From<Rgba8> for [u8; 4] {
    fn from(c: Rgba8) -> Self {
        c.to_array()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
