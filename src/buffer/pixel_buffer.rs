use crate::foundation::core::{Dimensions, Rgba8};
use crate::foundation::error::{MipfillError, MipfillResult};

/// Owned RGBA8 raster, tightly packed, row-major, straight alpha.
///
/// Pixel `(x, y)` starts at byte `y * width * 4 + x * 4`. Coordinates passed to [`get`](Self::get)
/// and [`set`](Self::set) must lie in `[0, width) x [0, height)`; going outside is a caller bug
/// and panics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    dims: Dimensions,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a fully transparent (`0,0,0,0`) buffer.
    pub fn new(width: u32, height: u32) -> MipfillResult<Self> {
        Self::filled(width, height, Rgba8::default())
    }

    /// Allocate a buffer with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Rgba8) -> MipfillResult<Self> {
        let dims = Dimensions::new(width, height)?;
        let len = checked_len(dims)?;
        let data = color.to_array().repeat(len / 4);
        Ok(Self { dims, data })
    }

    /// Wrap existing RGBA8 bytes; `data.len()` must equal `width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> MipfillResult<Self> {
        let dims = Dimensions::new(width, height)?;
        let expected = checked_len(dims)?;
        if data.len() != expected {
            return Err(MipfillError::validation(format!(
                "rgba8 buffer for {width}x{height} must hold {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self { dims, data })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.dims.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.dims.height
    }

    /// Width and height together.
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Raw RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return its bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Byte offset of pixel `(x, y)`.
    pub fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.dims.width && y < self.dims.height,
            "pixel ({x}, {y}) outside {}x{}",
            self.dims.width,
            self.dims.height
        );
        (y as usize * self.dims.width as usize + x as usize) * 4
    }

    /// Read pixel `(x, y)`.
    pub fn get(&self, x: u32, y: u32) -> Rgba8 {
        let i = self.index(x, y);
        Rgba8::new(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        )
    }

    /// Overwrite pixel `(x, y)`.
    pub fn set(&mut self, x: u32, y: u32, color: Rgba8) {
        let i = self.index(x, y);
        self.data[i..i + 4].copy_from_slice(&color.to_array());
    }

    /// `true` when pixel `(x, y)` carries the hole sentinel.
    pub fn is_hole(&self, x: u32, y: u32, mask_alpha: u8) -> bool {
        self.data[self.index(x, y) + 3] == mask_alpha
    }

    /// Number of pixels whose alpha equals `mask_alpha`.
    pub fn count_holes(&self, mask_alpha: u8) -> u64 {
        self.data
            .chunks_exact(4)
            .filter(|px| px[3] == mask_alpha)
            .count() as u64
    }

    /// `true` when at least one pixel's alpha differs from `mask_alpha`.
    pub fn has_valid_pixel(&self, mask_alpha: u8) -> bool {
        self.data.chunks_exact(4).any(|px| px[3] != mask_alpha)
    }

    /// Bytes of row `y`.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.row_stride();
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    pub(crate) fn row_stride(&self) -> usize {
        self.dims.width as usize * 4
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

fn checked_len(dims: Dimensions) -> MipfillResult<usize> {
    dims.rgba8_len().ok_or_else(|| {
        MipfillError::validation(format!(
            "rgba8 buffer size overflow for {}x{}",
            dims.width, dims.height
        ))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/buffer/pixel_buffer.rs"]
mod tests;
