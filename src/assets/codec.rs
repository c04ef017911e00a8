use std::path::Path;

use anyhow::Context;

use crate::buffer::pixel_buffer::PixelBuffer;
use crate::foundation::error::{MipfillError, MipfillResult};

/// Decode any format supported by `image` into straight-alpha RGBA8.
pub fn decode_image(bytes: &[u8]) -> MipfillResult<PixelBuffer> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    from_rgba_image(dyn_img.to_rgba8())
}

/// Read and decode an image file.
pub fn load_image(path: impl AsRef<Path>) -> MipfillResult<PixelBuffer> {
    let path = path.as_ref();
    let dyn_img = image::open(path).with_context(|| format!("open image '{}'", path.display()))?;
    from_rgba_image(dyn_img.to_rgba8())
}

/// Encode `buf` as PNG at `path`, creating parent directories.
pub fn save_png(path: impl AsRef<Path>, buf: &PixelBuffer) -> MipfillResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        buf.data(),
        buf.width(),
        buf.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn from_rgba_image(rgba: image::RgbaImage) -> MipfillResult<PixelBuffer> {
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(MipfillError::validation("decoded image has no pixels"));
    }
    PixelBuffer::from_raw(width, height, rgba.into_raw())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/codec.rs"]
mod tests;
