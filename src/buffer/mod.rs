pub(crate) mod pixel_buffer;
