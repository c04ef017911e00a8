use std::ops::Add;

use rayon::prelude::*;

use crate::buffer::pixel_buffer::PixelBuffer;
use crate::foundation::error::{MipfillError, MipfillResult};
use crate::inpaint::opts::InpaintThreading;

/// Runs a per-row kernel over one destination level, sequentially or on a rayon pool.
///
/// Kernels only read from a different, already finalized level, so row order does not affect
/// the result.
pub(crate) struct RowExecutor {
    pool: Option<rayon::ThreadPool>,
}

impl RowExecutor {
    pub(crate) fn sequential() -> Self {
        Self { pool: None }
    }

    pub(crate) fn new(threading: &InpaintThreading) -> MipfillResult<Self> {
        if !threading.parallel {
            return Ok(Self::sequential());
        }
        Ok(Self {
            pool: Some(build_thread_pool(threading.threads)?),
        })
    }

    pub(crate) fn is_parallel(&self) -> bool {
        self.pool.is_some()
    }

    /// Call `kernel(y, row_bytes)` for every row of `dst` and sum the per-row tallies.
    pub(crate) fn for_each_row<T, F>(&self, dst: &mut PixelBuffer, kernel: F) -> T
    where
        T: Default + Add<Output = T> + Send,
        F: Fn(u32, &mut [u8]) -> T + Sync,
    {
        let stride = dst.row_stride();
        let rows = dst.data_mut();
        match &self.pool {
            None => rows
                .chunks_exact_mut(stride)
                .enumerate()
                .map(|(y, row)| kernel(y as u32, row))
                .fold(T::default(), |acc, t| acc + t),
            Some(pool) => pool.install(|| {
                rows.par_chunks_exact_mut(stride)
                    .enumerate()
                    .map(|(y, row)| kernel(y as u32, row))
                    .reduce(T::default, |a, b| a + b)
            }),
        }
    }
}

fn build_thread_pool(threads: Option<usize>) -> MipfillResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| MipfillError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/inpaint/threading.rs"]
mod tests;
