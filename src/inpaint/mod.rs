//! Orchestration: options, threading, and the `inpaint` entry points.

pub(crate) mod opts;
pub(crate) mod pipeline;
pub(crate) mod threading;
