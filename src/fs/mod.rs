//! Filesystem utilities for templator.
//!
//! Generated files and new templates are written atomically so an interrupted
//! run never leaves a half-written file behind.

pub mod atomic;

pub use atomic::{atomic_write_file, ensure_dir};
