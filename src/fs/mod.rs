//! Filesystem utilities for helpgen.
//!
//! Both the queue file and generated articles are written through
//! [`atomic_write`], so a crash never leaves either half-written.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;
