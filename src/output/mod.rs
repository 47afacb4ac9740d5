// src/output/mod.rs

//! Where rendered overlays go: a file, stdout, or a test double.

pub mod sink;

pub use sink::{FileOverlaySink, OverlaySink, StdoutOverlaySink};
