//! SIFT4 approximate edit distance.
//!
//! SIFT4 scans two token sequences once with a pair of cursors, resynchronising
//! them within a bounded window after every mismatch. It runs in
//! O(n * max_offset) and approximates, but does not compute, the exact edit
//! distance.
//!
//! - [`engine::Sift4`] - The general, fully configurable algorithm
//! - [`evaluator`] - Strategy function types, defaults and presets
//! - [`simple`] - The simplest variant, without transposition tracking

pub mod engine;
pub mod evaluator;
pub mod simple;

pub use engine::Sift4;
pub use simple::{simple, simple_str};
