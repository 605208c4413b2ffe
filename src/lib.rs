//! # sift4
//!
//! A fast, tunable implementation of the SIFT4 approximate string distance.
//!
//! ## Features
//!
//! - Single-pass O(n * max_offset) distance with transposition detection
//! - Pluggable tokenizer, token matcher and cost evaluators
//! - Early exit once a distance threshold is reached
//! - Built-in character, grapheme, word and n-gram tokenizers
//! - Parallel ranking of candidates against a query
//!
//! ## Example
//!
//! ```
//! use sift4::prelude::*;
//!
//! let sift4 = Sift4::new().max_offset(5);
//! assert_eq!(sift4.distance("kitten", "sitting"), 3.0);
//!
//! let matcher = Sift4Matcher::new("spelling");
//! let best = matcher.best_match(&["speling", "peeling"]).unwrap();
//! assert_eq!(best.candidate, "speling");
//! ```

pub mod cli;
pub mod config;
pub mod distance;
pub mod error;
pub mod matcher;
pub mod tokenizer;

pub mod prelude {
    pub use crate::config::Sift4Config;
    pub use crate::distance::Sift4;
    pub use crate::error::{Result, Sift4Error};
    pub use crate::matcher::{Match, Sift4Matcher};
    pub use crate::tokenizer::TokenizerKind;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
