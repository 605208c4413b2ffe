//! Error types for the SIFT4 library.
//!
//! The distance kernel itself never fails: every input, including empty
//! ones, has a defined result. Errors only arise at the edges of the crate,
//! when configuration is loaded, validated or parsed from the command line.
//!
//! # Examples
//!
//! ```
//! use sift4::error::{Result, Sift4Error};
//!
//! fn check_offset(offset: i64) -> Result<usize> {
//!     usize::try_from(offset).map_err(|_| Sift4Error::invalid_argument("negative offset"))
//! }
//!
//! assert!(check_offset(-1).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for SIFT4 operations.
#[derive(Error, Debug)]
pub enum Sift4Error {
    /// I/O errors (reading configuration or candidate files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value supplied by the caller could not be interpreted
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A configuration that parses but cannot be used
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for operations that may fail with Sift4Error.
pub type Result<T> = std::result::Result<T, Sift4Error>;

impl Sift4Error {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Sift4Error::InvalidArgument(msg.into())
    }

    /// Create a new invalid configuration error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Sift4Error::InvalidConfig(msg.into())
    }
}
