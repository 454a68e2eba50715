//! Cache error types.

use thiserror::Error;

/// Errors that can occur when using the cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The cache lock was poisoned by a panicking writer.
    #[error("Cache lock poisoned: {0}")]
    Poisoned(String),
}
