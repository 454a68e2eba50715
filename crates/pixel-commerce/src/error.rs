//! Storefront error types.

use thiserror::Error;

/// Rejections for price-range edits.
///
/// A rejected edit leaves the committed range untouched; the message is meant
/// to be shown next to the offending input field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    /// New minimum is below the lowest price in the current result set.
    #[error("Minimum price {value} is below the lowest available price {bound}")]
    MinBelowBound { value: f64, bound: f64 },

    /// New minimum would cross the current maximum.
    #[error("Minimum price {value} exceeds the current maximum {max}")]
    MinAboveMax { value: f64, max: f64 },

    /// New maximum is above the highest price in the current result set.
    #[error("Maximum price {value} is above the highest available price {bound}")]
    MaxAboveBound { value: f64, bound: f64 },

    /// New maximum would cross the current minimum.
    #[error("Maximum price {value} is below the current minimum {min}")]
    MaxBelowMin { value: f64, min: f64 },
}
