//! Error types raised at the public API boundary.

use thiserror::Error;

/// Errors a [`crate::LazySorted`] query can raise.
///
/// Raising one of these never corrupts the handle: every position-
/// resolving operation either completes a swap or hasn't begun it, so
/// the pivot index and buffer stay internally consistent even when a
/// query aborts partway through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LazyOrderError {
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    #[error("slice step cannot be zero")]
    ZeroStep,

    #[error("value not found")]
    NotFound,
}
