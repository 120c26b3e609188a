//! Error taxonomy of the arrangement entry points.

use crate::source::PointSelector;
use thiserror::Error;

/// Errors surfaced before any pair scoring starts.
///
/// The computation is deterministic, so there is no retry path; the caller
/// fixes the selector or the dimensionality and calls again.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ArrangeError {
    /// Fewer than the two axes an arrangement needs.
    #[error("dimensionality {0} is below the two axes an arrangement needs")]
    DimensionalityTooSmall(usize),

    /// The resolved subset contains no points.
    #[error("resolved point set is empty")]
    EmptyPointSet,

    /// The selector names a subset the source does not have.
    #[error("selector {0:?} does not match any point subset")]
    SelectorMismatch(PointSelector),
}

pub type Result<T> = std::result::Result<T, ArrangeError>;
