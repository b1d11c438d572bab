//! Error types for the layout engine

use thiserror::Error;

/// Errors that can occur during layout computation.
///
/// The parser rejects empty input, so a degenerate tree reaching layout
/// indicates a caller bypassing the pipeline; the guard is defensive.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("cannot lay out an empty tree")]
    EmptyTree,
}
