//! Errors reported by the emission engine.

use thiserror::Error;

/// Result type for strict rendering.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A nested scope called `indent()` without a matching `dedent()`.
    #[error("writer finished with {depth} unclosed indentation level(s)")]
    UnbalancedIndent { depth: usize },
}
