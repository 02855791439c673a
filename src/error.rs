//! Error types for graph construction, loading, and verification.
//!
//! Construction errors are all-or-nothing: a failed build never yields a
//! partially populated [`Graph`](crate::graph::Graph).

use thiserror::Error;

/// Main error type for wgraph operations.
///
/// # Examples
///
/// ```
/// use wgraph::error::GraphError;
///
/// let err = GraphError::malformed("self-loop on node 3");
/// assert!(err.to_string().contains("self-loop"));
/// ```
#[derive(Debug, Error)]
pub enum GraphError {
    /// Input violates a structural invariant (bad counts, out-of-range node,
    /// self-loop, non-finite weight, parallel edge, edge-count mismatch).
    #[error("malformed input: {message}")]
    MalformedInput {
        /// What was wrong, line-annotated when raised by the loader
        message: String,
    },

    /// Node count does not fit the node index type.
    #[error("capacity exceeded: {requested} nodes requested, at most {max} supported")]
    Capacity {
        /// Requested node count
        requested: u64,
        /// Largest supported node count
        max: u64,
    },

    /// A verification routine rejected an algorithm's output.
    #[error("postcondition violated in {algorithm}: {check}")]
    PostconditionViolated {
        /// Algorithm whose output failed
        algorithm: &'static str,
        /// Name of the failed check
        check: &'static str,
    },

    /// I/O error while reading graph input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Create a malformed-input error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: message.into(),
        }
    }

    /// Create a malformed-input error annotated with a 1-based line number.
    #[must_use]
    pub fn malformed_at(line: usize, message: impl std::fmt::Display) -> Self {
        Self::MalformedInput {
            message: format!("line {line}: {message}"),
        }
    }

    /// Whether this error was caused by invalid input data.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, GraphError>;
