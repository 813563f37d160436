// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Gradient Weave Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all Gradient Weave failures.
///
/// Stepping and querying never fail; only construction and explicit
/// host-side checks produce these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeaveError {
    /// Configuration error (invalid lattice, step cap, delay capacity).
    #[error("config error: {0}")]
    Config(String),

    /// Grid length does not match the lattice it is used with.
    #[error("dimension mismatch: expected {expected} cells, got {got}")]
    Dimension { expected: usize, got: usize },

    /// Numerical error (NaN/Inf found by an explicit finiteness check).
    #[error("numerical error: {0}")]
    Numerical(String),
}

pub type WeaveResult<T> = Result<T, WeaveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = WeaveError::Config("columns must be >= 1, got 0".to_string());
        assert_eq!(e.to_string(), "config error: columns must be >= 1, got 0");

        let e = WeaveError::Dimension {
            expected: 16,
            got: 12,
        };
        assert_eq!(e.to_string(), "dimension mismatch: expected 16 cells, got 12");
    }
}
