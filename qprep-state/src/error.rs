//! Error types for state preparation

use thiserror::Error;

/// Errors that can occur during state preparation and rendering
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Qubit count outside the supported range
    #[error("Number of qubits must be between 1 and {max}, got {num_qubits}")]
    InvalidQubitCount { num_qubits: usize, max: usize },

    /// Amplitude count does not match 2^num_qubits
    #[error("Dimension mismatch: {num_qubits} qubits require {expected} amplitudes, got {actual}")]
    DimensionMismatch {
        num_qubits: usize,
        expected: usize,
        actual: usize,
    },

    /// Amplitude vector has zero norm, normalization is undefined
    #[error("Amplitudes cannot all be zero")]
    ZeroVector,

    /// Rendering requested before the state was prepared
    #[error("State not prepared yet, call prepare() first")]
    NotPrepared,
}

/// Result type for state preparation operations
pub type Result<T> = std::result::Result<T, StateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message() {
        let err = StateError::DimensionMismatch {
            num_qubits: 2,
            expected: 4,
            actual: 3,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("2 qubits"));
        assert!(msg.contains("4"));
        assert!(msg.contains("3"));
    }

    #[test]
    fn test_not_prepared_message() {
        let msg = format!("{}", StateError::NotPrepared);
        assert!(msg.contains("prepare()"));
    }
}
