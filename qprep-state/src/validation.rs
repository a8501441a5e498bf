//! Normalization checks with diagnostics
//!
//! [`QuantumState`](crate::QuantumState) guarantees normalization by
//! construction; this module is for checking vectors coming from outside
//! (raw input, round-tripped output) and for reporting the normalization
//! check value to users.

use num_complex::Complex64;

/// Default tolerance for normalization checks
pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-10;

/// Normalization check result with diagnostics
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the vector is normalized within tolerance
    pub valid: bool,
    /// L2 norm of the vector
    pub norm: f64,
    /// Deviation of the norm from 1.0
    pub norm_error: f64,
    /// Sum of squared magnitudes
    pub total_probability: f64,
}

impl ValidationResult {
    /// Check if the vector passed validation
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ValidationResult(valid={}, norm={:.6}, error={:.2e})",
            self.valid, self.norm, self.norm_error
        )
    }
}

/// Validate vector normalization
///
/// # Arguments
/// * `amplitudes` - The amplitudes to validate
/// * `tolerance` - Maximum allowed deviation from norm = 1.0
///
/// # Example
/// ```
/// use num_complex::Complex64;
/// use qprep_state::validation::{validate_normalization, DEFAULT_NORM_TOLERANCE};
///
/// let amplitudes = vec![
///     Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0),
///     Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0),
/// ];
/// assert!(validate_normalization(&amplitudes, DEFAULT_NORM_TOLERANCE).is_valid());
/// ```
pub fn validate_normalization(amplitudes: &[Complex64], tolerance: f64) -> ValidationResult {
    let norm_squared: f64 = amplitudes.iter().map(|a| a.norm_sqr()).sum();
    let norm = norm_squared.sqrt();
    let norm_error = (norm - 1.0).abs();

    ValidationResult {
        valid: norm_error < tolerance,
        norm,
        norm_error,
        total_probability: norm_squared,
    }
}
