//! Quantum state representation and preparation
//!
//! [`QuantumState`] is an immutable, normalized amplitude vector over the
//! computational basis. It can only be obtained through a successful
//! [`QuantumState::prepare`] call, so every live instance satisfies the
//! normalization invariant.
//!
//! [`StatePreparation`] wraps the raw input and tracks the
//! unprepared/prepared lifecycle, for callers that hold on to the raw
//! amplitudes and render later.

use crate::error::{Result, StateError};
use crate::notation;
use num_complex::Complex64;
use std::fmt;

/// Norm below which an amplitude vector is treated as all-zero
///
/// Dividing by a norm this small would amplify floating-point noise into
/// the prepared state, so it is rejected like an exactly-zero vector.
pub const ZERO_NORM_GUARD: f64 = 1e-14;

/// Largest supported qubit count (keeps `2^num_qubits` well inside `usize`)
pub const MAX_QUBITS: usize = 30;

/// A normalized quantum state over `2^num_qubits` computational basis states
///
/// The amplitude vector is conceptually a column (dimension × 1): entry `i`
/// is the coefficient of the basis state labelled by the `num_qubits`-bit
/// binary expansion of `i`.
///
/// # Example
///
/// ```
/// use num_complex::Complex64;
/// use qprep_state::QuantumState;
///
/// let amps = vec![Complex64::new(1.0, 0.0); 4];
/// let state = QuantumState::prepare(2, &amps).unwrap();
/// assert_eq!(state.dimension(), 4);
/// assert!((state.norm_sqr() - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QuantumState {
    /// Number of qubits
    num_qubits: usize,

    /// State dimension (2^num_qubits)
    dimension: usize,

    /// Normalized amplitudes in counting order of basis labels
    amplitudes: Vec<Complex64>,
}

impl QuantumState {
    /// Normalize raw amplitudes into a quantum state
    ///
    /// # Arguments
    /// * `num_qubits` - Number of qubits
    /// * `amplitudes` - Raw complex amplitudes (must have length 2^num_qubits)
    ///
    /// # Errors
    /// Returns [`StateError::InvalidQubitCount`] if `num_qubits` is zero or
    /// exceeds [`MAX_QUBITS`], [`StateError::DimensionMismatch`] if the
    /// amplitude count is not 2^num_qubits, and [`StateError::ZeroVector`]
    /// if the vector has (effectively) zero norm.
    ///
    /// # Example
    /// ```
    /// use num_complex::Complex64;
    /// use qprep_state::QuantumState;
    ///
    /// let amps = vec![
    ///     Complex64::new(1.0, 0.0),
    ///     Complex64::new(0.0, 0.0),
    /// ];
    /// let state = QuantumState::prepare(1, &amps).unwrap();
    /// assert_eq!(state.amplitudes()[0], Complex64::new(1.0, 0.0));
    /// ```
    pub fn prepare(num_qubits: usize, amplitudes: &[Complex64]) -> Result<Self> {
        if num_qubits == 0 || num_qubits > MAX_QUBITS {
            return Err(StateError::InvalidQubitCount {
                num_qubits,
                max: MAX_QUBITS,
            });
        }

        let dimension = 1usize << num_qubits;

        if amplitudes.len() != dimension {
            return Err(StateError::DimensionMismatch {
                num_qubits,
                expected: dimension,
                actual: amplitudes.len(),
            });
        }

        let norm = amplitudes
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt();
        if norm < ZERO_NORM_GUARD {
            return Err(StateError::ZeroVector);
        }

        let inv_norm = 1.0 / norm;
        let amplitudes = amplitudes.iter().map(|a| a * inv_norm).collect();

        Ok(Self {
            num_qubits,
            dimension,
            amplitudes,
        })
    }

    /// Get the number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the state dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Get the normalized amplitudes
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Compute the L2 norm of the state vector
    pub fn norm(&self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Compute the sum of squared magnitudes
    ///
    /// This is the normalization check value; it is ≈ 1.0 for every state
    /// this type can represent.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }
}

/// Column-form display, one amplitude per line
impl fmt::Display for QuantumState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, amp) in self.amplitudes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[{:.4}{:+.4}j]", amp.re, amp.im)?;
        }
        Ok(())
    }
}

/// Two-phase state preparation with an explicit unprepared/prepared lifecycle
///
/// Captures raw input without validating; [`prepare`](Self::prepare) performs
/// the validation and normalization. A failed preparation leaves the instance
/// unprepared, and [`dirac_notation`](Self::dirac_notation) refuses to render
/// until a preparation has succeeded.
///
/// # Example
///
/// ```
/// use num_complex::Complex64;
/// use qprep_state::StatePreparation;
///
/// let mut prep = StatePreparation::new(1, vec![
///     Complex64::new(1.0, 0.0),
///     Complex64::new(1.0, 0.0),
/// ]);
/// prep.prepare().unwrap();
/// assert_eq!(prep.dirac_notation().unwrap(), "(0.707)|0⟩ + (0.707)|1⟩");
/// ```
#[derive(Debug, Clone)]
pub struct StatePreparation {
    num_qubits: usize,
    raw: Vec<Complex64>,
    state: Option<QuantumState>,
}

impl StatePreparation {
    /// Capture raw amplitudes for later preparation
    pub fn new(num_qubits: usize, amplitudes: Vec<Complex64>) -> Self {
        Self {
            num_qubits,
            raw: amplitudes,
            state: None,
        }
    }

    /// Validate and normalize the captured amplitudes
    ///
    /// # Errors
    /// Same failure modes as [`QuantumState::prepare`]. On failure the
    /// instance stays unprepared.
    pub fn prepare(&mut self) -> Result<&QuantumState> {
        let state = QuantumState::prepare(self.num_qubits, &self.raw)?;
        Ok(self.state.insert(state))
    }

    /// Whether a preparation has succeeded
    pub fn is_prepared(&self) -> bool {
        self.state.is_some()
    }

    /// Get the prepared state, if any
    pub fn state(&self) -> Option<&QuantumState> {
        self.state.as_ref()
    }

    /// Render the prepared state in Dirac notation
    ///
    /// # Errors
    /// Returns [`StateError::NotPrepared`] if no preparation has succeeded.
    pub fn dirac_notation(&self) -> Result<String> {
        let state = self.state.as_ref().ok_or(StateError::NotPrepared)?;
        Ok(notation::dirac_notation(state))
    }
}
