//! Quantum state preparation and Dirac notation rendering
//!
//! This crate turns a raw complex amplitude vector into a valid normalized
//! quantum state and renders it as a human-readable ket expression:
//! - [`QuantumState`]: immutable normalized state over the computational basis
//! - [`StatePreparation`]: two-phase prepare/render lifecycle for raw input
//! - [`dirac_notation`]: sparse symbolic rendering over basis labels
//!
//! It is aimed at state *preparation* only: there is no gate application,
//! no evolution, and no measurement.
//!
//! # Example
//! ```
//! use num_complex::Complex64;
//! use qprep_state::{dirac_notation, QuantumState};
//!
//! let amps = vec![
//!     Complex64::new(1.0, 0.0),
//!     Complex64::new(0.0, 0.0),
//!     Complex64::new(0.0, 0.0),
//!     Complex64::new(1.0, 0.0),
//! ];
//! let state = QuantumState::prepare(2, &amps).unwrap();
//! assert_eq!(dirac_notation(&state), "(0.707)|00⟩ + (0.707)|11⟩");
//! ```

pub mod error;
pub mod notation;
pub mod state;
pub mod validation;

// Re-exports for convenience
pub use error::{Result, StateError};
pub use notation::{basis_label, dirac_notation};
pub use num_complex::Complex64;
pub use state::{QuantumState, StatePreparation};
pub use validation::{validate_normalization, ValidationResult};
