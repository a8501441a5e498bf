//! Integration tests for state preparation and Dirac rendering

use approx::assert_relative_eq;
use num_complex::Complex64;
use qprep_state::{
    dirac_notation, validate_normalization, QuantumState, StateError, StatePreparation,
};

fn reals(values: &[f64]) -> Vec<Complex64> {
    values.iter().map(|&re| Complex64::new(re, 0.0)).collect()
}

#[test]
fn normalization_law_holds_for_arbitrary_input() {
    let inputs: Vec<Vec<Complex64>> = vec![
        reals(&[1.0, 1.0, 1.0, 1.0]),
        reals(&[3.0, -4.0, 0.0, 0.0]),
        vec![
            Complex64::new(0.1, 0.9),
            Complex64::new(-2.0, 0.0),
            Complex64::new(0.0, 1e-3),
            Complex64::new(7.0, 7.0),
        ],
    ];

    for amps in inputs {
        let state = QuantumState::prepare(2, &amps).unwrap();
        assert_relative_eq!(state.norm_sqr(), 1.0, epsilon = 1e-10);
        assert!(validate_normalization(state.amplitudes(), 1e-10).is_valid());
    }
}

#[test]
fn dimensionality_invariant() {
    for num_qubits in 1..=6 {
        let dim = 1 << num_qubits;
        let amps = reals(&vec![1.0; dim]);
        let state = QuantumState::prepare(num_qubits, &amps).unwrap();
        assert_eq!(state.dimension(), dim);
        assert_eq!(state.amplitudes().len(), dim);
    }
}

#[test]
fn dimension_mismatch_is_rejected() {
    let err = QuantumState::prepare(2, &reals(&[1.0, 0.0, 0.0])).unwrap_err();
    assert!(matches!(
        err,
        StateError::DimensionMismatch {
            expected: 4,
            actual: 3,
            ..
        }
    ));
}

#[test]
fn zero_vector_is_rejected() {
    let err = QuantumState::prepare(2, &reals(&[0.0, 0.0, 0.0, 0.0])).unwrap_err();
    assert_eq!(err, StateError::ZeroVector);
}

#[test]
fn equal_superposition_scenario() {
    let state = QuantumState::prepare(2, &reals(&[1.0, 1.0, 1.0, 1.0])).unwrap();

    for amp in state.amplitudes() {
        assert_relative_eq!(amp.re, 0.5, epsilon = 1e-10);
    }

    let rendered = dirac_notation(&state);
    for label in ["00", "01", "10", "11"] {
        assert!(
            rendered.contains(&format!("(0.500)|{}⟩", label)),
            "missing term for |{}⟩ in {:?}",
            label,
            rendered
        );
    }
}

#[test]
fn sparse_rendering_scenario() {
    let state = QuantumState::prepare(2, &reals(&[1.0, 0.0, 0.0, 0.0])).unwrap();
    assert_eq!(dirac_notation(&state), "(1.000)|00⟩");
}

#[test]
fn rendering_is_idempotent() {
    let mut prep = StatePreparation::new(2, reals(&[1.0, 0.0, 1.0, 0.0]));
    prep.prepare().unwrap();

    let first = prep.dirac_notation().unwrap();
    let second = prep.dirac_notation().unwrap();
    assert_eq!(first, second);
}

#[test]
fn rendering_before_prepare_fails() {
    let prep = StatePreparation::new(2, reals(&[1.0, 0.0, 0.0, 0.0]));
    assert_eq!(prep.dirac_notation().unwrap_err(), StateError::NotPrepared);
}

#[test]
fn failed_prepare_keeps_rendering_unavailable() {
    let mut prep = StatePreparation::new(2, reals(&[0.0, 0.0, 0.0, 0.0]));
    assert_eq!(prep.prepare().unwrap_err(), StateError::ZeroVector);
    assert_eq!(prep.dirac_notation().unwrap_err(), StateError::NotPrepared);
}

#[test]
fn complex_amplitudes_render_with_j_suffix() {
    let amps = vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 1.0)];
    let state = QuantumState::prepare(1, &amps).unwrap();
    assert_eq!(dirac_notation(&state), "(0.707)|0⟩ + (0.000+0.707j)|1⟩");
}
