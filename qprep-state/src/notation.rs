//! Dirac (ket) notation rendering
//!
//! Renders a prepared state as a sparse symbolic sum over computational
//! basis labels, e.g. `(0.707)|00⟩ + (0.707)|11⟩`. Terms whose amplitude
//! magnitude does not exceed [`NEGLIGIBLE`] are omitted; this is a display
//! simplification, the state itself keeps every amplitude.

use crate::state::QuantumState;
use num_complex::Complex64;

/// Magnitude below which an amplitude (or imaginary part) is not displayed
pub const NEGLIGIBLE: f64 = 1e-10;

/// Basis label for a state index (e.g. index 2 of 2 qubits -> "10")
///
/// Labels follow counting order: index `i` maps to the `num_qubits`-bit
/// binary expansion of `i`, most significant bit first.
///
/// # Example
/// ```
/// use qprep_state::notation::basis_label;
///
/// assert_eq!(basis_label(0, 2), "00");
/// assert_eq!(basis_label(5, 3), "101");
/// ```
pub fn basis_label(index: usize, num_qubits: usize) -> String {
    let mut label = String::with_capacity(num_qubits);
    for bit in (0..num_qubits).rev() {
        label.push(if (index >> bit) & 1 == 1 { '1' } else { '0' });
    }
    label
}

/// Format one amplitude as a ket coefficient
///
/// The imaginary part is shown only when its own magnitude exceeds
/// [`NEGLIGIBLE`], then with an explicit sign and a trailing `j`.
fn format_coefficient(amp: Complex64) -> String {
    if amp.im.abs() > NEGLIGIBLE {
        format!("({:.3}{:+.3}j)", amp.re, amp.im)
    } else {
        format!("({:.3})", amp.re)
    }
}

/// Render a state in Dirac notation
///
/// Enumerates basis labels in counting order, emits one
/// `coefficient|label⟩` term per amplitude whose magnitude exceeds
/// [`NEGLIGIBLE`], and joins the terms with `" + "`. Returns an empty
/// string if no amplitude exceeds the threshold.
///
/// # Example
/// ```
/// use num_complex::Complex64;
/// use qprep_state::{dirac_notation, QuantumState};
///
/// let amps = vec![
///     Complex64::new(1.0, 0.0),
///     Complex64::new(0.0, 0.0),
///     Complex64::new(0.0, 0.0),
///     Complex64::new(0.0, 0.0),
/// ];
/// let state = QuantumState::prepare(2, &amps).unwrap();
/// assert_eq!(dirac_notation(&state), "(1.000)|00⟩");
/// ```
pub fn dirac_notation(state: &QuantumState) -> String {
    let terms: Vec<String> = state
        .amplitudes()
        .iter()
        .enumerate()
        .filter(|(_, amp)| amp.norm() > NEGLIGIBLE)
        .map(|(index, amp)| {
            format!(
                "{}|{}⟩",
                format_coefficient(*amp),
                basis_label(index, state.num_qubits())
            )
        })
        .collect();

    terms.join(" + ")
}
