//! Simulation report
//!
//! The structured result handed to consumers such as an HTTP layer. Values
//! here are presentation-rounded to 3 decimals; callers needing full
//! precision work with the `state` and `density` modules directly.

use std::collections::BTreeMap;

use nalgebra::Matrix4;
use num_complex::Complex64;
use serde::Serialize;

use crate::protocol::Message;
use crate::state::{StateVector, BASIS_LABELS};

/// Outcome tally for one sampling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeStats {
    /// Count per observed two-bit outcome; sums to the configured shots.
    pub outcome_counts: BTreeMap<String, u64>,
}

/// Channel density matrices, row-major, basis order |00⟩..|11⟩.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityMatrices {
    /// Pure state after entangle + encode (pre-decode).
    pub without_eve: Vec<Vec<Complex64>>,

    /// Decohered mixture after the eavesdrop measurement channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_eve: Option<Vec<Vec<Complex64>>>,
}

/// Full result of one protocol simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    /// The transmitted message.
    pub message: Message,

    /// Whether the eavesdropped channel was simulated.
    pub include_eve: bool,

    /// Amplitude per basis label for the pre-decode state.
    pub basis_amplitudes: BTreeMap<String, Complex64>,

    /// Outcome statistics of the undisturbed channel.
    pub secure: OutcomeStats,

    /// Outcome statistics of the eavesdropped channel, when simulated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eve: Option<OutcomeStats>,

    /// Channel density matrices.
    pub density_matrix: DensityMatrices,
}

/// Round a complex value to 3 decimals for presentation.
pub fn round3(z: Complex64) -> Complex64 {
    Complex64::new(
        (z.re * 1000.0).round() / 1000.0,
        (z.im * 1000.0).round() / 1000.0,
    )
}

/// Basis-label → rounded amplitude mapping for a state.
pub fn rounded_amplitudes(state: &StateVector) -> BTreeMap<String, Complex64> {
    BASIS_LABELS
        .iter()
        .enumerate()
        .map(|(index, label)| (label.to_string(), round3(state.amplitude(index))))
        .collect()
}

/// Row-major nested form of a 4×4 matrix, rounded for presentation.
pub fn rounded_matrix(matrix: &Matrix4<Complex64>) -> Vec<Vec<Complex64>> {
    (0..4)
        .map(|row| (0..4).map(|col| round3(matrix[(row, col)])).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates;

    #[test]
    fn rounding_truncates_to_three_decimals() {
        let z = Complex64::new(0.7071067811865476, -0.0004);
        assert_eq!(round3(z), Complex64::new(0.707, -0.0));
    }

    #[test]
    fn amplitude_keys_follow_basis_order() {
        let mut state = StateVector::zero_zero();
        state.apply(&gates::hadamard_q0());
        state.apply(&gates::cnot());

        let amplitudes = rounded_amplitudes(&state);
        let keys: Vec<&str> = amplitudes.keys().map(String::as_str).collect();
        assert_eq!(keys, BASIS_LABELS);
        assert_eq!(amplitudes["00"], Complex64::new(0.707, 0.0));
        assert_eq!(amplitudes["11"], Complex64::new(0.707, 0.0));
    }

    #[test]
    fn matrix_rows_follow_basis_order() {
        let state = StateVector::zero_zero();
        let rows = rounded_matrix(&state.to_density_matrix());
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].len(), 4);
        assert_eq!(rows[0][0], Complex64::new(1.0, 0.0));
        assert_eq!(rows[3][3], Complex64::new(0.0, 0.0));
    }
}
