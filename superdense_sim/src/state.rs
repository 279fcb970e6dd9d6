//! Two-qubit state vector
//!
//! Amplitudes are ordered |00⟩, |01⟩, |10⟩, |11⟩ with qubit 0 (the sender's)
//! as the most significant bit. This ordering is shared by the gate matrices,
//! the density matrices, and every outcome-count key the crate produces.

use nalgebra::{Matrix4, Vector4};
use num_complex::Complex64;

use crate::gates::Gate;

/// Computational basis labels, in amplitude order.
pub const BASIS_LABELS: [&str; 4] = ["00", "01", "10", "11"];

/// Pure state of the two-qubit system.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    amplitudes: Vector4<Complex64>,
}

impl StateVector {
    /// Ground state |00⟩
    pub fn zero_zero() -> Self {
        Self {
            amplitudes: Vector4::new(
                Complex64::new(1.0, 0.0),
                Complex64::new(0.0, 0.0),
                Complex64::new(0.0, 0.0),
                Complex64::new(0.0, 0.0),
            ),
        }
    }

    /// Left-multiply the state by a gate's unitary.
    pub fn apply(&mut self, gate: &Gate) {
        self.amplitudes = gate.matrix() * self.amplitudes;
    }

    /// The raw amplitude vector.
    pub fn amplitudes(&self) -> &Vector4<Complex64> {
        &self.amplitudes
    }

    /// Amplitude of the basis state at `index` (0..4, basis order).
    pub fn amplitude(&self, index: usize) -> Complex64 {
        self.amplitudes[index]
    }

    /// Born-rule probability of each basis outcome.
    pub fn probabilities(&self) -> [f64; 4] {
        [
            self.amplitudes[0].norm_sqr(),
            self.amplitudes[1].norm_sqr(),
            self.amplitudes[2].norm_sqr(),
            self.amplitudes[3].norm_sqr(),
        ]
    }

    /// Total probability mass ⟨ψ|ψ⟩.
    pub fn norm_sq(&self) -> f64 {
        self.amplitudes.norm_squared()
    }

    /// Rescale so the total probability is 1.
    pub fn normalize(&mut self) {
        let norm = self.norm_sq().sqrt();
        if norm > 0.0 {
            self.amplitudes /= Complex64::new(norm, 0.0);
        }
    }

    /// Pure-state density matrix |ψ⟩⟨ψ|.
    pub fn to_density_matrix(&self) -> Matrix4<Complex64> {
        self.amplitudes * self.amplitudes.adjoint()
    }

    /// Entanglement measure C = 2|a₀₀a₁₁ − a₀₁a₁₀|.
    ///
    /// 1 for Bell states, 0 for product states. Local gates on a single
    /// qubit leave it unchanged, which is how the encoding stage is verified
    /// to stay on the Bell manifold.
    pub fn concurrence(&self) -> f64 {
        let a = &self.amplitudes;
        let det = a[0] * a[3] - a[1] * a[2];
        2.0 * det.norm()
    }

    /// Zero every amplitude whose qubit-0 bit differs from `bit` and return
    /// the surviving probability mass. The caller renormalizes.
    pub(crate) fn project_qubit0(&mut self, bit: u8) -> f64 {
        for index in 0..4 {
            if (index >> 1) as u8 != bit {
                self.amplitudes[index] = Complex64::new(0.0, 0.0);
            }
        }
        self.norm_sq()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates;
    use approx::assert_abs_diff_eq;

    #[test]
    fn ground_state_is_normalized() {
        let state = StateVector::zero_zero();
        assert_abs_diff_eq!(state.norm_sq(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(state.probabilities()[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn hadamard_then_cnot_gives_bell_state() {
        let mut state = StateVector::zero_zero();
        state.apply(&gates::hadamard_q0());
        state.apply(&gates::cnot());

        let amplitudes = state.amplitudes();
        let half = std::f64::consts::FRAC_1_SQRT_2;
        assert_abs_diff_eq!(amplitudes[0].re, half, epsilon = 1e-12);
        assert_abs_diff_eq!(amplitudes[3].re, half, epsilon = 1e-12);

        let probs = state.probabilities();
        assert_abs_diff_eq!(probs[0], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(probs[3], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(probs[1] + probs[2], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(state.concurrence(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn normalization_holds_after_every_gate() {
        let mut state = StateVector::zero_zero();
        for gate in [
            gates::hadamard_q0(),
            gates::cnot(),
            gates::pauli_x_q0(),
            gates::pauli_z_q0(),
            gates::cnot(),
            gates::hadamard_q0(),
        ] {
            state.apply(&gate);
            assert_abs_diff_eq!(state.norm_sq(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn density_matrix_of_bell_state() {
        let mut state = StateVector::zero_zero();
        state.apply(&gates::hadamard_q0());
        state.apply(&gates::cnot());

        let rho = state.to_density_matrix();
        assert_abs_diff_eq!(rho[(0, 0)].re, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(rho[(0, 3)].re, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(rho[(3, 0)].re, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(rho[(3, 3)].re, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(rho[(1, 1)].norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn projection_keeps_consistent_amplitudes() {
        let mut state = StateVector::zero_zero();
        state.apply(&gates::hadamard_q0());
        state.apply(&gates::cnot());

        let mass = state.project_qubit0(1);
        assert_abs_diff_eq!(mass, 0.5, epsilon = 1e-12);
        state.normalize();
        assert_abs_diff_eq!(state.probabilities()[3], 1.0, epsilon = 1e-12);
    }
}
