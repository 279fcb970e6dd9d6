//! Gate catalog
//!
//! Fixed set of 4×4 unitaries acting on the two-qubit space, built from the
//! 2×2 single-qubit definitions by Kronecker product, plus the measurement
//! projectors used by the eavesdrop channel and the density-matrix builder.
//! Qubit 0 is the left Kronecker factor.

use nalgebra::{DMatrix, Matrix2, Matrix4};
use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

use crate::error::{Result, SimulationError};

fn re(x: f64) -> Complex64 {
    Complex64::new(x, 0.0)
}

/// A named 4×4 unitary on the two-qubit space.
#[derive(Debug, Clone, PartialEq)]
pub struct Gate {
    name: &'static str,
    matrix: Matrix4<Complex64>,
}

impl Gate {
    /// Wrap an arbitrary matrix, validating its shape. Defensive entry point
    /// for callers outside the fixed catalog.
    pub fn from_matrix(matrix: &DMatrix<Complex64>) -> Result<Self> {
        if matrix.nrows() != 4 || matrix.ncols() != 4 {
            return Err(SimulationError::Dimension {
                rows: matrix.nrows(),
                cols: matrix.ncols(),
            });
        }
        Ok(Self {
            name: "custom",
            matrix: Matrix4::from_iterator(matrix.iter().copied()),
        })
    }

    /// Gate name, for logging.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The underlying unitary.
    pub fn matrix(&self) -> &Matrix4<Complex64> {
        &self.matrix
    }
}

fn identity2() -> Matrix2<Complex64> {
    Matrix2::identity()
}

fn hadamard2() -> Matrix2<Complex64> {
    Matrix2::new(
        re(FRAC_1_SQRT_2),
        re(FRAC_1_SQRT_2),
        re(FRAC_1_SQRT_2),
        re(-FRAC_1_SQRT_2),
    )
}

fn pauli_x2() -> Matrix2<Complex64> {
    Matrix2::new(re(0.0), re(1.0), re(1.0), re(0.0))
}

fn pauli_z2() -> Matrix2<Complex64> {
    Matrix2::new(re(1.0), re(0.0), re(0.0), re(-1.0))
}

/// Identity on both qubits.
pub fn identity() -> Gate {
    Gate {
        name: "I",
        matrix: Matrix4::identity(),
    }
}

/// Hadamard on qubit 0: H ⊗ I.
pub fn hadamard_q0() -> Gate {
    Gate {
        name: "H0",
        matrix: hadamard2().kronecker(&identity2()),
    }
}

/// Pauli-X on qubit 0: X ⊗ I.
pub fn pauli_x_q0() -> Gate {
    Gate {
        name: "X0",
        matrix: pauli_x2().kronecker(&identity2()),
    }
}

/// Pauli-Z on qubit 0: Z ⊗ I.
pub fn pauli_z_q0() -> Gate {
    Gate {
        name: "Z0",
        matrix: pauli_z2().kronecker(&identity2()),
    }
}

/// CNOT with qubit 0 as control, qubit 1 as target: swaps |10⟩ ↔ |11⟩.
pub fn cnot() -> Gate {
    Gate {
        name: "CNOT",
        matrix: Matrix4::new(
            re(1.0),
            re(0.0),
            re(0.0),
            re(0.0),
            re(0.0),
            re(1.0),
            re(0.0),
            re(0.0),
            re(0.0),
            re(0.0),
            re(0.0),
            re(1.0),
            re(0.0),
            re(0.0),
            re(1.0),
            re(0.0),
        ),
    }
}

/// Measurement projector |b⟩⟨b| ⊗ I onto the qubit-0 subspace for `bit`.
///
/// Not unitary: used by the non-selective measurement channel, never applied
/// as a gate.
pub fn projector_q0(bit: u8) -> Matrix4<Complex64> {
    let single = if bit == 0 {
        Matrix2::new(re(1.0), re(0.0), re(0.0), re(0.0))
    } else {
        Matrix2::new(re(0.0), re(0.0), re(0.0), re(1.0))
    };
    single.kronecker(&identity2())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_unitary(gate: &Gate) {
        let product = gate.matrix() * gate.matrix().adjoint();
        let identity = Matrix4::<Complex64>::identity();
        assert_abs_diff_eq!((product - identity).norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn catalog_gates_are_unitary() {
        for gate in [
            identity(),
            hadamard_q0(),
            pauli_x_q0(),
            pauli_z_q0(),
            cnot(),
        ] {
            assert_unitary(&gate);
        }
    }

    #[test]
    fn projectors_sum_to_identity() {
        let sum = projector_q0(0) + projector_q0(1);
        let identity = Matrix4::<Complex64>::identity();
        assert_abs_diff_eq!((sum - identity).norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn projectors_are_idempotent() {
        for bit in [0u8, 1] {
            let p = projector_q0(bit);
            assert_abs_diff_eq!((p * p - p).norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn from_matrix_rejects_wrong_dimensions() {
        let wrong = DMatrix::<Complex64>::identity(2, 2);
        assert_eq!(
            Gate::from_matrix(&wrong),
            Err(SimulationError::Dimension { rows: 2, cols: 2 })
        );
    }

    #[test]
    fn from_matrix_accepts_two_qubit_unitaries() {
        let full = DMatrix::<Complex64>::identity(4, 4);
        let gate = Gate::from_matrix(&full).unwrap();
        assert_eq!(gate.matrix(), identity().matrix());
    }
}
