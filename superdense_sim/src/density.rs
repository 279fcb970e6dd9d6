//! Density matrix construction
//!
//! Builds the exact channel state exposed in simulation reports: the pure
//! outer product of the entangled-and-encoded state, and the decohered
//! mixture an eavesdropper's measurement produces. The mixture is computed
//! analytically as the non-selective measurement channel
//! ρ' = P₀ρP₀† + P₁ρP₁†, not estimated from shots, so it is exact and
//! independent of any random seed.

use nalgebra::Matrix4;
use num_complex::Complex64;

use crate::gates;
use crate::state::StateVector;

/// Pure-state density matrix |ψ⟩⟨ψ| of the pre-decode state.
pub fn pure(state: &StateVector) -> Matrix4<Complex64> {
    state.to_density_matrix()
}

/// Unconditional mixed state after a projective measurement of qubit 0.
///
/// Classical mixture over the two measurement branches. The conditioned X
/// correction is a deterministic function of the branch and does not change
/// the mixture's statistical support, so it needs no separate term here.
pub fn after_eavesdrop(rho: &Matrix4<Complex64>) -> Matrix4<Complex64> {
    let p0 = gates::projector_q0(0);
    let p1 = gates::projector_q0(1);
    p0 * rho * p0.adjoint() + p1 * rho * p1.adjoint()
}

/// Check the defining properties of a density matrix: Hermitian, unit trace,
/// and positive semi-definite, each within `tol`.
pub fn is_valid(rho: &Matrix4<Complex64>, tol: f64) -> bool {
    let hermitian = (rho - rho.adjoint()).norm() <= tol;

    let trace = rho.trace();
    let unit_trace = (trace.re - 1.0).abs() <= tol && trace.im.abs() <= tol;

    let eigenvalues = rho.symmetric_eigen().eigenvalues;
    let psd = eigenvalues.iter().all(|&ev| ev >= -tol);

    hermitian && unit_trace && psd
}
