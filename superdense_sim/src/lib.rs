//! Superdense Coding Simulation
//!
//! Exact simulation of the two-qubit superdense coding protocol, in which two
//! classical bits are encoded onto one qubit of a shared entangled pair:
//!
//! - **Entangle**: H on qubit 0 followed by CNOT(0→1) prepares the Bell state
//!   (|00⟩ + |11⟩)/√2
//! - **Encode**: the sender applies I, X, Z, or X·Z to qubit 0 depending on
//!   the two-bit message
//! - **Eavesdrop** (optional): an interceptor measures qubit 0 in flight and
//!   applies a classically-conditioned X correction, leaving a statistical
//!   fingerprint on the channel
//! - **Decode**: CNOT(0→1) followed by H on qubit 0 maps the Bell basis back
//!   to the computational basis, where measurement recovers the message
//!
//! The crate provides shot-based sampling of measurement outcomes and the
//! analytic density matrix of the channel, including the decohered mixture an
//! eavesdropper leaves behind. It is a pure in-process computation: every
//! simulation run is independent and side-effect-free, so concurrent callers
//! need no coordination.

pub mod density;
pub mod eavesdrop;
pub mod error;
pub mod gates;
pub mod protocol;
pub mod report;
pub mod sampler;
pub mod state;

pub use error::{Result, SimulationError};
pub use protocol::{simulate, Message, SimulationConfig};
pub use report::SimulationReport;

/// Numerical tolerances used across the simulation
pub mod tolerance {
    /// Basis probabilities must sum to 1 within this bound
    pub const PROBABILITY_SUM: f64 = 1e-6;

    /// Hermiticity, trace, and eigenvalue checks on density matrices
    pub const MATRIX: f64 = 1e-9;

    /// Probability mass below this is treated as a degenerate measurement branch
    pub const ZERO_BRANCH: f64 = 1e-12;
}
