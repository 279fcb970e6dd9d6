//! Error types for the superdense coding simulator.

use thiserror::Error;

/// Result type alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Errors that can occur while simulating the protocol.
///
/// None of these are retried: the simulation is deterministic given its
/// random seed, so a retry has no corrective value. Either a full result is
/// produced or one of these is returned before any output is assembled.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Message is not one of the four valid two-bit strings. Checked before
    /// any simulation work begins.
    #[error("invalid message {input:?}: expected one of \"00\", \"01\", \"10\", \"11\"")]
    InvalidMessage {
        /// The rejected input.
        input: String,
    },

    /// Matrix does not act on the two-qubit space. Defensive: unreachable
    /// through the fixed gate catalog.
    #[error("dimension mismatch: expected a 4x4 matrix, got {rows}x{cols}")]
    Dimension {
        /// Row count of the offending matrix.
        rows: usize,
        /// Column count of the offending matrix.
        cols: usize,
    },

    /// A projective measurement drew a branch carrying numerically zero
    /// probability mass. Defensive: cannot occur with correct Born-rule
    /// sampling.
    #[error("degenerate state: measurement branch {outcome} has probability {probability:.3e}")]
    DegenerateState {
        /// The drawn measurement outcome.
        outcome: u8,
        /// The surviving probability mass of that branch.
        probability: f64,
    },
}
