//! Eavesdrop channel
//!
//! Models interception of the sender's qubit in flight: a projective
//! measurement of qubit 0 followed by a classically-conditioned correction.
//! The correction (X on qubit 0 iff the measured bit was 1) hides the
//! measurement from the eavesdropper's own bookkeeping, but the collapse
//! still leaves a statistical fingerprint in the receiver's outcome
//! distribution and in the channel's density matrix.

use log::trace;
use rand::Rng;

use crate::error::{Result, SimulationError};
use crate::gates;
use crate::state::StateVector;
use crate::tolerance;

/// Measure qubit 0 of `state`, collapse it, and apply the paired correction.
///
/// Returns the measured bit. The outcome is drawn from `rng` according to
/// the Born rule, so each call on a fresh state is an independent trial.
pub fn intercept<R: Rng>(state: &mut StateVector, rng: &mut R) -> Result<u8> {
    let probs = state.probabilities();
    let p_zero = probs[0] + probs[1];
    let outcome = if rng.gen::<f64>() < p_zero { 0 } else { 1 };

    let mass = state.project_qubit0(outcome);
    if mass <= tolerance::ZERO_BRANCH {
        return Err(SimulationError::DegenerateState {
            outcome,
            probability: mass,
        });
    }
    state.normalize();

    // Correction paired one-to-one with the measurement that triggered it.
    if outcome == 1 {
        let correction = gates::pauli_x_q0();
        state.apply(&correction);
        trace!("applied {} correction for measured 1", correction.name());
    }

    trace!("eavesdrop measured qubit 0 as {outcome} (p0 = {p_zero:.6})");
    Ok(outcome)
}
