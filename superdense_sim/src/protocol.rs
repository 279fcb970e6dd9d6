//! Protocol orchestration
//!
//! Composes the staged gate sequence for a given message, drives the state
//! engine through it, and assembles the full simulation report consumed by
//! callers (e.g. an HTTP layer). Stage order is fixed by the physics:
//! entangle → encode → [eavesdrop] → decode.

use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::density;
use crate::error::{Result, SimulationError};
use crate::gates::{self, Gate};
use crate::report::{self, DensityMatrices, OutcomeStats, SimulationReport};
use crate::sampler;
use crate::state::StateVector;
use crate::tolerance;

/// Default shot count per sampling run.
pub const DEFAULT_SHOTS: usize = 1024;

/// One of the four two-bit messages the sender can transmit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Message {
    #[serde(rename = "00")]
    ZeroZero,
    #[serde(rename = "01")]
    ZeroOne,
    #[serde(rename = "10")]
    OneZero,
    #[serde(rename = "11")]
    OneOne,
}

impl Message {
    /// All messages, in basis order.
    pub const ALL: [Message; 4] = [
        Message::ZeroZero,
        Message::ZeroOne,
        Message::OneZero,
        Message::OneOne,
    ];

    /// The two-bit string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Message::ZeroZero => "00",
            Message::ZeroOne => "01",
            Message::OneZero => "10",
            Message::OneOne => "11",
        }
    }

    /// Basis index of the message's bitstring.
    pub fn index(self) -> usize {
        match self {
            Message::ZeroZero => 0,
            Message::ZeroOne => 1,
            Message::OneZero => 2,
            Message::OneOne => 3,
        }
    }
}

impl FromStr for Message {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "00" => Ok(Message::ZeroZero),
            "01" => Ok(Message::ZeroOne),
            "10" => Ok(Message::OneZero),
            "11" => Ok(Message::OneOne),
            other => Err(SimulationError::InvalidMessage {
                input: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for one simulation run.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Number of measurement shots per sampling run.
    pub shots: usize,

    /// Random seed for reproducible results. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            shots: DEFAULT_SHOTS,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shots(mut self, shots: usize) -> Self {
        self.shots = shots;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Encoding gates for `message`, applied to qubit 0 after entanglement.
pub fn encoding_gates(message: Message) -> Vec<Gate> {
    match message {
        Message::ZeroZero => vec![],
        Message::ZeroOne => vec![gates::pauli_x_q0()],
        Message::OneZero => vec![gates::pauli_z_q0()],
        Message::OneOne => vec![gates::pauli_x_q0(), gates::pauli_z_q0()],
    }
}

/// Run the entangle and encode stages from a fresh |00⟩.
///
/// This is the pre-decode state whose amplitudes and density matrix appear
/// in the report. The encoding gates act only on qubit 0, a local operation,
/// so the state stays maximally entangled (concurrence 1).
pub fn entangle_and_encode(message: Message) -> StateVector {
    let mut state = StateVector::zero_zero();
    state.apply(&gates::hadamard_q0());
    state.apply(&gates::cnot());
    for gate in encoding_gates(message) {
        state.apply(&gate);
    }
    state
}

/// Simulate the full protocol for `message`.
///
/// Validates the message before any simulation work, samples the secure
/// channel (and, if `include_eve`, the eavesdropped channel), and computes
/// the channel density matrices. Presentation values in the report are
/// rounded to 3 decimals; all internal computation is full `f64`.
pub fn simulate(
    message: &str,
    include_eve: bool,
    config: &SimulationConfig,
) -> Result<SimulationReport> {
    let message = Message::from_str(message)?;
    debug!(
        "simulating message {message} (eavesdrop: {include_eve}, shots: {}, seed: {:?})",
        config.shots, config.seed
    );

    let mut rng = config.rng();

    let pre_decode = entangle_and_encode(message);
    debug_assert!(
        (pre_decode.norm_sq() - 1.0).abs() <= tolerance::PROBABILITY_SUM,
        "encoded state lost normalization"
    );

    let rho = density::pure(&pre_decode);
    debug_assert!(density::is_valid(&rho, tolerance::MATRIX));

    let secure_counts = sampler::sample_outcomes(message, false, config.shots, &mut rng)?;

    let (eve, with_eve) = if include_eve {
        let eve_counts = sampler::sample_outcomes(message, true, config.shots, &mut rng)?;
        let mixed = density::after_eavesdrop(&rho);
        debug_assert!(density::is_valid(&mixed, tolerance::MATRIX));
        (
            Some(OutcomeStats {
                outcome_counts: eve_counts,
            }),
            Some(report::rounded_matrix(&mixed)),
        )
    } else {
        (None, None)
    };

    Ok(SimulationReport {
        message,
        include_eve,
        basis_amplitudes: report::rounded_amplitudes(&pre_decode),
        secure: OutcomeStats {
            outcome_counts: secure_counts,
        },
        eve,
        density_matrix: DensityMatrices {
            without_eve: report::rounded_matrix(&rho),
            with_eve,
        },
    })
}
