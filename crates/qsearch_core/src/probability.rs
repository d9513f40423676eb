//! Theoretical success probabilities
//!
//! Gantree: L1_Model → ProbabilityModel
//!
//! Closed-form baselines for a single marked item in a database of
//! N = 2^n entries:
//!
//! - classical guess: `1 / N`
//! - amplitude amplification after k iterates: `sin²((2k + 1)·asin(1/√N))`

use crate::config::SearchConfiguration;
use crate::constants::experiment;
use crate::error::{QsError, QsResult};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_4;
use std::fmt;

fn checked_register_size(register_size: u32, max: u32) -> QsResult<()> {
    if register_size > max {
        return Err(QsError::InvalidRegisterSize {
            size: register_size,
            max,
        });
    }
    Ok(())
}

/// Database size 2^n as f64, finite up to `MAX_MODEL_REGISTER_SIZE`
fn model_database_size(register_size: u32) -> QsResult<f64> {
    checked_register_size(register_size, experiment::MAX_MODEL_REGISTER_SIZE)?;
    Ok(2.0_f64.powi(register_size as i32))
}

/// Probability of hitting the marked item with one uniform guess
/// Gantree: classical_success_probability(n) -> f64 // 1/N
pub fn classical_success_probability(register_size: u32) -> QsResult<f64> {
    let size = model_database_size(register_size)?;
    Ok(1.0 / size)
}

/// Probability of measuring the marked item after `iterations` Grover iterates
///
/// Clamped to `[0, 1]`; rounding can otherwise land a few ULPs outside.
/// Gantree: quantum_success_probability(n,k) -> f64 // sin²((2k+1)θ)
pub fn quantum_success_probability(register_size: u32, iterations: u32) -> QsResult<f64> {
    let size = model_database_size(register_size)?;
    let theta = (1.0 / size.sqrt()).asin();
    let angle = (2.0 * iterations as f64 + 1.0) * theta;
    Ok(angle.sin().powi(2).clamp(0.0, 1.0))
}

/// Standard iterate count `floor(π/4 · √N)`
///
/// Not used by the default experiment, which runs a fixed iteration count;
/// offered for callers that want near-optimal amplification. Limited to
/// registers a configuration can hold, so the count always fits a u32.
pub fn recommended_iterations(register_size: u32) -> QsResult<u32> {
    checked_register_size(register_size, experiment::MAX_REGISTER_SIZE)?;
    let size = model_database_size(register_size)?;
    Ok((FRAC_PI_4 * size.sqrt()).floor() as u32)
}

// ============================================================================
// TheoreticalPrediction
// ============================================================================

/// Theoretical baselines for one configuration, fixed before any trial runs
/// Gantree: TheoreticalPrediction // 이론 예측
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TheoreticalPrediction {
    /// Number of database qubits
    pub register_size: u32,

    /// Grover iterates
    pub iterations: u32,

    /// Database size N
    pub database_size: u64,

    /// Oracle queries per search (2k + 1)
    pub oracle_queries: u64,

    /// 1 / N
    pub classical_probability: f64,

    /// sin²((2k + 1)·asin(1/√N))
    pub quantum_probability: f64,
}

impl TheoreticalPrediction {
    /// Compute the prediction for a register size and iterate count
    ///
    /// The register must fit a configuration (`database_size` is a u64).
    pub fn new(register_size: u32, iterations: u32) -> QsResult<Self> {
        checked_register_size(register_size, experiment::MAX_REGISTER_SIZE)?;
        Ok(Self {
            register_size,
            iterations,
            database_size: 1u64 << register_size,
            oracle_queries: experiment::oracle_queries(iterations),
            classical_probability: classical_success_probability(register_size)?,
            quantum_probability: quantum_success_probability(register_size, iterations)?,
        })
    }

    /// Compute the prediction for a validated configuration
    pub fn from_config(config: &SearchConfiguration) -> QsResult<Self> {
        Self::new(config.register_size(), config.iterations())
    }

    /// How many times more likely the quantum search is to succeed than a guess
    pub fn speedup(&self) -> f64 {
        self.quantum_probability / self.classical_probability
    }
}

impl fmt::Display for TheoreticalPrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Prediction(N={}, queries={}, classical={:.6}, quantum={:.6})",
            self.database_size,
            self.oracle_queries,
            self.classical_probability,
            self.quantum_probability
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
