//! Constants for QSearch
//!
//! Gantree: L0_Foundation → Constants
//!
//! Experiment defaults and statistical thresholds.

// ============================================================================
// Experiment Constants
// Gantree: experiment // 실험 상수
// ============================================================================

pub mod experiment {
    //! Default run parameters for the database search experiment

    /// Default number of database qubits (database size 2^6 = 64)
    /// Gantree: DEFAULT_REGISTER_SIZE: u32 = 6
    pub const DEFAULT_REGISTER_SIZE: u32 = 6;

    /// Default number of Grover iterates
    /// Gantree: DEFAULT_ITERATIONS: u32 = 3
    pub const DEFAULT_ITERATIONS: u32 = 3;

    /// Default number of trials
    /// Gantree: DEFAULT_REPEATS: u32 = 100
    pub const DEFAULT_REPEATS: u32 = 100;

    /// Largest register size whose database indices fit a u64
    pub const MAX_REGISTER_SIZE: u32 = 63;

    /// Largest register size whose database size 2^n is a finite f64
    pub const MAX_MODEL_REGISTER_SIZE: u32 = 1023;

    /// Maximum readout error (beyond 0.5 the readout is anti-correlated)
    pub const MAX_READOUT_ERROR: f64 = 0.5;

    /// Number of oracle queries made by `iterations` Grover iterates
    #[inline]
    pub const fn oracle_queries(iterations: u32) -> u64 {
        2 * iterations as u64 + 1
    }
}

// ============================================================================
// Statistics Constants
// Gantree: stats // 통계 상수
// ============================================================================

pub mod stats {
    //! Statistical constants for comparing empirical and theoretical rates

    /// Z critical value for 90% confidence
    pub const Z_CRIT_90: f64 = 1.645;

    /// Z critical value for 95% confidence
    pub const Z_CRIT_95: f64 = 1.960;

    /// Z critical value for 97.5% confidence
    pub const Z_CRIT_975: f64 = 2.240;

    /// Z critical value for 99% confidence
    pub const Z_CRIT_99: f64 = 2.575;

    /// Minimum confidence level
    pub const MIN_CONFIDENCE_LEVEL: f64 = 0.90;

    /// Maximum confidence level
    pub const MAX_CONFIDENCE_LEVEL: f64 = 0.99;

    /// Default confidence level
    pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

    /// Standard errors below this are treated as zero
    pub const SE_EPSILON: f64 = 1e-10;

    /// Tolerance for comparing rates when the standard error vanishes
    pub const RATE_EPSILON: f64 = 1e-9;

    /// Get z-critical value for a given confidence level
    pub fn z_critical(confidence: f64) -> f64 {
        if confidence >= 0.99 {
            Z_CRIT_99
        } else if confidence >= 0.975 {
            Z_CRIT_975
        } else if confidence >= 0.95 {
            Z_CRIT_95
        } else if confidence >= 0.90 {
            Z_CRIT_90
        } else {
            Z_CRIT_95 // fallback
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
