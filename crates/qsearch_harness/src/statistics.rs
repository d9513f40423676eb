//! Running statistics and run summary
//!
//! Gantree: L3_Harness → RunningStatistics
//!
//! Cumulative success counters for one run and the end-of-run comparison of
//! the empirical success rate against the theoretical prediction.

use qsearch_core::{stats, QsError, QsResult, TheoreticalPrediction};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cumulative trial counters; only ever incremented
/// Gantree: RunningStatistics // 누적 통계
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningStatistics {
    total_attempts: u64,
    total_successes: u64,
}

impl RunningStatistics {
    /// Fresh counters at 0/0
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed trial
    /// Gantree: record(success) // 카운터 갱신
    pub fn record(&mut self, success: bool) {
        self.total_attempts += 1;
        if success {
            self.total_successes += 1;
        }
    }

    /// Trials completed
    #[inline]
    pub fn total_attempts(&self) -> u64 {
        self.total_attempts
    }

    /// Trials classified as successful
    #[inline]
    pub fn total_successes(&self) -> u64 {
        self.total_successes
    }

    /// Trials classified as failed
    #[inline]
    pub fn total_failures(&self) -> u64 {
        self.total_attempts - self.total_successes
    }

    /// Empirical success rate; 0 before any trial
    pub fn success_rate(&self) -> f64 {
        if self.total_attempts == 0 {
            return 0.0;
        }
        self.total_successes as f64 / self.total_attempts as f64
    }
}

impl fmt::Display for RunningStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} successes ({:.4})",
            self.total_successes,
            self.total_attempts,
            self.success_rate()
        )
    }
}

// ============================================================================
// RunSummary
// ============================================================================

/// Empirical result of a completed run compared against theory
/// Gantree: RunSummary // 실행 요약
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Theoretical baselines
    pub prediction: TheoreticalPrediction,

    /// Final counters
    pub statistics: RunningStatistics,

    /// Successes / attempts
    pub empirical_rate: f64,

    /// Binomial standard error of the rate under the predicted probability
    pub standard_error: f64,

    /// (empirical - predicted) / standard error; 0 when the error vanishes
    pub z_score: f64,
}

impl RunSummary {
    /// Summarise final counters against a prediction
    ///
    /// SE = sqrt(p(1-p)/n), Z = (p̂ - p) / SE
    pub fn new(prediction: TheoreticalPrediction, statistics: RunningStatistics) -> Self {
        let p = prediction.quantum_probability;
        let n = statistics.total_attempts();
        let empirical_rate = statistics.success_rate();

        let standard_error = if n == 0 {
            0.0
        } else {
            (p * (1.0 - p) / n as f64).max(0.0).sqrt()
        };

        let z_score = if standard_error < stats::SE_EPSILON {
            0.0
        } else {
            (empirical_rate - p) / standard_error
        };

        Self {
            prediction,
            statistics,
            empirical_rate,
            standard_error,
            z_score,
        }
    }

    /// Signed gap between empirical and predicted success rates
    pub fn deviation(&self) -> f64 {
        self.empirical_rate - self.prediction.quantum_probability
    }

    /// Whether the empirical rate is consistent with theory at `confidence`
    pub fn is_consistent(&self, confidence: f64) -> QsResult<bool> {
        if !(stats::MIN_CONFIDENCE_LEVEL..=stats::MAX_CONFIDENCE_LEVEL).contains(&confidence) {
            return Err(QsError::InvalidConfidence(confidence));
        }

        // Degenerate p ∈ {0, 1}: every trial must agree with theory
        if self.standard_error < stats::SE_EPSILON {
            return Ok(self.deviation().abs() <= stats::RATE_EPSILON);
        }

        Ok(self.z_score.abs() <= stats::z_critical(confidence))
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RunSummary(rate={:.4}, predicted={:.4}, classical={:.6}, z={:.3})",
            self.empirical_rate,
            self.prediction.quantum_probability,
            self.prediction.classical_probability,
            self.z_score
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
