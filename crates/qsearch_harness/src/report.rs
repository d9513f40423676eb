//! Report sinks
//!
//! Gantree: L3_Harness → ReportSink
//!
//! Append-only output channels the harness writes to as the run progresses:
//! once before the first trial, once per trial, and once after the last.

use crate::statistics::{RunSummary, RunningStatistics};
use qsearch_core::{QsError, QsResult, RegisterBits, SearchConfiguration, TheoreticalPrediction};
use serde::Serialize;
use std::io::Write;

/// What the harness reports after each trial
/// Gantree: TrialRecord // 시행 기록
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrialRecord<'a> {
    /// 1-based trial number
    pub trial: u64,

    /// Flag qubit readout (reported, never used for classification)
    pub marked_bit: bool,

    /// Observed database register
    pub register_bits: &'a RegisterBits,

    /// Classification verdict
    pub success: bool,

    /// Counters after this trial
    pub statistics: RunningStatistics,
}

/// Output channel for run telemetry
/// Gantree: ReportSink // 출력 채널
pub trait ReportSink {
    /// Called once before the first trial
    fn begin(
        &mut self,
        _config: &SearchConfiguration,
        _prediction: &TheoreticalPrediction,
    ) -> QsResult<()> {
        Ok(())
    }

    /// Called after each trial has been classified and counted
    fn trial(&mut self, record: &TrialRecord<'_>) -> QsResult<()>;

    /// Called once after every trial completed
    fn finish(&mut self, _summary: &RunSummary) -> QsResult<()> {
        Ok(())
    }
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn begin(
        &mut self,
        config: &SearchConfiguration,
        prediction: &TheoreticalPrediction,
    ) -> QsResult<()> {
        (**self).begin(config, prediction)
    }

    fn trial(&mut self, record: &TrialRecord<'_>) -> QsResult<()> {
        (**self).trial(record)
    }

    fn finish(&mut self, summary: &RunSummary) -> QsResult<()> {
        (**self).finish(summary)
    }
}

fn report_error(err: std::io::Error) -> QsError {
    QsError::ReportError(err.to_string())
}

// ============================================================================
// TextReport
// ============================================================================

/// Human-readable line output
/// Gantree: TextReport // 텍스트 출력
pub struct TextReport<W: Write> {
    out: W,
}

impl<W: Write> TextReport<W> {
    /// Wrap a writer
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TextReport<std::io::Stdout> {
    /// Report to standard output
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ReportSink for TextReport<W> {
    fn begin(
        &mut self,
        config: &SearchConfiguration,
        prediction: &TheoreticalPrediction,
    ) -> QsResult<()> {
        writeln!(
            self.out,
            "Database size N = {} ({} qubits), Grover iterates = {}, oracle queries = {}, repeats = {}",
            prediction.database_size,
            prediction.register_size,
            prediction.iterations,
            prediction.oracle_queries,
            config.repeats()
        )
        .map_err(report_error)?;
        writeln!(
            self.out,
            "Classical success probability = {:.6}",
            prediction.classical_probability
        )
        .map_err(report_error)?;
        writeln!(
            self.out,
            "Quantum success probability = {:.6}",
            prediction.quantum_probability
        )
        .map_err(report_error)?;
        self.out.flush().map_err(report_error)
    }

    fn trial(&mut self, record: &TrialRecord<'_>) -> QsResult<()> {
        writeln!(self.out, "Output of Grover's search in binary").map_err(report_error)?;
        writeln!(self.out, "{}", record.register_bits.to_readout()).map_err(report_error)?;
        writeln!(self.out, "Statistics so far...").map_err(report_error)?;
        writeln!(
            self.out,
            "Total number of attempts = {}",
            record.statistics.total_attempts()
        )
        .map_err(report_error)?;
        writeln!(
            self.out,
            "Total number of successes = {}",
            record.statistics.total_successes()
        )
        .map_err(report_error)?;
        self.out.flush().map_err(report_error)
    }

    fn finish(&mut self, summary: &RunSummary) -> QsResult<()> {
        writeln!(
            self.out,
            "Empirical success rate = {:.6} (predicted {:.6}, z = {:.3})",
            summary.empirical_rate, summary.prediction.quantum_probability, summary.z_score
        )
        .map_err(report_error)?;
        self.out.flush().map_err(report_error)
    }
}

// ============================================================================
// JsonLinesReport
// ============================================================================

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum ReportEvent<'a> {
    Begin {
        config: &'a SearchConfiguration,
        prediction: &'a TheoreticalPrediction,
    },
    Trial {
        record: &'a TrialRecord<'a>,
    },
    Finish {
        summary: &'a RunSummary,
    },
}

/// One JSON object per line
/// Gantree: JsonLinesReport // JSON 출력
pub struct JsonLinesReport<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesReport<W> {
    /// Wrap a writer
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, event: &ReportEvent<'_>) -> QsResult<()> {
        serde_json::to_writer(&mut self.out, event)?;
        writeln!(self.out).map_err(report_error)?;
        self.out.flush().map_err(report_error)
    }
}

impl<W: Write> ReportSink for JsonLinesReport<W> {
    fn begin(
        &mut self,
        config: &SearchConfiguration,
        prediction: &TheoreticalPrediction,
    ) -> QsResult<()> {
        self.emit(&ReportEvent::Begin { config, prediction })
    }

    fn trial(&mut self, record: &TrialRecord<'_>) -> QsResult<()> {
        self.emit(&ReportEvent::Trial { record })
    }

    fn finish(&mut self, summary: &RunSummary) -> QsResult<()> {
        self.emit(&ReportEvent::Finish { summary })
    }
}

// ============================================================================
// NullReport
// ============================================================================

/// Discards all output
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReport;

impl ReportSink for NullReport {
    fn trial(&mut self, _record: &TrialRecord<'_>) -> QsResult<()> {
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
