//! Trial harness
//!
//! Gantree: L3_Harness → TrialHarness
//!
//! Runs the configured number of searches strictly one after another,
//! classifies each measured register, and keeps the running counters.

use crate::gate::{NoPause, StepGate};
use crate::report::{NullReport, ReportSink, TrialRecord};
use crate::statistics::{RunSummary, RunningStatistics};
use qsearch_backend::SearchBackend;
use qsearch_core::{QsError, QsResult, RegisterBits, SearchConfiguration, TheoreticalPrediction};

/// A trial succeeds iff no register bit reads zero
///
/// The flag qubit is not consulted. An empty register succeeds.
/// Gantree: classify(bits) -> bool // 성공 판정
#[inline]
pub fn classify(register_bits: &RegisterBits) -> bool {
    register_bits.all_set()
}

/// Repeated-trial driver
/// Gantree: TrialHarness // 시행 하네스
pub struct TrialHarness<B: SearchBackend> {
    /// Run parameters
    config: SearchConfiguration,

    /// Computed once before any trial
    prediction: TheoreticalPrediction,

    /// Search capability
    backend: B,
}

impl<B: SearchBackend> TrialHarness<B> {
    // ========================================================================
    // Constructor
    // ========================================================================

    /// Validate the configuration against the backend and compute the prediction
    /// Gantree: new(config,backend) -> Result<Self> // 사전 검증
    pub fn new(config: SearchConfiguration, backend: B) -> QsResult<Self> {
        config.validate()?;
        backend.check_register_size(config.register_size())?;
        let prediction = TheoreticalPrediction::from_config(&config)?;

        Ok(Self {
            config,
            prediction,
            backend,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Run parameters
    pub fn config(&self) -> &SearchConfiguration {
        &self.config
    }

    /// Theoretical baselines for this run
    pub fn prediction(&self) -> &TheoreticalPrediction {
        &self.prediction
    }

    /// Search backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Run every trial, reporting to `sink` and pausing at `gate`
    /// Gantree: run(sink,gate) -> Result<RunSummary> // 메인 루프
    ///
    /// A backend error, or an outcome whose register width differs from the
    /// configured size, aborts the run as `QsError::SearchFailed`; the counters
    /// gathered so far are dropped. Whatever the sink already wrote stays.
    pub fn run<S, G>(&mut self, mut sink: S, mut gate: G) -> QsResult<RunSummary>
    where
        S: ReportSink,
        G: StepGate,
    {
        let iterations = self.config.iterations();
        let register_size = self.config.register_size();
        let mut statistics = RunningStatistics::new();

        log::info!(
            "starting {} on {}: {}",
            self.config,
            self.backend.name(),
            self.prediction
        );
        sink.begin(&self.config, &self.prediction)?;

        for trial in 1..=u64::from(self.config.repeats()) {
            let outcome = self
                .backend
                .search(iterations, register_size)
                .map_err(|err| {
                    log::error!("trial {} aborted the run: {}", trial, err);
                    QsError::SearchFailed {
                        trial,
                        reason: err.to_string(),
                    }
                })?;

            if outcome.register_size() != register_size as usize {
                log::error!(
                    "trial {} returned {} register bits, expected {}",
                    trial,
                    outcome.register_size(),
                    register_size
                );
                return Err(QsError::SearchFailed {
                    trial,
                    reason: format!(
                        "{} returned {} register bits, expected {}",
                        self.backend.name(),
                        outcome.register_size(),
                        register_size
                    ),
                });
            }

            let success = classify(&outcome.register_bits);
            statistics.record(success);

            log::debug!(
                "trial {}: register={} marked={} success={} ({})",
                trial,
                outcome.register_bits,
                outcome.marked_bit,
                success,
                statistics
            );

            sink.trial(&TrialRecord {
                trial,
                marked_bit: outcome.marked_bit,
                register_bits: &outcome.register_bits,
                success,
                statistics,
            })?;

            gate.wait(trial)?;
        }

        let summary = RunSummary::new(self.prediction, statistics);
        sink.finish(&summary)?;
        log::info!("finished: {}", summary);

        Ok(summary)
    }

    /// Run every trial without reporting or pausing
    pub fn run_silent(&mut self) -> QsResult<RunSummary> {
        self.run(NullReport, NoPause)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use qsearch_backend::ScriptedBackend;
    use qsearch_core::TrialOutcome;

    #[derive(Default)]
    struct Recorder {
        begun: usize,
        finished: usize,
        trials: Vec<(u64, bool, RunningStatistics)>,
    }

    impl ReportSink for Recorder {
        fn begin(
            &mut self,
            _config: &SearchConfiguration,
            _prediction: &TheoreticalPrediction,
        ) -> QsResult<()> {
            self.begun += 1;
            Ok(())
        }

        fn trial(&mut self, record: &TrialRecord<'_>) -> QsResult<()> {
            self.trials
                .push((record.trial, record.success, record.statistics));
            Ok(())
        }

        fn finish(&mut self, _summary: &RunSummary) -> QsResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    /// Always answers with an empty register, whatever the requested width
    struct EmptyRegisterBackend {
        calls: usize,
    }

    impl SearchBackend for EmptyRegisterBackend {
        fn name(&self) -> &str {
            "empty_register"
        }

        fn search(&mut self, _iterations: u32, _register_size: u32) -> QsResult<TrialOutcome> {
            self.calls += 1;
            Ok(TrialOutcome::new(true, RegisterBits::default()))
        }
    }

    struct CountingGate(u64);

    impl StepGate for CountingGate {
        fn wait(&mut self, trial: u64) -> QsResult<()> {
            self.0 += 1;
            assert_eq!(trial, self.0);
            Ok(())
        }
    }

    #[test]
    fn test_classify() {
        assert!(classify(&RegisterBits::ones(6)));
        assert!(classify(&RegisterBits::default()));
        for i in 0..6 {
            let mut bits = RegisterBits::ones(6);
            bits.flip(i);
            assert!(!classify(&bits), "zero at {} should fail", i);
        }
    }

    #[test]
    fn test_classify_is_pure() {
        let bits = RegisterBits::parse("1101").unwrap();
        let first = classify(&bits);
        for _ in 0..10 {
            assert_eq!(classify(&bits), first);
        }
    }

    #[test]
    fn test_classification_ignores_marked_bit() {
        let backend = ScriptedBackend::new(vec![
            Ok(TrialOutcome::new(false, RegisterBits::ones(2))),
            Ok(TrialOutcome::new(true, RegisterBits::parse("10").unwrap())),
        ]);
        let config = SearchConfiguration::new(2, 1, 2).unwrap();
        let mut recorder = Recorder::default();

        let summary = TrialHarness::new(config, backend)
            .unwrap()
            .run(&mut recorder, NoPause)
            .unwrap();

        assert!(recorder.trials[0].1);
        assert!(!recorder.trials[1].1);
        assert_eq!(summary.statistics.total_successes(), 1);
    }

    #[test]
    fn test_runs_exactly_repeats() {
        let backend = ScriptedBackend::from_registers(&["11", "01", "11", "00", "11"]).unwrap();
        let config = SearchConfiguration::new(2, 1, 5).unwrap();
        let mut recorder = Recorder::default();
        let mut gate = CountingGate(0);

        let mut harness = TrialHarness::new(config, backend).unwrap();
        let summary = harness.run(&mut recorder, &mut gate).unwrap();

        assert_eq!(recorder.begun, 1);
        assert_eq!(recorder.finished, 1);
        assert_eq!(recorder.trials.len(), 5);
        assert_eq!(gate.0, 5);
        assert_eq!(summary.statistics.total_attempts(), 5);
        assert_eq!(summary.statistics.total_successes(), 3);
        assert_eq!(harness.backend().remaining(), 0);
        assert_eq!(harness.backend().calls(), 5);
    }

    #[test]
    fn test_counters_monotonic() {
        let backend =
            ScriptedBackend::from_registers(&["1", "0", "1", "1", "0", "0", "1"]).unwrap();
        let config = SearchConfiguration::new(1, 0, 7).unwrap();
        let mut recorder = Recorder::default();

        TrialHarness::new(config, backend)
            .unwrap()
            .run(&mut recorder, NoPause)
            .unwrap();

        let mut prev = RunningStatistics::new();
        for (i, (trial, _, stats)) in recorder.trials.iter().enumerate() {
            assert_eq!(*trial, i as u64 + 1);
            assert_eq!(stats.total_attempts(), i as u64 + 1);
            assert!(stats.total_successes() >= prev.total_successes());
            assert!(stats.total_successes() <= stats.total_attempts());
            prev = *stats;
        }
    }

    #[test]
    fn test_failure_on_fifth_call() {
        let mut backend = ScriptedBackend::from_registers(&["111", "111", "111", "111"]).unwrap();
        backend.push_error("simulator lost its qubits");
        backend.push_outcome(TrialOutcome::new(true, RegisterBits::ones(3)));

        let config = SearchConfiguration::new(3, 2, 10).unwrap();
        let mut recorder = Recorder::default();

        let mut harness = TrialHarness::new(config, backend).unwrap();
        let err = harness.run(&mut recorder, NoPause).unwrap_err();

        match &err {
            QsError::SearchFailed { trial, reason } => {
                assert_eq!(*trial, 5);
                assert!(reason.contains("simulator lost its qubits"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.is_external_failure());

        // Four completed trials were counted, nothing after the failure
        assert_eq!(recorder.trials.len(), 4);
        let last = recorder.trials.last().unwrap().2;
        assert_eq!(last.total_attempts(), 4);
        assert_eq!(last.total_successes(), 4);
        assert_eq!(recorder.finished, 0);
        assert_eq!(harness.backend().calls(), 5);
    }

    #[test]
    fn test_wrong_register_width_aborts_run() {
        let config = SearchConfiguration::new(6, 3, 10).unwrap();
        let mut recorder = Recorder::default();

        let mut harness = TrialHarness::new(config, EmptyRegisterBackend { calls: 0 }).unwrap();
        let err = harness.run(&mut recorder, NoPause).unwrap_err();

        match &err {
            QsError::SearchFailed { trial, reason } => {
                assert_eq!(*trial, 1);
                assert!(reason.contains("0 register bits, expected 6"), "{}", reason);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(recorder.trials.is_empty());
        assert_eq!(recorder.finished, 0);
        assert_eq!(harness.backend().calls, 1);
    }

    #[test]
    fn test_preflight_rejects_oversized_register() {
        let backend = qsearch_backend::SampledSearchBackend::new(4);
        let config = SearchConfiguration::new(5, 1, 10).unwrap();

        assert!(matches!(
            TrialHarness::new(config, backend),
            Err(QsError::RegisterTooLarge { size: 5, max: 4 })
        ));
    }

    #[test]
    fn test_empty_register_run() {
        let backend = ScriptedBackend::from_registers(&["", "", ""]).unwrap();
        let config = SearchConfiguration::new(0, 0, 3).unwrap();

        let summary = TrialHarness::new(config, backend)
            .unwrap()
            .run_silent()
            .unwrap();

        assert_eq!(summary.statistics.total_successes(), 3);
        assert!(summary.is_consistent(0.95).unwrap());
    }
}
