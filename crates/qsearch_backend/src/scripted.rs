//! Scripted search backend
//!
//! Gantree: L2_Backend → ScriptedBackend
//!
//! Replays a fixed sequence of outcomes and errors, one per search call.
//! Used to drive the harness deterministically.

use crate::execution::SearchBackend;
use qsearch_core::{QsError, QsResult, RegisterBits, TrialOutcome};
use std::collections::VecDeque;

/// Backend that replays queued results in order
/// Gantree: ScriptedBackend // 재생 백엔드
#[derive(Debug, Clone, Default)]
pub struct ScriptedBackend {
    script: VecDeque<QsResult<TrialOutcome>>,
    calls: u64,
}

impl ScriptedBackend {
    /// Create from a list of results
    pub fn new(script: impl IntoIterator<Item = QsResult<TrialOutcome>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            calls: 0,
        }
    }

    /// Create from register strings such as `"1111"`; every entry succeeds
    pub fn from_registers(registers: &[&str]) -> QsResult<Self> {
        let script = registers
            .iter()
            .map(|r| {
                let bits = RegisterBits::parse(r)?;
                Ok(Ok(TrialOutcome::new(bits.all_set(), bits)))
            })
            .collect::<QsResult<Vec<_>>>()?;
        Ok(Self::new(script))
    }

    /// Queue another outcome
    pub fn push_outcome(&mut self, outcome: TrialOutcome) {
        self.script.push_back(Ok(outcome));
    }

    /// Queue a failure
    pub fn push_error(&mut self, message: &str) {
        self.script
            .push_back(Err(QsError::BackendError(message.to_string())));
    }

    /// Number of search calls made so far
    pub fn calls(&self) -> u64 {
        self.calls
    }

    /// Number of queued results not yet replayed
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl SearchBackend for ScriptedBackend {
    fn name(&self) -> &str {
        "scripted"
    }

    fn search(&mut self, _iterations: u32, register_size: u32) -> QsResult<TrialOutcome> {
        self.calls += 1;
        let next = self.script.pop_front().ok_or_else(|| {
            QsError::BackendError(format!("script exhausted after {} calls", self.calls - 1))
        })?;

        let outcome = next?;
        if outcome.register_size() != register_size as usize {
            return Err(QsError::BackendError(format!(
                "scripted register has {} bits, expected {}",
                outcome.register_size(),
                register_size
            )));
        }
        Ok(outcome)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_in_order() {
        let mut backend = ScriptedBackend::from_registers(&["11", "10", "01"]).unwrap();

        assert_eq!(backend.search(1, 2).unwrap().register_bits.to_string(), "11");
        assert_eq!(backend.search(1, 2).unwrap().register_bits.to_string(), "10");
        assert_eq!(backend.remaining(), 1);
        assert_eq!(backend.calls(), 2);
    }

    #[test]
    fn test_exhausted_script() {
        let mut backend = ScriptedBackend::from_registers(&["1"]).unwrap();
        assert!(backend.search(0, 1).is_ok());

        let err = backend.search(0, 1).unwrap_err();
        assert!(err.to_string().contains("exhausted"));
    }

    #[test]
    fn test_queued_error() {
        let mut backend = ScriptedBackend::default();
        backend.push_error("boom");
        backend.push_outcome(TrialOutcome::new(true, RegisterBits::ones(1)));

        assert_eq!(
            backend.search(0, 1),
            Err(QsError::BackendError("boom".into()))
        );
        assert!(backend.search(0, 1).is_ok());
    }

    #[test]
    fn test_width_mismatch() {
        let mut backend = ScriptedBackend::from_registers(&["111"]).unwrap();
        assert!(backend.search(0, 2).is_err());
    }

    #[test]
    fn test_invalid_register_string() {
        assert!(ScriptedBackend::from_registers(&["1a"]).is_err());
    }
}
