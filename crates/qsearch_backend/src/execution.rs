//! Search capability trait
//!
//! Gantree: L2_Backend → SearchBackend
//!
//! The harness only ever talks to a search procedure through this trait. A
//! backend takes an iterate count and a register size, runs one search, and
//! hands back the measured flag qubit and database register.

use qsearch_core::{experiment, QsError, QsResult, TrialOutcome};

/// Search capability
/// Gantree: SearchBackend // 검색 인터페이스
pub trait SearchBackend {
    /// Get backend name
    fn name(&self) -> &str;

    /// Largest register this backend can search
    fn max_register_size(&self) -> u32 {
        experiment::MAX_REGISTER_SIZE
    }

    /// Run one search with `iterations` Grover iterates over `register_size` qubits
    /// Gantree: search(k,n) -> Result<TrialOutcome>
    ///
    /// Blocks until the result is available. Each call is independent of
    /// previous calls.
    fn search(&mut self, iterations: u32, register_size: u32) -> QsResult<TrialOutcome>;

    /// Reject register sizes this backend cannot hold
    fn check_register_size(&self, register_size: u32) -> QsResult<()> {
        let max = self.max_register_size();
        if register_size > max {
            return Err(QsError::RegisterTooLarge {
                size: register_size,
                max,
            });
        }
        Ok(())
    }
}

impl<B: SearchBackend + ?Sized> SearchBackend for &mut B {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn max_register_size(&self) -> u32 {
        (**self).max_register_size()
    }

    fn search(&mut self, iterations: u32, register_size: u32) -> QsResult<TrialOutcome> {
        (**self).search(iterations, register_size)
    }
}

impl<B: SearchBackend + ?Sized> SearchBackend for Box<B> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn max_register_size(&self) -> u32 {
        (**self).max_register_size()
    }

    fn search(&mut self, iterations: u32, register_size: u32) -> QsResult<TrialOutcome> {
        (**self).search(iterations, register_size)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use qsearch_core::RegisterBits;

    struct AllOnes {
        calls: usize,
    }

    impl SearchBackend for AllOnes {
        fn name(&self) -> &str {
            "all_ones"
        }

        fn max_register_size(&self) -> u32 {
            8
        }

        fn search(&mut self, _iterations: u32, register_size: u32) -> QsResult<TrialOutcome> {
            self.check_register_size(register_size)?;
            self.calls += 1;
            Ok(TrialOutcome::new(
                true,
                RegisterBits::ones(register_size as usize),
            ))
        }
    }

    #[test]
    fn test_check_register_size() {
        let backend = AllOnes { calls: 0 };
        assert!(backend.check_register_size(8).is_ok());
        assert_eq!(
            backend.check_register_size(9),
            Err(QsError::RegisterTooLarge { size: 9, max: 8 })
        );
    }

    fn run_once<B: SearchBackend>(mut backend: B, register_size: u32) -> QsResult<TrialOutcome> {
        backend.search(1, register_size)
    }

    #[test]
    fn test_forwarding_through_mut_ref() {
        let mut backend = AllOnes { calls: 0 };
        let outcome = run_once(&mut backend, 3).unwrap();
        assert_eq!(outcome.register_size(), 3);
        assert!(run_once(&mut backend, 9).is_err());
        assert_eq!(backend.calls, 1);
    }

    #[test]
    fn test_forwarding_through_box() {
        let mut backend: Box<dyn SearchBackend> = Box::new(AllOnes { calls: 0 });
        assert_eq!(backend.max_register_size(), 8);
        assert!(backend.search(0, 20).is_err());
        assert!(backend.search(0, 2).unwrap().register_bits.all_set());
        assert_eq!(backend.name(), "all_ones");
    }
}
