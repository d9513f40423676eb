//! # QSearch Backend
//!
//! Search capability abstraction for QSearch, plus two backends that need no
//! quantum state simulator.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qsearch_backend // L2: Search capability (완료)
//!     SearchBackend // 검색 인터페이스 (완료)
//!     SampledSearchBackend // 이론 분포 샘플러 (완료)
//!     ScriptedBackend // 결정론적 재생 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qsearch_backend::prelude::*;
//!
//! let mut backend = SampledSearchBackend::ideal().with_seed(42);
//!
//! // 6 database qubits, 3 Grover iterates
//! let outcome = backend.search(3, 6).unwrap();
//! assert_eq!(outcome.register_bits.len(), 6);
//! println!("{}", outcome.register_bits.to_readout());
//! ```
//!
//! ## Noisy Readout
//!
//! ```rust
//! use qsearch_backend::prelude::*;
//!
//! let mut backend = SampledSearchBackend::ideal()
//!     .with_seed(42)
//!     .with_readout_error(0.01)
//!     .unwrap();
//!
//! let outcome = backend.search(1, 2).unwrap();
//! assert!(outcome.marked_bit);
//! ```

#![warn(missing_docs)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Search backend trait (Gantree: L2_Backend)
pub mod execution;

/// Sampling backend (Gantree: L2_Backend → SampledSearchBackend)
pub mod sampler;

/// Scripted backend (Gantree: L2_Backend → ScriptedBackend)
pub mod scripted;

// ============================================================================
// Re-exports
// ============================================================================

pub use execution::SearchBackend;
pub use sampler::SampledSearchBackend;
pub use scripted::ScriptedBackend;

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use qsearch_backend::prelude::*;
    //! ```

    pub use crate::execution::SearchBackend;
    pub use crate::sampler::SampledSearchBackend;
    pub use crate::scripted::ScriptedBackend;
}

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use qsearch_core::{quantum_success_probability, recommended_iterations};

    #[test]
    fn test_backends_are_interchangeable() {
        let mut backends: Vec<Box<dyn SearchBackend>> = vec![
            Box::new(SampledSearchBackend::ideal().with_seed(42)),
            Box::new(ScriptedBackend::from_registers(&["1111"]).unwrap()),
        ];

        for backend in backends.iter_mut() {
            let outcome = backend.search(1, 4).unwrap();
            assert_eq!(outcome.register_size(), 4, "backend {}", backend.name());
        }
    }

    #[test]
    fn test_recommended_iterations_amplify() {
        let n = 8;
        let k = recommended_iterations(n).unwrap();
        let mut backend = SampledSearchBackend::ideal().with_seed(99);

        let hits = (0..1000)
            .filter(|_| backend.search(k, n).unwrap().register_bits.all_set())
            .count();

        let expected = quantum_success_probability(n, k).unwrap();
        assert!(expected > 0.99);
        assert!(hits as f64 / 1000.0 > 0.97, "hits = {}", hits);
    }

    #[test]
    fn test_rate_tracks_iteration_count() {
        // N = 64: success probability rises from k = 0 to k = 3
        let mut rates = Vec::new();
        for k in 0..=3 {
            let mut backend = SampledSearchBackend::ideal().with_seed(42);
            let hits = (0..1000)
                .filter(|_| backend.search(k, 6).unwrap().register_bits.all_set())
                .count();
            rates.push(hits as f64 / 1000.0);
        }

        for i in 1..rates.len() {
            assert!(rates[i] > rates[i - 1], "rates = {:?}", rates);
        }
    }
}
