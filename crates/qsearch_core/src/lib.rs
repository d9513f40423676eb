//! # QSearch Core
//!
//! Foundation types, configuration, and the theoretical probability model for
//! the Grover database-search validation experiment.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qsearch_core // L0+L1: Foundation + Model (완료)
//!     L0_Foundation // 기반 타입/상수/에러 (완료)
//!         CoreTypes // RegisterBits, TrialOutcome (완료)
//!         Constants // 실험/통계 상수 (완료)
//!         Errors // 에러 타입 (완료)
//!         SearchConfiguration // 실행 설정 (완료)
//!     L1_Model // 이론 모델 (완료)
//!         ProbabilityModel // 고전/양자 성공 확률 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qsearch_core::prelude::*;
//!
//! let config = SearchConfiguration::new(6, 3, 100).unwrap();
//! let prediction = TheoreticalPrediction::from_config(&config).unwrap();
//!
//! assert_eq!(prediction.database_size, 64);
//! assert!((prediction.classical_probability - 0.015625).abs() < 1e-12);
//! assert!(prediction.quantum_probability > prediction.classical_probability);
//! ```
//!
//! ## Classifying a Register
//!
//! ```rust
//! use qsearch_core::prelude::*;
//!
//! let outcome = TrialOutcome::new(true, RegisterBits::parse("111111").unwrap());
//! assert!(outcome.register_bits.all_set());
//! assert_eq!(outcome.register_bits.to_readout(), "One, One, One, One, One, One");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Core types (Gantree: L0_Foundation → CoreTypes)
pub mod types;

/// Constants (Gantree: L0_Foundation → Constants)
pub mod constants;

/// Error types (Gantree: L0_Foundation → Errors)
pub mod error;

/// Run configuration (Gantree: L0_Foundation → SearchConfiguration)
pub mod config;

/// Probability model (Gantree: L1_Model → ProbabilityModel)
pub mod probability;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::SearchConfiguration;
pub use constants::{experiment, stats};
pub use error::{QsError, QsResult};
pub use probability::{
    classical_success_probability, quantum_success_probability, recommended_iterations,
    TheoreticalPrediction,
};
pub use types::{RegisterBits, TrialOutcome};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use qsearch_core::prelude::*;
    //! ```

    pub use crate::config::SearchConfiguration;
    pub use crate::constants::{experiment, stats};
    pub use crate::error::{QsError, QsResult};
    pub use crate::probability::{
        classical_success_probability, quantum_success_probability, recommended_iterations,
        TheoreticalPrediction,
    };
    pub use crate::types::{RegisterBits, TrialOutcome};
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Integration Tests
// ============================================================================
