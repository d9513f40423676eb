//! # QSearch Harness
//!
//! Repeated-trial experiment harness: calls a search backend once per trial,
//! classifies the measured register, keeps running counters, and reports.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qsearch_harness // L3: Trial harness (완료)
//!     TrialHarness // 메인 루프 (완료)
//!         classify // 성공 판정 (완료)
//!     RunningStatistics // 누적 통계 (완료)
//!     RunSummary // 이론 비교 (완료)
//!     ReportSink // Text/JsonLines/Null (완료)
//!     StepGate // NoPause/PromptGate (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qsearch_harness::prelude::*;
//! use qsearch_backend::SampledSearchBackend;
//! use qsearch_core::SearchConfiguration;
//!
//! let config = SearchConfiguration::new(6, 3, 100).unwrap();
//! let backend = SampledSearchBackend::ideal().with_seed(42);
//!
//! let mut harness = TrialHarness::new(config, backend).unwrap();
//! let summary = harness.run(NullReport, NoPause).unwrap();
//!
//! assert_eq!(summary.statistics.total_attempts(), 100);
//! println!("{}", summary);
//! ```

#![warn(missing_docs)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Trial loop (Gantree: L3_Harness → TrialHarness)
pub mod harness;

/// Counters and summary (Gantree: L3_Harness → RunningStatistics)
pub mod statistics;

/// Report sinks (Gantree: L3_Harness → ReportSink)
pub mod report;

/// Step gates (Gantree: L3_Harness → StepGate)
pub mod gate;

// ============================================================================
// Re-exports
// ============================================================================

pub use gate::{NoPause, PromptGate, StepGate};
pub use harness::{classify, TrialHarness};
pub use report::{JsonLinesReport, NullReport, ReportSink, TextReport, TrialRecord};
pub use statistics::{RunSummary, RunningStatistics};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use qsearch_harness::prelude::*;
    //! ```

    pub use crate::gate::{NoPause, PromptGate, StepGate};
    pub use crate::harness::{classify, TrialHarness};
    pub use crate::report::{JsonLinesReport, NullReport, ReportSink, TextReport, TrialRecord};
    pub use crate::statistics::{RunSummary, RunningStatistics};
}

// ============================================================================
// Integration Tests
// ============================================================================
