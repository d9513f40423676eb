//! Error types for QSearch
//!
//! Gantree: L0_Foundation → Errors
//!
//! A single error enum shared by every crate in the workspace.

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Main error type for QSearch
/// Gantree: QsError // enum
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QsError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Register size outside the supported range
    /// Gantree: InvalidRegisterSize{{size,max}} // 레지스터 크기
    #[error("Invalid register size {size}: must be in range [0, {max}]")]
    InvalidRegisterSize { size: u32, max: u32 },

    /// Repeat count must be positive
    #[error("Invalid repeats {0}: must be > 0")]
    InvalidRepeats(u32),

    /// Readout error probability out of range
    #[error("Invalid readout error {0}: must be in range [0, 0.5]")]
    InvalidReadoutError(f64),

    /// Confidence level out of range
    #[error("Invalid confidence level {0}: must be in range [0.90, 0.99]")]
    InvalidConfidence(f64),

    /// Backend cannot hold a register of the requested size
    ///
    /// Raised by the harness preflight; a backend raising it mid-run is
    /// reported as `SearchFailed`.
    #[error("Register size {size} exceeds backend capacity {max}")]
    RegisterTooLarge { size: u32, max: u32 },

    /// Malformed configuration input (file or command line)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    // ========================================================================
    // External Capability Errors
    // ========================================================================
    /// Raised by a search backend
    /// Gantree: BackendError(String) // 백엔드
    #[error("Backend error: {0}")]
    BackendError(String),

    /// A trial's search call failed and the run was aborted
    /// Gantree: SearchFailed{{trial,reason}} // 실행 중단
    #[error("Search failed on trial {trial}: {reason}")]
    SearchFailed { trial: u64, reason: String },

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// Report sink or step gate failed to write/read
    #[error("Report error: {0}")]
    ReportError(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(String),

    /// File I/O error
    #[error("File error: {0}")]
    FileError(String),
}

/// Result type alias for QSearch operations
/// Gantree: QsResult<T> // type alias
pub type QsResult<T> = Result<T, QsError>;

// ============================================================================
// Error Conversion Helpers
// ============================================================================

impl From<serde_json::Error> for QsError {
    fn from(err: serde_json::Error) -> Self {
        QsError::JsonError(err.to_string())
    }
}

impl From<std::io::Error> for QsError {
    fn from(err: std::io::Error) -> Self {
        QsError::FileError(err.to_string())
    }
}

// ============================================================================
// Error Helpers
// ============================================================================

impl QsError {
    /// Check if error was detected before any trial ran
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            QsError::InvalidRegisterSize { .. }
                | QsError::InvalidRepeats(_)
                | QsError::InvalidReadoutError(_)
                | QsError::InvalidConfidence(_)
                | QsError::RegisterTooLarge { .. }
                | QsError::ConfigError(_)
        )
    }

    /// Check if error originated in the search capability
    pub fn is_external_failure(&self) -> bool {
        matches!(
            self,
            QsError::BackendError(_) | QsError::SearchFailed { .. }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
