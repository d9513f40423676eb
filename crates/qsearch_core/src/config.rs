//! Search experiment configuration
//!
//! Gantree: L0_Foundation → SearchConfiguration
//!
//! Immutable run parameters: register size, Grover iterates, and trial count.
//! Every construction path (constructor, builder, JSON) is validated, so a
//! `SearchConfiguration` in hand is always runnable.

use crate::constants::experiment;
use crate::error::{QsError, QsResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Search experiment configuration
/// Gantree: SearchConfiguration // 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSearchConfiguration")]
pub struct SearchConfiguration {
    /// Number of database qubits
    /// Gantree: register_size: u32 // 큐비트 수 (6)
    register_size: u32,

    /// Number of Grover iterates per search
    /// Gantree: iterations: u32 // 반복 (3)
    iterations: u32,

    /// Number of trials
    /// Gantree: repeats: u32 // 시행 수 (100)
    repeats: u32,
}

/// Unvalidated form used for deserialization; missing fields take defaults
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawSearchConfiguration {
    register_size: u32,
    iterations: u32,
    repeats: u32,
}

impl Default for RawSearchConfiguration {
    fn default() -> Self {
        Self {
            register_size: experiment::DEFAULT_REGISTER_SIZE,
            iterations: experiment::DEFAULT_ITERATIONS,
            repeats: experiment::DEFAULT_REPEATS,
        }
    }
}

impl TryFrom<RawSearchConfiguration> for SearchConfiguration {
    type Error = QsError;

    fn try_from(raw: RawSearchConfiguration) -> Result<Self, Self::Error> {
        Self::new(raw.register_size, raw.iterations, raw.repeats)
    }
}

impl SearchConfiguration {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a validated configuration
    /// Gantree: new(n,k,r) -> Result<Self> // 생성+검증
    pub fn new(register_size: u32, iterations: u32, repeats: u32) -> QsResult<Self> {
        let config = Self {
            register_size,
            iterations,
            repeats,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document, e.g. `{"register_size": 6, "iterations": 3}`
    pub fn from_json_str(json: &str) -> QsResult<Self> {
        serde_json::from_str(json).map_err(|e| QsError::ConfigError(e.to_string()))
    }

    /// Load a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> QsResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| QsError::FileError(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&contents)
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Copy with a different register size
    pub fn with_register_size(self, register_size: u32) -> QsResult<Self> {
        Self::new(register_size, self.iterations, self.repeats)
    }

    /// Copy with a different iteration count
    pub fn with_iterations(self, iterations: u32) -> QsResult<Self> {
        Self::new(self.register_size, iterations, self.repeats)
    }

    /// Copy with a different repeat count
    pub fn with_repeats(self, repeats: u32) -> QsResult<Self> {
        Self::new(self.register_size, self.iterations, repeats)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of database qubits
    #[inline]
    pub fn register_size(&self) -> u32 {
        self.register_size
    }

    /// Number of Grover iterates
    #[inline]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Number of trials
    #[inline]
    pub fn repeats(&self) -> u32 {
        self.repeats
    }

    /// Database size N = 2^n
    #[inline]
    pub fn database_size(&self) -> u64 {
        1u64 << self.register_size
    }

    /// Oracle queries per search (2k + 1)
    #[inline]
    pub fn oracle_queries(&self) -> u64 {
        experiment::oracle_queries(self.iterations)
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate configuration
    /// Gantree: validate(&self) -> Result // 검증
    pub fn validate(&self) -> QsResult<()> {
        if self.register_size > experiment::MAX_REGISTER_SIZE {
            return Err(QsError::InvalidRegisterSize {
                size: self.register_size,
                max: experiment::MAX_REGISTER_SIZE,
            });
        }

        if self.repeats == 0 {
            return Err(QsError::InvalidRepeats(self.repeats));
        }

        Ok(())
    }
}

impl Default for SearchConfiguration {
    fn default() -> Self {
        Self {
            register_size: experiment::DEFAULT_REGISTER_SIZE,
            iterations: experiment::DEFAULT_ITERATIONS,
            repeats: experiment::DEFAULT_REPEATS,
        }
    }
}

impl fmt::Display for SearchConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SearchConfiguration({}Q, N={}, iterations={}, repeats={})",
            self.register_size,
            self.database_size(),
            self.iterations,
            self.repeats
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
