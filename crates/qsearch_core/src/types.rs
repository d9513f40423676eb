//! Core types for QSearch
//!
//! Gantree: L0_Foundation → CoreTypes
//!
//! Measured register values and the per-trial outcome returned by a
//! search backend.

use crate::error::{QsError, QsResult};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// RegisterBits
// ============================================================================

/// Measured database register, one entry per qubit (index 0 = first qubit)
/// Gantree: RegisterBits // 레지스터 측정값
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegisterBits {
    bits: Vec<bool>,
}

impl RegisterBits {
    /// Create from a vector of bools
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Create from string (e.g., "0110"), first character is qubit 0
    /// Gantree: parse(s) -> Self // 파싱
    pub fn parse(s: &str) -> QsResult<Self> {
        let bits: Result<Vec<bool>, _> = s
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(QsError::ConfigError(format!(
                    "invalid register '{}': must contain only '0' and '1'",
                    s
                ))),
            })
            .collect();
        Ok(Self { bits: bits? })
    }

    /// Register of `n` ones (the marked database item)
    pub fn ones(n: usize) -> Self {
        Self {
            bits: vec![true; n],
        }
    }

    /// Register of `n` zeros
    pub fn zeros(n: usize) -> Self {
        Self {
            bits: vec![false; n],
        }
    }

    /// Decode a database index; bit `i` of `index` lands on qubit `i`
    pub fn from_index(index: u64, n: usize) -> Self {
        let bits = (0..n)
            .map(|i| i < 64 && (index >> i) & 1 == 1)
            .collect();
        Self { bits }
    }

    /// Get the number of bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Get bit at index
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Borrow the bits in qubit order
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Flip the bit at `index`; out-of-range indices are ignored
    pub fn flip(&mut self, index: usize) {
        if let Some(bit) = self.bits.get_mut(index) {
            *bit = !*bit;
        }
    }

    /// True when no bit reads zero (vacuously true for an empty register)
    /// Gantree: all_set() -> bool // AND 축약
    pub fn all_set(&self) -> bool {
        self.bits.iter().all(|&b| b)
    }

    /// Comma-separated `One`/`Zero` listing, as printed per trial
    pub fn to_readout(&self) -> String {
        self.bits
            .iter()
            .map(|&b| if b { "One" } else { "Zero" })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for RegisterBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            write!(f, "{}", if b { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl From<Vec<bool>> for RegisterBits {
    fn from(bits: Vec<bool>) -> Self {
        Self::new(bits)
    }
}

// ============================================================================
// TrialOutcome
// ============================================================================

/// Result of one search call
/// Gantree: TrialOutcome // 시행 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialOutcome {
    /// Readout of the marked-item flag qubit
    pub marked_bit: bool,

    /// Measured database register
    pub register_bits: RegisterBits,
}

impl TrialOutcome {
    /// Create a new outcome
    pub fn new(marked_bit: bool, register_bits: RegisterBits) -> Self {
        Self {
            marked_bit,
            register_bits,
        }
    }

    /// Register size this outcome was measured on
    pub fn register_size(&self) -> usize {
        self.register_bits.len()
    }
}

impl fmt::Display for TrialOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TrialOutcome(marked={}, register={})",
            self.marked_bit, self.register_bits
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let bits = RegisterBits::parse("1011").unwrap();
        assert_eq!(bits.len(), 4);
        assert_eq!(bits.get(0), Some(true));
        assert_eq!(bits.get(1), Some(false));
        assert_eq!(bits.to_string(), "1011");

        assert!(RegisterBits::parse("10x1").is_err());
    }

    #[test]
    fn test_all_set() {
        assert!(RegisterBits::ones(6).all_set());
        assert!(!RegisterBits::parse("111101").unwrap().all_set());
        assert!(!RegisterBits::zeros(3).all_set());
        assert!(RegisterBits::default().all_set());
    }

    #[test]
    fn test_from_index() {
        let bits = RegisterBits::from_index(0b101, 4);
        assert_eq!(bits.as_slice(), &[true, false, true, false]);

        assert!(RegisterBits::from_index(63, 6).all_set());
        assert_eq!(RegisterBits::from_index(0, 3), RegisterBits::zeros(3));
    }

    #[test]
    fn test_flip() {
        let mut bits = RegisterBits::ones(3);
        bits.flip(1);
        assert_eq!(bits.to_string(), "101");
        bits.flip(10);
        assert_eq!(bits.len(), 3);
    }

    #[test]
    fn test_readout() {
        let bits = RegisterBits::parse("110").unwrap();
        assert_eq!(bits.to_readout(), "One, One, Zero");
        assert_eq!(RegisterBits::default().to_readout(), "");
    }

    #[test]
    fn test_serde_transparent() {
        let outcome = TrialOutcome::new(true, RegisterBits::parse("10").unwrap());
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"marked_bit":true,"register_bits":[true,false]}"#);

        let back: TrialOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
        assert_eq!(back.register_size(), 2);
    }
}
