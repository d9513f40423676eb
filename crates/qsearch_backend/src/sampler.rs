//! Sampling search backend
//!
//! Gantree: L2_Backend → SampledSearchBackend
//!
//! Draws search outcomes directly from the output distribution of an ideal
//! Grover search instead of evolving a state vector. The oracle marks the
//! all-ones item, so a successful search reads `1…1` on the database
//! register with the flag qubit set; every other item shares the remaining
//! probability mass uniformly.

use crate::execution::SearchBackend;
use qsearch_core::{
    experiment, quantum_success_probability, QsError, QsResult, RegisterBits, TrialOutcome,
};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Sampling backend with optional readout error
/// Gantree: SampledSearchBackend // 분포 샘플러
pub struct SampledSearchBackend {
    /// Backend name
    name: String,

    /// Largest register accepted
    max_register_size: u32,

    /// Per-bit readout flip probability
    readout_error: f64,

    /// Random seed
    seed: Option<u64>,

    /// Random generator, persists across searches
    rng: StdRng,
}

impl SampledSearchBackend {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a noiseless sampler accepting registers up to `max_register_size`
    pub fn new(max_register_size: u32) -> Self {
        Self {
            name: "qsearch_sampler".to_string(),
            max_register_size: max_register_size.min(experiment::MAX_REGISTER_SIZE),
            readout_error: 0.0,
            seed: None,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a noiseless sampler with the full register range
    pub fn ideal() -> Self {
        Self::new(experiment::MAX_REGISTER_SIZE)
    }

    /// Set seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Set per-bit readout error probability
    pub fn with_readout_error(mut self, readout_error: f64) -> QsResult<Self> {
        if !(0.0..=experiment::MAX_READOUT_ERROR).contains(&readout_error) {
            return Err(QsError::InvalidReadoutError(readout_error));
        }
        self.readout_error = readout_error;
        Ok(self)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Seed in use, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Per-bit readout error probability
    pub fn readout_error(&self) -> f64 {
        self.readout_error
    }

    // ========================================================================
    // Sampling
    // ========================================================================

    /// Draw the database index and flag qubit for one ideal search
    fn sample_index(&mut self, register_size: u32, p_success: f64) -> (u64, bool) {
        let marked = (1u64 << register_size) - 1;

        // A one-item database has nothing else to land on
        if marked == 0 || self.rng.gen::<f64>() < p_success {
            return (marked, true);
        }

        (self.rng.gen_range(0..marked), false)
    }

    /// Apply independent readout flips to each register bit
    fn apply_readout_error(&mut self, bits: &mut RegisterBits) {
        if self.readout_error <= 0.0 {
            return;
        }
        for i in 0..bits.len() {
            if self.rng.gen::<f64>() < self.readout_error {
                bits.flip(i);
            }
        }
    }
}

impl Default for SampledSearchBackend {
    fn default() -> Self {
        Self::ideal()
    }
}

impl SearchBackend for SampledSearchBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn max_register_size(&self) -> u32 {
        self.max_register_size
    }

    fn search(&mut self, iterations: u32, register_size: u32) -> QsResult<TrialOutcome> {
        self.check_register_size(register_size)?;

        let p_success = quantum_success_probability(register_size, iterations)?;
        let (index, marked_bit) = self.sample_index(register_size, p_success);

        let mut register_bits = RegisterBits::from_index(index, register_size as usize);
        self.apply_readout_error(&mut register_bits);

        log::trace!(
            "{}: sampled index {} (marked={}) -> {}",
            self.name,
            index,
            marked_bit,
            register_bits
        );

        Ok(TrialOutcome::new(marked_bit, register_bits))
    }
}

// ============================================================================
// Tests
// ============================================================================
