//! Refinement control
//!
//! A run executes at most two Designer → Fan-Out → Consensus passes. The
//! second pass only happens when the first scores below the threshold, and
//! replaces it only when strictly better.

use crate::consensus::PassOutcome;
use serde::{Deserialize, Serialize};

/// Consensus score a first pass must reach to skip refinement
pub const DEFAULT_QUALITY_THRESHOLD: u8 = 80;
/// Hard upper bound on passes per run
pub const MAX_PASSES: u8 = 2;

/// Refinement state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefinementState {
    FirstPass,
    SecondPass,
    SelectBest,
    Done,
}

impl RefinementState {
    /// Next state after the pass belonging to `self` has completed.
    pub fn next(self, policy: &RefinementPolicy, first_pass_score: u8) -> Self {
        match self {
            RefinementState::FirstPass if policy.should_refine(first_pass_score) => {
                RefinementState::SecondPass
            }
            RefinementState::FirstPass => RefinementState::Done,
            RefinementState::SecondPass => RefinementState::SelectBest,
            RefinementState::SelectBest | RefinementState::Done => RefinementState::Done,
        }
    }
}

/// When to refine and how many passes are allowed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefinementPolicy {
    threshold: u8,
    max_iterations: u8,
}

impl Default for RefinementPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_QUALITY_THRESHOLD,
            max_iterations: MAX_PASSES,
        }
    }
}

impl RefinementPolicy {
    /// Values above [`MAX_PASSES`] are clamped; 0 is treated as 1.
    pub fn new(threshold: u8, max_iterations: u8) -> Self {
        Self {
            threshold: threshold.min(100),
            max_iterations: max_iterations.clamp(1, MAX_PASSES),
        }
    }

    /// Policy that never runs a second pass
    pub fn single_pass() -> Self {
        Self::new(DEFAULT_QUALITY_THRESHOLD, 1)
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn max_iterations(&self) -> u8 {
        self.max_iterations
    }

    pub fn should_refine(&self, consensus_score: u8) -> bool {
        self.max_iterations > 1 && consensus_score < self.threshold
    }

    /// Keep the refined pass only when it strictly beats the first.
    pub fn select_best(&self, first: PassOutcome, refined: PassOutcome) -> PassOutcome {
        if refined.consensus_score() > first.consensus_score() {
            refined
        } else {
            first
        }
    }
}
