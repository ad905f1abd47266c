//! Consensus domain
//!
//! Pure aggregation over the evaluations of a pass:
//!
//! - [`calculate_consensus`] - mean-plus-agreement-bonus score
//! - [`merge_suggestions`] - dedup, priority sort, truncate
//! - [`PassOutcome`] / [`ConsensusResult`] - per-pass and final results

pub mod calculator;
pub mod merge;
pub mod result;

pub use calculator::{
    BASELINE_SCORE, ConsensusScores, MAX_AGREEMENT_BONUS, agreement_bonus, calculate_consensus,
    population_std_dev,
};
pub use merge::{MAX_MERGED_SUGGESTIONS, merge_evaluation_suggestions, merge_suggestions};
pub use result::{ConsensusResult, PassOutcome};
