//! islander_compat - Villager compatibility calculator
//!
//! Scores pairs of villagers on three independent axes (personality,
//! species, star sign), each giving one of four marks (♥ ♦ ♣ ×), and
//! combines the three marks into a Good/Average/Bad verdict.
//!
//! # Architecture
//!
//! This crate follows the "Library-First" pattern:
//! - **lib.rs** (this file): Pure logic, no CLI concerns
//! - **bin/islander.rs**: Thin wrapper that parses flags, sets up logging
//!   and prints the report
//!
//! # Example
//!
//! ```
//! use islander_compat::{compatibility_matrix, Config, CompatibilityVerdict};
//!
//! let matrix = compatibility_matrix(&["Alice", "Bob"], &Config::default()).unwrap();
//! assert_eq!(matrix.verdict(0, 1), Some(CompatibilityVerdict::Good));
//! ```

pub mod core;

pub use crate::core::{
    Birthday, ColorMode, CompatError, CompatibilityMark, CompatibilityMatrix,
    CompatibilityMatrixBuilder, CompatibilityVerdict, Config, OutputFormat, PairScore,
    PairwiseScorer, Personality, ReportPresenter, Result, RuleSet, Species, StarSign, Subject,
    SubjectResolver, Theme, VillagerDataset,
};

/// Library version, shared with the CLI `--version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Load the dataset and rules named by `config` and score every pair of `ids`.
///
/// Fails before scoring anything if one of the ids is not in the dataset.
pub fn compatibility_matrix<S: AsRef<str>>(ids: &[S], config: &Config) -> Result<CompatibilityMatrix> {
    let dataset = config.load_dataset()?;
    let rules = config.load_rules()?;
    CompatibilityMatrixBuilder::new(&rules).build(ids, &dataset)
}
