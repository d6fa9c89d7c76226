//! Core module for the islander compatibility engine
//!
//! # Architecture
//!
//! - `models`: Categorical types (Species, Personality, StarSign, marks, verdicts)
//! - `error`: Error types using thiserror
//! - `star_sign`: Birthday to star sign classification
//! - `rules`: Per-attribute pair rules (personality table, species, star sign groups)
//! - `scorer`: Three marks to one verdict
//! - `matrix`: N×N compatibility matrix over a SubjectResolver
//! - `dataset`: Villager JSON dataset
//! - `config`: .islander_config.json discovery
//! - `presenter`: Tables, colours and JSON output

pub mod models;
pub mod error;
pub mod star_sign;
pub mod rules;
pub mod scorer;
pub mod matrix;
pub mod dataset;
pub mod config;
pub mod presenter;

// Re-export commonly used types
pub use models::{
    Birthday, CompatibilityMark, CompatibilityVerdict, Personality, Profile, Species, StarSign,
    Subject,
};
pub use error::{CompatError, Result, ResultExt};
pub use star_sign::classify;
pub use rules::{PairRule, PersonalityTable, RuleSet, SpeciesRules, StarSignRules};
pub use scorer::{PairScore, PairwiseScorer};
pub use matrix::{CompatibilityMatrix, CompatibilityMatrixBuilder, SubjectResolver};
pub use dataset::{VillagerDataset, VillagerRecord};
pub use config::{ColorMode, Config, OutputFormat};
pub use presenter::{ReportPresenter, Theme};
