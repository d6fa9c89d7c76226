//! Personality compatibility lookup table
//!
//! Source data is a nested JSON object mapping each personality to the marks
//! it gets with every other personality:
//!
//! ```json
//! { "Normal": { "Lazy": "♥", "Jock": "♣" }, "Lazy": { "Normal": "♥" } }
//! ```
//!
//! Entries are stored under a canonically ordered [`PersonalityPair`], so the
//! table cannot answer differently for (a, b) and (b, a).

use super::PairRule;
use crate::core::error::{CompatError, Result, ResultExt};
use crate::core::models::{CompatibilityMark, Personality};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

const BUNDLED_TABLE: &str = include_str!("../../../data/personality_compatibility.json");

/// Unordered pair of personalities, smaller variant first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonalityPair(Personality, Personality);

impl PersonalityPair {
    pub fn new(a: Personality, b: Personality) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }
}

/// Complete, symmetric personality compatibility table
#[derive(Debug, Clone)]
pub struct PersonalityTable {
    marks: HashMap<PersonalityPair, CompatibilityMark>,
}

impl PersonalityTable {
    /// Load the table shipped with the crate
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_TABLE).context("bundled personality table")
    }

    /// Load a table from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CompatError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let json = fs::read_to_string(path)?;
        Self::from_json(&json).context(format!("personality table {}", path.display()))
    }

    /// Parse and validate table source data.
    ///
    /// Every problem is a [`CompatError::Configuration`]: malformed JSON, an
    /// unknown personality name, an unknown symbol, two directions of the same
    /// pair disagreeing, or a pair with no entry at all.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, BTreeMap<String, String>> = serde_json::from_str(json)
            .map_err(|e| CompatError::configuration(format!("malformed table: {}", e)))?;

        let mut marks = HashMap::new();
        for (row, columns) in &raw {
            let p1 = parse_personality(row)?;
            for (column, symbol) in columns {
                let p2 = parse_personality(column)?;
                let mark = CompatibilityMark::from_symbol(symbol).ok_or_else(|| {
                    CompatError::configuration(format!(
                        "unrecognized symbol '{}' for {}/{}; expected one of ♥ ♦ ♣ ×",
                        symbol, p1, p2
                    ))
                })?;
                let pair = PersonalityPair::new(p1, p2);
                if let Some(existing) = marks.insert(pair, mark) {
                    if existing != mark {
                        return Err(CompatError::configuration(format!(
                            "asymmetric entry {}/{}: {} vs {}",
                            p1, p2, existing, mark
                        )));
                    }
                }
            }
        }

        for (i, &p1) in Personality::ALL.iter().enumerate() {
            for &p2 in &Personality::ALL[i..] {
                if !marks.contains_key(&PersonalityPair::new(p1, p2)) {
                    return Err(CompatError::configuration(format!(
                        "missing entry for {}/{}",
                        p1, p2
                    )));
                }
            }
        }

        tracing::debug!(pairs = marks.len(), "personality table loaded");
        Ok(Self { marks })
    }
}

fn parse_personality(name: &str) -> Result<Personality> {
    Personality::parse(name)
        .ok_or_else(|| CompatError::configuration(format!("unknown personality '{}'", name)))
}

impl PairRule<Personality> for PersonalityTable {
    /// # Panics
    ///
    /// Never for a table built by this module; completeness is checked on load.
    fn score(&self, a: Personality, b: Personality) -> CompatibilityMark {
        match self.marks.get(&PersonalityPair::new(a, b)) {
            Some(mark) => *mark,
            None => panic!("personality table has no entry for {}/{}", a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_table_json(overrides: &[(&str, &str, &str)]) -> String {
        let mut rows: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
        for p1 in Personality::ALL {
            for p2 in Personality::ALL {
                rows.entry(p1.name().to_string())
                    .or_default()
                    .insert(p2.name().to_string(), "♣".to_string());
            }
        }
        for (a, b, symbol) in overrides {
            rows.entry(a.to_string())
                .or_default()
                .insert(b.to_string(), symbol.to_string());
        }
        serde_json::to_string(&rows).unwrap()
    }

    #[test]
    fn test_bundled_table_loads() {
        let table = PersonalityTable::bundled().unwrap();
        assert_eq!(table.score(Personality::Normal, Personality::Lazy), CompatibilityMark::Heart);
        assert_eq!(table.score(Personality::Lazy, Personality::Jock), CompatibilityMark::Cross);
    }

    #[test]
    fn test_bundled_table_is_symmetric_and_complete() {
        let table = PersonalityTable::bundled().unwrap();
        for p in Personality::ALL {
            for q in Personality::ALL {
                assert_eq!(table.score(p, q), table.score(q, p), "{}/{}", p, q);
            }
        }
    }

    #[test]
    fn test_self_pairs_are_diamond() {
        let table = PersonalityTable::bundled().unwrap();
        for p in Personality::ALL {
            assert_eq!(table.score(p, p), CompatibilityMark::Diamond);
        }
    }

    #[test]
    fn test_pair_is_canonical() {
        assert_eq!(
            PersonalityPair::new(Personality::Smug, Personality::Normal),
            PersonalityPair::new(Personality::Normal, Personality::Smug)
        );
    }

    #[test]
    fn test_one_directional_entries_are_enough() {
        let mut rows: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
        for (i, p1) in Personality::ALL.iter().enumerate() {
            for p2 in &Personality::ALL[i..] {
                rows.entry(p1.name().to_string())
                    .or_default()
                    .insert(p2.name().to_string(), "♦".to_string());
            }
        }
        let table = PersonalityTable::from_json(&serde_json::to_string(&rows).unwrap()).unwrap();
        assert_eq!(table.score(Personality::Uchi, Personality::Normal), CompatibilityMark::Diamond);
    }

    #[test]
    fn test_unknown_symbol_is_configuration_error() {
        let json = full_table_json(&[("Normal", "Lazy", "?")]);
        let err = PersonalityTable::from_json(&json).unwrap_err();
        assert!(matches!(err, CompatError::Configuration { .. }));
        assert!(err.to_string().contains("'?'"));
    }

    #[test]
    fn test_unknown_personality_is_configuration_error() {
        let json = full_table_json(&[("Sisterly", "Lazy", "♥")]);
        let err = PersonalityTable::from_json(&json).unwrap_err();
        assert!(matches!(err, CompatError::Configuration { .. }));
        assert!(err.to_string().contains("Sisterly"));
    }

    #[test]
    fn test_asymmetric_entries_rejected() {
        let json = full_table_json(&[("Normal", "Lazy", "♥"), ("Lazy", "Normal", "×")]);
        let err = PersonalityTable::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("asymmetric"));
    }

    #[test]
    fn test_missing_pair_rejected() {
        let json = r#"{"Normal": {"Normal": "♦"}}"#;
        let err = PersonalityTable::from_json(json).unwrap_err();
        assert!(matches!(err, CompatError::Configuration { .. }));
        assert!(err.to_string().contains("missing entry"));
    }

    #[test]
    fn test_malformed_json_is_configuration_error() {
        let err = PersonalityTable::from_json("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, CompatError::Configuration { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = PersonalityTable::from_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CompatError::FileNotFound { .. }));
    }
}
