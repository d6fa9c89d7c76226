//! Villager reference dataset
//!
//! Reads AC Lister style villager exports: a JSON array of records with
//! `name`, `id`, `species`, `personality`, `coffee`, `birthday` ("Month Day"
//! or empty) and `wiki`. Any other fields are kept verbatim in
//! [`VillagerRecord::extra`].

use crate::core::error::{CompatError, Result, ResultExt};
use crate::core::matrix::SubjectResolver;
use crate::core::models::{Birthday, Personality, Species, Subject};
use chrono::Month;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const BUNDLED_VILLAGERS: &str = include_str!("../../data/villager.json");

lazy_static! {
    static ref BIRTHDAY_PATTERN: Regex = Regex::new(r"^\s*([A-Za-z]+)\s+(\d{1,2})\s*$").unwrap();
}

/// One raw dataset entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VillagerRecord {
    pub name: String,
    pub id: String,
    pub species: String,
    pub personality: String,
    #[serde(default)]
    pub coffee: String,
    #[serde(default)]
    pub birthday: String,
    #[serde(default)]
    pub wiki: String,
    /// Fields this crate does not interpret
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl VillagerRecord {
    /// Parse the categorical fields; unknown names become `None`
    pub fn to_subject(&self) -> Subject {
        let species = Species::parse(&self.species);
        if species.is_none() && !self.species.is_empty() {
            tracing::warn!(id = %self.id, species = %self.species, "unknown species");
        }
        let personality = Personality::parse(&self.personality);
        if personality.is_none() && !self.personality.is_empty() {
            tracing::warn!(id = %self.id, personality = %self.personality, "unknown personality");
        }

        Subject {
            id: self.id.clone(),
            name: self.name.clone(),
            species,
            personality,
            birthday: parse_birthday(&self.birthday),
        }
    }
}

/// Parse "Month Day" birthday text, e.g. "March 13".
///
/// The month must be a full English month name in title case. Empty text, any
/// other month spelling, or a date missing from the calendar give `None`.
pub fn parse_birthday(text: &str) -> Option<Birthday> {
    if text.trim().is_empty() {
        return None;
    }
    let parsed = BIRTHDAY_PATTERN.captures(text).and_then(|caps| {
        // chrono also takes "mar" or "MARCH"; only the full capitalized name is valid
        let month = caps[1].parse::<Month>().ok().filter(|m| m.name() == &caps[1])?;
        let day = caps[2].parse::<u32>().ok()?;
        Birthday::new(month.number_from_month(), day)
    });
    if parsed.is_none() {
        tracing::warn!(birthday = %text, "unparseable birthday");
    }
    parsed
}

/// Immutable, id-indexed villager records
#[derive(Debug, Clone)]
pub struct VillagerDataset {
    records: Vec<VillagerRecord>,
    index: HashMap<String, usize>,
}

impl VillagerDataset {
    /// The dataset shipped with the crate
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_VILLAGERS).context("bundled villager dataset")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CompatError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let json = fs::read_to_string(path)?;
        Self::from_json(&json).context(format!("villager dataset {}", path.display()))
    }

    /// Parse a JSON array of records. Duplicate ids are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<VillagerRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    pub fn from_records(records: Vec<VillagerRecord>) -> Result<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if index.insert(record.id.clone(), i).is_some() {
                return Err(CompatError::dataset(format!("duplicate villager id '{}'", record.id)));
            }
        }
        tracing::info!(villagers = records.len(), "villager dataset loaded");
        Ok(Self { records, index })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[VillagerRecord] {
        &self.records
    }

    /// Raw record for `id`
    pub fn record(&self, id: &str) -> Option<&VillagerRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    /// Parsed villager for `id`
    pub fn subject(&self, id: &str) -> Option<Subject> {
        self.record(id).map(VillagerRecord::to_subject)
    }
}

impl SubjectResolver for VillagerDataset {
    fn resolve(&self, id: &str) -> Option<Subject> {
        self.subject(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"[
        {
            "name": "Carmen",
            "id": "Carmen (2)",
            "species": "Mouse",
            "personality": "Snooty",
            "coffee": "",
            "birthday": "March 24",
            "wiki": "http://animalcrossing.wikia.com/wiki/Carmen_(mouse)",
            "store": "https://www.redbubble.com/people/purplepixel/",
            "hasProfileImage": false,
            "hasIconImage": true
        },
        {
            "name": "Verdun",
            "id": "Verdun",
            "species": "Bull",
            "personality": "Lazy",
            "coffee": "",
            "birthday": "",
            "wiki": "http://animalcrossing.wikia.com/wiki/Verdun"
        },
        {
            "name": "Glitch",
            "id": "Glitch",
            "species": "Dragon",
            "personality": "Sisterly",
            "birthday": "Smarch 3"
        }
    ]"#;

    #[test]
    fn test_parse_birthday() {
        assert_eq!(parse_birthday("March 13"), Birthday::new(3, 13));
        assert_eq!(parse_birthday("February 29"), Birthday::new(2, 29));
        assert_eq!(parse_birthday("  December 31 "), Birthday::new(12, 31));
        assert_eq!(parse_birthday(""), None);
        assert_eq!(parse_birthday("April 31"), None);
        assert_eq!(parse_birthday("Smarch 3"), None);
        assert_eq!(parse_birthday("March"), None);
        assert_eq!(parse_birthday("13 March"), None);
    }

    #[test]
    fn test_parse_birthday_requires_full_month_name() {
        assert_eq!(parse_birthday("September 22"), Birthday::new(9, 22));
        assert_eq!(parse_birthday("mar 13"), None);
        assert_eq!(parse_birthday("Mar 13"), None);
        assert_eq!(parse_birthday("march 13"), None);
        assert_eq!(parse_birthday("MARCH 13"), None);
        assert_eq!(parse_birthday("Sept 22"), None);
    }

    #[test]
    fn test_subject_parsing() {
        let dataset = VillagerDataset::from_json(SAMPLE).unwrap();
        let carmen = dataset.subject("Carmen (2)").unwrap();
        assert_eq!(carmen.name, "Carmen");
        assert_eq!(carmen.species, Some(Species::Mouse));
        assert_eq!(carmen.personality, Some(Personality::Snooty));
        assert_eq!(carmen.birthday, Birthday::new(3, 24));
        assert!(carmen.is_complete());
    }

    #[test]
    fn test_empty_birthday_is_incomplete() {
        let dataset = VillagerDataset::from_json(SAMPLE).unwrap();
        let verdun = dataset.subject("Verdun").unwrap();
        assert_eq!(verdun.species, Some(Species::Bull));
        assert_eq!(verdun.birthday, None);
        assert!(!verdun.is_complete());
    }

    #[test]
    fn test_unknown_names_become_none() {
        let dataset = VillagerDataset::from_json(SAMPLE).unwrap();
        let glitch = dataset.subject("Glitch").unwrap();
        assert_eq!(glitch.species, None);
        assert_eq!(glitch.personality, None);
        assert_eq!(glitch.birthday, None);
        assert_eq!(dataset.record("Glitch").unwrap().coffee, "");
    }

    #[test]
    fn test_raw_record_keeps_extra_fields() {
        let dataset = VillagerDataset::from_json(SAMPLE).unwrap();
        let raw = dataset.record("Carmen (2)").unwrap();
        assert_eq!(
            raw.extra.get("store").and_then(|v| v.as_str()),
            Some("https://www.redbubble.com/people/purplepixel/")
        );
        assert_eq!(raw.extra.get("hasIconImage"), Some(&serde_json::Value::Bool(true)));
    }

    #[test]
    fn test_unknown_id() {
        let dataset = VillagerDataset::from_json(SAMPLE).unwrap();
        assert!(dataset.record("qwertyQWERTY").is_none());
        assert!(dataset.subject("qwertyQWERTY").is_none());
        assert!(dataset.resolve("qwertyQWERTY").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let json = r#"[
            {"name": "Bob", "id": "Bob", "species": "Cat", "personality": "Lazy"},
            {"name": "Bob", "id": "Bob", "species": "Cat", "personality": "Lazy"}
        ]"#;
        let err = VillagerDataset::from_json(json).unwrap_err();
        assert!(matches!(err, CompatError::Dataset { .. }));
        assert!(err.to_string().contains("'Bob'"));
    }

    #[test]
    fn test_bundled_dataset() {
        let dataset = VillagerDataset::bundled().unwrap();
        assert!(dataset.len() > 130);

        let ace = dataset.subject("Ace").unwrap();
        assert_eq!(ace.species, Some(Species::Bird));
        assert_eq!(ace.personality, Some(Personality::Jock));
        assert_eq!(ace.birthday, Birthday::new(3, 13));

        let jakey = dataset.record("Jakey").unwrap();
        assert_eq!(jakey.coffee, "Mocha - A Little Milk - 1 Sugar");
        assert_eq!(jakey.wiki, "http://animalcrossing.wikia.com/wiki/Jacob");

        assert!(!dataset.subject("Verdun").unwrap().is_complete());
    }

    #[test]
    fn test_bundled_record_keeps_full_entry() {
        let dataset = VillagerDataset::bundled().unwrap();

        let ace = serde_json::to_value(dataset.record("Ace").unwrap()).unwrap();
        assert_eq!(
            ace,
            serde_json::json!({
                "name": "Ace",
                "id": "Ace",
                "species": "Bird",
                "personality": "Jock",
                "coffee": "",
                "birthday": "March 13",
                "wiki": "http://animalcrossing.wikia.com/wiki/Ace",
                "store": "https://www.redbubble.com/people/purplepixel/",
                "hasProfileImage": false,
                "hasIconImage": true
            })
        );

        let carmen = dataset.record("Carmen").unwrap();
        assert_eq!(
            carmen.extra.get("store").and_then(|v| v.as_str()),
            Some("https://www.redbubble.com/people/purplepixel/works/15934499-carmen-animal-crossing")
        );
        assert!(dataset.records().iter().all(|r| r.extra.contains_key("store")));
    }

    #[test]
    fn test_bundled_covers_new_horizons_villagers() {
        let dataset = VillagerDataset::bundled().unwrap();
        let expected = [
            ("Lolly", Species::Cat),
            ("Sasha", Species::Rabbit),
            ("Shino", Species::Deer),
            ("Ketchup", Species::Duck),
            ("Raymond", Species::Cat),
            ("Judy", Species::Cub),
            ("Sherb", Species::Goat),
            ("Audie", Species::Wolf),
            ("Marshal", Species::Squirrel),
            ("Ione", Species::Squirrel),
            ("Cephalobot", Species::Octopus),
            ("Reneigh", Species::Horse),
            ("Agent S", Species::Squirrel),
        ];
        for (id, species) in expected {
            let subject = dataset.subject(id).unwrap_or_else(|| panic!("{} is missing", id));
            assert_eq!(subject.species, Some(species), "{}", id);
            assert!(subject.is_complete(), "{}", id);
        }
    }

    #[test]
    fn test_bundled_names_all_parse() {
        let dataset = VillagerDataset::bundled().unwrap();
        for record in dataset.records() {
            assert!(Species::parse(&record.species).is_some(), "{}", record.id);
            assert!(Personality::parse(&record.personality).is_some(), "{}", record.id);
        }
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let dataset = VillagerDataset::from_file(file.path()).unwrap();
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn test_from_file_missing() {
        let err = VillagerDataset::from_file(Path::new("/no/such/villager.json")).unwrap_err();
        assert!(matches!(err, CompatError::FileNotFound { .. }));
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let err = VillagerDataset::from_file(file.path()).unwrap_err();
        assert!(matches!(err.root(), CompatError::Json(_)));
        assert!(err.to_string().contains("villager dataset"));
    }
}
