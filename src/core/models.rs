//! Core data models for islander-compat
//!
//! The categorical universe the rules operate on: personalities, species,
//! star signs, the four compatibility marks and the three verdicts, plus the
//! `Subject` record the matrix builder consumes.

use crate::core::error::CompatError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Year used to decide whether a (month, day) pair is a real calendar date.
/// A leap year, so February 29 birthdays are accepted.
pub const REFERENCE_YEAR: i32 = 2000;

/// Villager personality type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Personality {
    Normal,
    Lazy,
    Peppy,
    Jock,
    Snooty,
    Cranky,
    Smug,
    Uchi,
}

impl Personality {
    pub const ALL: [Personality; 8] = [
        Personality::Normal,
        Personality::Lazy,
        Personality::Peppy,
        Personality::Jock,
        Personality::Snooty,
        Personality::Cranky,
        Personality::Smug,
        Personality::Uchi,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Personality::Normal => "Normal",
            Personality::Lazy => "Lazy",
            Personality::Peppy => "Peppy",
            Personality::Jock => "Jock",
            Personality::Snooty => "Snooty",
            Personality::Cranky => "Cranky",
            Personality::Smug => "Smug",
            Personality::Uchi => "Uchi",
        }
    }

    /// Parse an exact personality name as it appears in the dataset
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.name() == s)
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! species_enum {
    ($($variant:ident),+ $(,)?) => {
        /// Villager species
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum Species {
            $($variant),+
        }

        impl Species {
            pub const ALL: &'static [Species] = &[$(Species::$variant),+];

            pub fn name(&self) -> &'static str {
                match self {
                    $(Species::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

species_enum!(
    Alligator, Anteater, Bear, Bird, Bull, Cat, Chicken, Cow, Cub, Deer, Dog, Duck, Eagle,
    Elephant, Frog, Goat, Gorilla, Hamster, Hippo, Horse, Kangaroo, Koala, Lion, Monkey, Mouse,
    Octopus, Ostrich, Penguin, Pig, Rabbit, Rhino, Sheep, Squirrel, Tiger, Wolf,
);

impl Species {
    /// Parse an exact species name as it appears in the dataset
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|sp| sp.name() == s)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Western zodiac sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StarSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl StarSign {
    pub const ALL: [StarSign; 12] = [
        StarSign::Aries,
        StarSign::Taurus,
        StarSign::Gemini,
        StarSign::Cancer,
        StarSign::Leo,
        StarSign::Virgo,
        StarSign::Libra,
        StarSign::Scorpio,
        StarSign::Sagittarius,
        StarSign::Capricorn,
        StarSign::Aquarius,
        StarSign::Pisces,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StarSign::Aries => "Aries",
            StarSign::Taurus => "Taurus",
            StarSign::Gemini => "Gemini",
            StarSign::Cancer => "Cancer",
            StarSign::Leo => "Leo",
            StarSign::Virgo => "Virgo",
            StarSign::Libra => "Libra",
            StarSign::Scorpio => "Scorpio",
            StarSign::Sagittarius => "Sagittarius",
            StarSign::Capricorn => "Capricorn",
            StarSign::Aquarius => "Aquarius",
            StarSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for StarSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a single pairwise rule, best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityMark {
    Heart,
    Diamond,
    Clover,
    Cross,
}

impl CompatibilityMark {
    pub const ALL: [CompatibilityMark; 4] = [
        CompatibilityMark::Heart,
        CompatibilityMark::Diamond,
        CompatibilityMark::Clover,
        CompatibilityMark::Cross,
    ];

    /// The card-suit symbol used in the bundled data and in rendered output
    pub fn symbol(&self) -> &'static str {
        match self {
            CompatibilityMark::Heart => "♥",
            CompatibilityMark::Diamond => "♦",
            CompatibilityMark::Clover => "♣",
            CompatibilityMark::Cross => "×",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.symbol() == symbol)
    }
}

impl fmt::Display for CompatibilityMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Aggregate outcome for a villager pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityVerdict {
    Good,
    Average,
    Bad,
}

impl CompatibilityVerdict {
    pub fn label(&self) -> &'static str {
        match self {
            CompatibilityVerdict::Good => "Good",
            CompatibilityVerdict::Average => "Average",
            CompatibilityVerdict::Bad => "Bad",
        }
    }
}

impl fmt::Display for CompatibilityVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A calendar birthday without a year
///
/// Always a real date in [`REFERENCE_YEAR`]; deserialization goes through
/// the same check as [`Birthday::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BirthdayParts")]
pub struct Birthday {
    month: u32,
    day: u32,
}

#[derive(Deserialize)]
struct BirthdayParts {
    month: u32,
    day: u32,
}

impl TryFrom<BirthdayParts> for Birthday {
    type Error = CompatError;

    fn try_from(parts: BirthdayParts) -> Result<Self, Self::Error> {
        Birthday::new(parts.month, parts.day).ok_or(CompatError::InvalidDate {
            month: parts.month,
            day: parts.day,
        })
    }
}

impl Birthday {
    /// Create a birthday, rejecting dates that do not exist in [`REFERENCE_YEAR`]
    pub fn new(month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, day).map(|_| Self { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.day)
    }
}

/// A villager as seen by the scoring core
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subject {
    /// Stable dataset identifier
    pub id: String,
    /// Display name (several villagers may share one)
    pub name: String,
    pub species: Option<Species>,
    pub personality: Option<Personality>,
    pub birthday: Option<Birthday>,
}

/// The three attributes scoring needs, present only for complete subjects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub species: Species,
    pub personality: Personality,
    pub birthday: Birthday,
}

impl Subject {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            species: None,
            personality: None,
            birthday: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_species(mut self, species: Species) -> Self {
        self.species = Some(species);
        self
    }

    pub fn with_personality(mut self, personality: Personality) -> Self {
        self.personality = Some(personality);
        self
    }

    pub fn with_birthday(mut self, birthday: Birthday) -> Self {
        self.birthday = Some(birthday);
        self
    }

    /// Species, personality and birthday, or `None` if any is missing
    pub fn profile(&self) -> Option<Profile> {
        Some(Profile {
            species: self.species?,
            personality: self.personality?,
            birthday: self.birthday?,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.profile().is_some()
    }
}
