//! Pairwise compatibility rules
//!
//! Three independent rules each turn a pair of categorical values into a
//! [`CompatibilityMark`]:
//!
//! - `personality`: lookup table loaded from bundled JSON
//! - `species`: ordered first-match-wins rule list
//! - `zodiac`: star sign group relationships
//!
//! Every rule is symmetric. [`RuleSet`] bundles the three so the matrix
//! builder can score a pair of complete profiles in one call.

pub mod personality;
pub mod species;
pub mod zodiac;

pub use personality::{PersonalityPair, PersonalityTable};
pub use species::{PairMatcher, SpeciesRule, SpeciesRules};
pub use zodiac::{StarSignGroup, StarSignRules};

use crate::core::error::Result;
use crate::core::models::{CompatibilityMark, Profile};
use crate::core::scorer::PairScore;

/// A symmetric scoring rule over one category
pub trait PairRule<T: Copy> {
    /// Mark for the pair; `score(a, b) == score(b, a)`
    fn score(&self, a: T, b: T) -> CompatibilityMark;
}

/// The three rules, immutable once built
#[derive(Debug, Clone)]
pub struct RuleSet {
    personality: PersonalityTable,
    species: SpeciesRules,
    star_sign: StarSignRules,
}

impl RuleSet {
    /// Combine a loaded personality table with the fixed species and star sign rules
    pub fn new(personality: PersonalityTable) -> Self {
        Self {
            personality,
            species: SpeciesRules::default(),
            star_sign: StarSignRules::default(),
        }
    }

    /// Rule set backed by the bundled personality table
    pub fn bundled() -> Result<Self> {
        Ok(Self::new(PersonalityTable::bundled()?))
    }

    pub fn personality(&self) -> &PersonalityTable {
        &self.personality
    }

    pub fn species(&self) -> &SpeciesRules {
        &self.species
    }

    pub fn star_sign(&self) -> &StarSignRules {
        &self.star_sign
    }

    /// Score two complete profiles.
    ///
    /// Fails only if a birthday cannot be classified into a star sign.
    pub fn score(&self, a: &Profile, b: &Profile) -> Result<PairScore> {
        let sign_a = a.birthday.star_sign()?;
        let sign_b = b.birthday.star_sign()?;
        Ok(PairScore {
            personality: self.personality.score(a.personality, b.personality),
            species: self.species.score(a.species, b.species),
            star_sign: self.star_sign.score(sign_a, sign_b),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Birthday, Personality, Species, Subject};

    fn profile(species: Species, personality: Personality, month: u32, day: u32) -> Profile {
        Subject::new("x")
            .with_species(species)
            .with_personality(personality)
            .with_birthday(Birthday::new(month, day).unwrap())
            .profile()
            .unwrap()
    }

    #[test]
    fn test_rule_set_scores_all_three_categories() {
        let rules = RuleSet::bundled().unwrap();
        // Bear/Cub, Normal/Lazy, Leo/Sagittarius
        let a = profile(Species::Bear, Personality::Normal, 8, 1);
        let b = profile(Species::Cub, Personality::Lazy, 12, 1);
        let score = rules.score(&a, &b).unwrap();
        assert_eq!(score.species, CompatibilityMark::Heart);
        assert_eq!(score.personality, CompatibilityMark::Heart);
        assert_eq!(score.star_sign, CompatibilityMark::Heart);
    }

    #[test]
    fn test_rule_set_is_symmetric() {
        let rules = RuleSet::bundled().unwrap();
        let a = profile(Species::Cat, Personality::Snooty, 3, 24);
        let b = profile(Species::Mouse, Personality::Peppy, 7, 7);
        assert_eq!(rules.score(&a, &b).unwrap(), rules.score(&b, &a).unwrap());
    }
}
