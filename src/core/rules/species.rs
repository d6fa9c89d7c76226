//! Species compatibility rule list
//!
//! Rules are evaluated top to bottom and the first match wins. The list ends
//! with an unconditional entry, so every pair gets a mark.

use super::PairRule;
use crate::core::models::{CompatibilityMark, Species};

/// Predicate over an unordered species pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairMatcher {
    /// Both villagers share a species
    Identical,
    /// The pair is one of these, in either order
    AnyOf(&'static [(Species, Species)]),
    /// Matches every pair
    Always,
}

impl PairMatcher {
    pub fn matches(&self, a: Species, b: Species) -> bool {
        match self {
            PairMatcher::Identical => a == b,
            PairMatcher::AnyOf(pairs) => pairs
                .iter()
                .any(|&(x, y)| (x == a && y == b) || (x == b && y == a)),
            PairMatcher::Always => true,
        }
    }
}

/// One entry of the decision list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesRule {
    pub matchers: Vec<PairMatcher>,
    pub mark: CompatibilityMark,
}

impl SpeciesRule {
    pub fn new(matchers: Vec<PairMatcher>, mark: CompatibilityMark) -> Self {
        Self { matchers, mark }
    }

    pub fn matches(&self, a: Species, b: Species) -> bool {
        self.matchers.iter().any(|m| m.matches(a, b))
    }
}

const NATURAL_PAIRS: &[(Species, Species)] = &[
    (Species::Bear, Species::Cub),
    (Species::Bull, Species::Cow),
    (Species::Cat, Species::Tiger),
    (Species::Dog, Species::Wolf),
    (Species::Goat, Species::Sheep),
    (Species::Kangaroo, Species::Koala),
];

const SIMILAR_PAIRS: &[(Species, Species)] = &[
    (Species::Deer, Species::Horse),
    (Species::Hamster, Species::Squirrel),
    (Species::Hamster, Species::Mouse),
    (Species::Mouse, Species::Squirrel),
];

const NATURAL_ENEMIES: &[(Species, Species)] = &[
    (Species::Cat, Species::Mouse),
    (Species::Cat, Species::Hamster),
    (Species::Dog, Species::Gorilla),
    (Species::Dog, Species::Monkey),
    (Species::Sheep, Species::Wolf),
];

/// Ordered species decision list
#[derive(Debug, Clone)]
pub struct SpeciesRules {
    rules: Vec<SpeciesRule>,
}

impl Default for SpeciesRules {
    fn default() -> Self {
        Self::new(vec![
            SpeciesRule::new(vec![PairMatcher::AnyOf(NATURAL_PAIRS)], CompatibilityMark::Heart),
            SpeciesRule::new(
                vec![PairMatcher::Identical, PairMatcher::AnyOf(SIMILAR_PAIRS)],
                CompatibilityMark::Diamond,
            ),
            SpeciesRule::new(vec![PairMatcher::AnyOf(NATURAL_ENEMIES)], CompatibilityMark::Cross),
        ])
    }
}

impl SpeciesRules {
    /// Build a decision list; a `Clover` catch-all is appended if the last
    /// rule is not already unconditional.
    pub fn new(mut rules: Vec<SpeciesRule>) -> Self {
        let has_default = rules
            .last()
            .map(|r| r.matchers.contains(&PairMatcher::Always))
            .unwrap_or(false);
        if !has_default {
            rules.push(SpeciesRule::new(vec![PairMatcher::Always], CompatibilityMark::Clover));
        }
        Self { rules }
    }

    pub fn rules(&self) -> &[SpeciesRule] {
        &self.rules
    }
}

impl PairRule<Species> for SpeciesRules {
    /// Mark of the first matching rule.
    ///
    /// # Panics
    ///
    /// Never in practice: [`SpeciesRules::new`] ends every list with an
    /// unconditional rule.
    fn score(&self, a: Species, b: Species) -> CompatibilityMark {
        self.rules
            .iter()
            .find(|rule| rule.matches(a, b))
            .map(|rule| rule.mark)
            .expect("species rules end with an unconditional entry")
    }
}
