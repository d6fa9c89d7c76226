//! Star sign compatibility by group
//!
//! The twelve signs fall into four groups of three. Signs in the same group
//! get on best; two particular group pairings clash; everything else is
//! friendly. The group table is kept as literal data.

use super::PairRule;
use crate::core::models::{CompatibilityMark, StarSign};

/// One of the four star sign groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StarSignGroup(usize);

impl StarSignGroup {
    pub fn of(sign: StarSign) -> Self {
        let index = match sign {
            StarSign::Aries | StarSign::Leo | StarSign::Sagittarius => 0,
            StarSign::Taurus | StarSign::Virgo | StarSign::Capricorn => 1,
            StarSign::Gemini | StarSign::Libra | StarSign::Aquarius => 2,
            StarSign::Cancer | StarSign::Scorpio | StarSign::Pisces => 3,
        };
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

use crate::core::models::CompatibilityMark::{Cross as X, Diamond as D, Heart as H};

/// Mark for each (group, group) combination
const GROUP_MARKS: [[CompatibilityMark; 4]; 4] = [
    [H, D, D, X],
    [D, H, X, D],
    [D, X, H, D],
    [X, D, D, H],
];

/// Star sign group rule
#[derive(Debug, Clone, Default)]
pub struct StarSignRules;

impl PairRule<StarSign> for StarSignRules {
    fn score(&self, a: StarSign, b: StarSign) -> CompatibilityMark {
        GROUP_MARKS[StarSignGroup::of(a).index()][StarSignGroup::of(b).index()]
    }
}
