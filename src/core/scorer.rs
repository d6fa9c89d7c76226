//! Verdict aggregation
//!
//! Three marks (personality, species, star sign) collapse into one verdict.
//! Only the counts of each mark matter, not their order:
//!
//! - Good: two or more ♥, or ♥♦♣, or ♥♦♦
//! - Bad: two or more ×
//! - Average: anything else

use crate::core::error::{CompatError, Result};
use crate::core::models::{CompatibilityMark, CompatibilityVerdict};
use serde::Serialize;

/// The three rule marks for one villager pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PairScore {
    pub personality: CompatibilityMark,
    pub species: CompatibilityMark,
    pub star_sign: CompatibilityMark,
}

impl PairScore {
    /// Marks in scoring order: personality, species, star sign
    pub fn marks(&self) -> [CompatibilityMark; 3] {
        [self.personality, self.species, self.star_sign]
    }

    pub fn verdict(&self) -> CompatibilityVerdict {
        PairwiseScorer::judge(&self.marks())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct MarkCounts {
    heart: usize,
    diamond: usize,
    clover: usize,
    cross: usize,
}

impl MarkCounts {
    fn tally(marks: &[CompatibilityMark]) -> Self {
        marks.iter().fold(Self::default(), |mut counts, mark| {
            match mark {
                CompatibilityMark::Heart => counts.heart += 1,
                CompatibilityMark::Diamond => counts.diamond += 1,
                CompatibilityMark::Clover => counts.clover += 1,
                CompatibilityMark::Cross => counts.cross += 1,
            }
            counts
        })
    }
}

/// Combines rule marks into a [`CompatibilityVerdict`]
pub struct PairwiseScorer;

impl PairwiseScorer {
    /// Verdict for exactly three marks.
    ///
    /// Returns [`CompatError::InvalidInput`] for any other count.
    pub fn evaluate(marks: &[CompatibilityMark]) -> Result<CompatibilityVerdict> {
        if marks.len() != 3 {
            return Err(CompatError::InvalidInput { count: marks.len() });
        }
        Ok(Self::judge(marks))
    }

    fn judge(marks: &[CompatibilityMark]) -> CompatibilityVerdict {
        let c = MarkCounts::tally(marks);
        // Good is checked first and wins over Bad.
        if c.heart >= 2
            || (c.heart == 1 && c.diamond == 1 && c.clover == 1)
            || (c.heart == 1 && c.diamond == 2)
        {
            CompatibilityVerdict::Good
        } else if c.cross >= 2 {
            CompatibilityVerdict::Bad
        } else {
            CompatibilityVerdict::Average
        }
    }
}
