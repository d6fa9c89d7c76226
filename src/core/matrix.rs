//! Compatibility matrix construction
//!
//! Scores every ordered pair of requested villagers, diagonal included. A
//! missing villager aborts the whole build; an incomplete villager only
//! blanks the cells it takes part in.

use crate::core::error::{CompatError, Result, ResultExt};
use crate::core::models::{CompatibilityVerdict, StarSign, Subject};
use crate::core::rules::RuleSet;
use crate::core::scorer::PairScore;

#[cfg(test)]
use mockall::automock;

/// Looks up villagers by identifier
///
/// This trait allows for mocking in tests and alternative data sources.
#[cfg_attr(test, automock)]
pub trait SubjectResolver {
    /// The villager with this id, or `None` if the id is unknown
    fn resolve(&self, id: &str) -> Option<Subject>;
}

/// N×N grid of pair scores in request order
#[derive(Debug, Clone, PartialEq)]
pub struct CompatibilityMatrix {
    subjects: Vec<Subject>,
    cells: Vec<Vec<Option<PairScore>>>,
}

impl CompatibilityMatrix {
    /// Resolved villagers, in request order
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.subjects.iter().map(|s| s.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Score for row `i`, column `j`; `None` if either villager is
    /// incomplete or the indices are out of range
    pub fn get(&self, i: usize, j: usize) -> Option<&PairScore> {
        self.cells.get(i)?.get(j)?.as_ref()
    }

    pub fn verdict(&self, i: usize, j: usize) -> Option<CompatibilityVerdict> {
        self.get(i, j).map(PairScore::verdict)
    }

    pub fn row(&self, i: usize) -> Option<&[Option<PairScore>]> {
        self.cells.get(i).map(Vec::as_slice)
    }

    /// Star sign of the villager in row `i`, if it has a birthday
    pub fn star_sign(&self, i: usize) -> Option<StarSign> {
        self.subjects.get(i)?.birthday?.star_sign().ok()
    }
}

/// Builds a [`CompatibilityMatrix`] using one rule set
pub struct CompatibilityMatrixBuilder<'a> {
    rules: &'a RuleSet,
}

impl<'a> CompatibilityMatrixBuilder<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    /// Resolve `ids` through `resolver` and score every pair.
    ///
    /// Fails with [`CompatError::SubjectNotFound`] (1-based position) for the
    /// first id the resolver does not know, before any scoring happens.
    pub fn build<S, R>(&self, ids: &[S], resolver: &R) -> Result<CompatibilityMatrix>
    where
        S: AsRef<str>,
        R: SubjectResolver + ?Sized,
    {
        let subjects = ids
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let id = id.as_ref();
                resolver.resolve(id).ok_or_else(|| CompatError::SubjectNotFound {
                    position: i + 1,
                    id: id.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let profiles: Vec<_> = subjects.iter().map(Subject::profile).collect();
        let incomplete = profiles.iter().filter(|p| p.is_none()).count();

        let mut cells = Vec::with_capacity(profiles.len());
        for (i, row_profile) in profiles.iter().enumerate() {
            let mut row = Vec::with_capacity(profiles.len());
            for col_profile in &profiles {
                let cell = match (row_profile, col_profile) {
                    (Some(a), Some(b)) => Some(
                        self.rules
                            .score(a, b)
                            .context(format!("scoring '{}'", subjects[i].id))?,
                    ),
                    _ => None,
                };
                row.push(cell);
            }
            cells.push(row);
        }

        tracing::debug!(
            villagers = subjects.len(),
            incomplete,
            "compatibility matrix built"
        );

        Ok(CompatibilityMatrix { subjects, cells })
    }
}
