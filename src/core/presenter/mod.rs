//! Report Presenter Module
//!
//! Turns a [`CompatibilityMatrix`] into the two tables shown to the user, or
//! into a JSON document for scripting.
//!
//! - **Details table**: id, species, personality, birthday and star sign
//! - **Compatibility grid**: per pair, the species, personality and star
//!   sign marks followed by the verdict

pub mod symbol_formatter;
pub mod table;

pub use symbol_formatter::{Styled, SymbolFormatter, Theme};
pub use table::{TableStyle, TextTable};

use crate::core::config::{ColorMode, OutputFormat};
use crate::core::error::Result;
use crate::core::matrix::CompatibilityMatrix;
use crate::core::models::{
    CompatibilityMark, CompatibilityVerdict, Personality, Species, StarSign, Subject,
};
use serde::Serialize;
use std::io::IsTerminal;

const NOT_AVAILABLE: &str = "N/A";

pub const DETAILS_TITLE: &str = "Islander basic information:";
pub const GRID_TITLE: &str = "Islander compatibility (Species/Personality/StarSign | Result):";

impl ColorMode {
    /// Decide on a theme. `Auto` colours only when both stdout and stderr
    /// are terminals.
    pub fn theme(self) -> Theme {
        match self {
            ColorMode::Always => Theme::Color,
            ColorMode::Never => Theme::Plain,
            ColorMode::Auto => {
                if std::io::stdout().is_terminal() && std::io::stderr().is_terminal() {
                    Theme::Color
                } else {
                    Theme::Plain
                }
            }
        }
    }
}

// =============================================================================
// JSON report
// =============================================================================

#[derive(Debug, Serialize)]
struct VillagerSummary<'a> {
    id: &'a str,
    name: &'a str,
    species: Option<Species>,
    personality: Option<Personality>,
    birthday: Option<String>,
    star_sign: Option<StarSign>,
}

#[derive(Debug, Serialize)]
struct CellSummary {
    personality: CompatibilityMark,
    species: CompatibilityMark,
    star_sign: CompatibilityMark,
    verdict: CompatibilityVerdict,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    villagers: Vec<VillagerSummary<'a>>,
    matrix: Vec<Vec<Option<CellSummary>>>,
}

// =============================================================================
// Report Presenter
// =============================================================================

/// Renders compatibility results
#[derive(Debug, Clone, Default)]
pub struct ReportPresenter {
    formatter: SymbolFormatter,
}

impl ReportPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.formatter = SymbolFormatter::new().with_theme(theme);
        self
    }

    /// Full report in the requested format
    pub fn render(&self, matrix: &CompatibilityMatrix, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(self.render_tables(matrix)),
            OutputFormat::Json => self.render_json(matrix),
        }
    }

    /// Both tables with their titles, separated by a blank line
    pub fn render_tables(&self, matrix: &CompatibilityMatrix) -> String {
        let mut out = String::new();
        out.push_str(DETAILS_TITLE);
        out.push('\n');
        out.push_str(&self.details_table(matrix.subjects()));
        out.push('\n');
        out.push_str(GRID_TITLE);
        out.push('\n');
        out.push_str(&self.compatibility_grid(matrix));
        out
    }

    /// Details table. Missing fields show as `N/A`.
    pub fn details_table(&self, subjects: &[Subject]) -> String {
        let mut table = TextTable::new(
            TableStyle::Psql,
            ["Id", "Species", "Personality", "Birthday", "Star Sign"],
        );
        for subject in subjects {
            let star_sign = subject.birthday.and_then(|b| b.star_sign().ok());
            table.push_row(vec![
                Styled::plain(subject.id.as_str()),
                or_na(subject.species.map(|s| s.to_string())),
                or_na(subject.personality.map(|p| p.to_string())),
                or_na(subject.birthday.map(|b| b.to_string())),
                or_na(star_sign.map(|s| s.to_string())),
            ]);
        }
        table.render()
    }

    /// Grid of `<species><personality><star sign> | <verdict>` cells
    pub fn compatibility_grid(&self, matrix: &CompatibilityMatrix) -> String {
        let header = std::iter::once(String::new()).chain(matrix.ids().map(str::to_string));
        let mut table = TextTable::new(TableStyle::FancyGrid, header);

        for (i, subject) in matrix.subjects().iter().enumerate() {
            let mut row = vec![Styled::plain(subject.id.as_str())];
            for j in 0..matrix.len() {
                let cell = match matrix.get(i, j) {
                    Some(score) => {
                        let mut cell = Styled::default();
                        for mark in [score.species, score.personality, score.star_sign] {
                            cell.push(&self.formatter.mark(mark));
                        }
                        cell.push_str(" | ");
                        cell.push(&self.formatter.verdict(score.verdict()));
                        cell
                    }
                    None => Styled::plain(NOT_AVAILABLE),
                };
                row.push(cell);
            }
            table.push_row(row);
        }
        table.render()
    }

    /// Machine-readable report; absent cells are `null`
    pub fn render_json(&self, matrix: &CompatibilityMatrix) -> Result<String> {
        let villagers = matrix
            .subjects()
            .iter()
            .map(|s| VillagerSummary {
                id: &s.id,
                name: &s.name,
                species: s.species,
                personality: s.personality,
                birthday: s.birthday.map(|b| b.to_string()),
                star_sign: s.birthday.and_then(|b| b.star_sign().ok()),
            })
            .collect();

        let cells = (0..matrix.len())
            .map(|i| {
                (0..matrix.len())
                    .map(|j| {
                        matrix.get(i, j).map(|score| CellSummary {
                            personality: score.personality,
                            species: score.species,
                            star_sign: score.star_sign,
                            verdict: score.verdict(),
                        })
                    })
                    .collect()
            })
            .collect();

        let report = Report {
            villagers,
            matrix: cells,
        };
        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        Ok(json)
    }
}

fn or_na(value: Option<String>) -> Styled {
    Styled::plain(value.unwrap_or_else(|| NOT_AVAILABLE.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::VillagerDataset;
    use crate::core::matrix::CompatibilityMatrixBuilder;
    use crate::core::rules::RuleSet;

    fn matrix(ids: &[&str]) -> CompatibilityMatrix {
        let rules = RuleSet::bundled().unwrap();
        let dataset = VillagerDataset::bundled().unwrap();
        CompatibilityMatrixBuilder::new(&rules)
            .build(ids, &dataset)
            .unwrap()
    }

    #[test]
    fn test_details_table_rows() {
        let presenter = ReportPresenter::new();
        let m = matrix(&["Ace", "Verdun"]);
        let tables = presenter.render_tables(&m);

        assert!(tables.starts_with(DETAILS_TITLE));
        assert!(tables.contains(GRID_TITLE));
        assert!(tables.contains("| Ace    | Bird    | Jock        | 3/13     | Pisces    |"));
        assert!(tables.contains("| Verdun | Bull    | Lazy        | N/A      | N/A       |"));
    }

    #[test]
    fn test_details_table_partial_subject() {
        let presenter = ReportPresenter::new();
        let glitch = Subject::new("Glitch").with_personality(Personality::Smug);
        let table = presenter.details_table(&[glitch]);
        assert!(table.contains("| Glitch | N/A     | Smug        | N/A      | N/A       |"));
    }

    #[test]
    fn test_grid_cells() {
        let presenter = ReportPresenter::new();
        // Alice: Koala Normal Leo. Bob: Cat Lazy Capricorn.
        let m = matrix(&["Alice", "Bob", "Verdun"]);
        let grid = presenter.compatibility_grid(&m);

        assert!(grid.contains("♣♥♦ | Good"));
        assert!(grid.contains("♦♦♥ | Good"));
        assert!(grid.contains("N/A"));
        assert!(grid.starts_with("╒"));
        assert!(!grid.contains('\x1b'));
    }

    #[test]
    fn test_color_theme_grid() {
        let presenter = ReportPresenter::new().with_theme(Theme::Color);
        let m = matrix(&["Alice", "Bob"]);
        let grid = presenter.compatibility_grid(&m);
        assert!(grid.contains("\x1b[32mGood\x1b[0m"));
        // Column rules line up despite escape codes
        let widths: Vec<usize> = grid
            .lines()
            .filter(|l| l.starts_with('├') || l.starts_with('╒'))
            .map(|l| l.chars().count())
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_json_report() {
        let presenter = ReportPresenter::new();
        let m = matrix(&["Alice", "Verdun"]);
        let json = presenter.render(&m, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["villagers"][0]["id"], "Alice");
        assert_eq!(value["villagers"][0]["star_sign"], "Leo");
        assert_eq!(value["villagers"][1]["birthday"], serde_json::Value::Null);
        assert_eq!(value["matrix"][0][0]["verdict"], "good");
        assert_eq!(value["matrix"][0][0]["species"], "diamond");
        assert!(value["matrix"][0][1].is_null());
        assert!(value["matrix"][1][1].is_null());
    }

    #[test]
    fn test_color_mode_explicit() {
        assert_eq!(ColorMode::Always.theme(), Theme::Color);
        assert_eq!(ColorMode::Never.theme(), Theme::Plain);
    }
}
