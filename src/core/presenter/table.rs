//! Plain-text table layout
//!
//! Two border styles: `Psql` (ASCII, used for the details table) and
//! `FancyGrid` (box drawing with a rule between every row, used for the
//! compatibility grid). Cells are left aligned with one space of padding.

use super::symbol_formatter::Styled;

/// Border style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStyle {
    Psql,
    FancyGrid,
}

struct Borders {
    top: [&'static str; 4],
    header_rule: [&'static str; 4],
    row_rule: Option<[&'static str; 4]>,
    bottom: [&'static str; 4],
    vertical: [&'static str; 3],
}

// [left, fill, junction, right]
const PSQL: Borders = Borders {
    top: ["+", "-", "+", "+"],
    header_rule: ["|", "-", "+", "|"],
    row_rule: None,
    bottom: ["+", "-", "+", "+"],
    vertical: ["|", "|", "|"],
};

const FANCY_GRID: Borders = Borders {
    top: ["╒", "═", "╤", "╕"],
    header_rule: ["╞", "═", "╪", "╡"],
    row_rule: Some(["├", "─", "┼", "┤"]),
    bottom: ["╘", "═", "╧", "╛"],
    vertical: ["│", "│", "│"],
};

/// A header row plus body rows of styled cells
#[derive(Debug, Clone)]
pub struct TextTable {
    style: TableStyle,
    header: Vec<Styled>,
    rows: Vec<Vec<Styled>>,
}

impl TextTable {
    pub fn new<I, S>(style: TableStyle, header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            style,
            header: header.into_iter().map(Styled::plain).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Styled>) {
        self.rows.push(row);
    }

    fn borders(&self) -> &'static Borders {
        match self.style {
            TableStyle::Psql => &PSQL,
            TableStyle::FancyGrid => &FANCY_GRID,
        }
    }

    fn column_widths(&self) -> Vec<usize> {
        let columns = self
            .rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0);
        (0..columns)
            .map(|c| {
                std::iter::once(&self.header)
                    .chain(self.rows.iter())
                    .filter_map(|row| row.get(c))
                    .map(|cell| cell.width)
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn rule(widths: &[usize], [left, fill, junction, right]: [&str; 4]) -> String {
        let segments: Vec<String> = widths.iter().map(|w| fill.repeat(w + 2)).collect();
        format!("{}{}{}\n", left, segments.join(junction), right)
    }

    fn line(widths: &[usize], cells: &[Styled], [left, inner, right]: [&str; 3]) -> String {
        let empty = Styled::default();
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(c, width)| {
                let cell = cells.get(c).unwrap_or(&empty);
                format!(" {}{} ", cell.text, " ".repeat(width - cell.width))
            })
            .collect();
        format!("{}{}{}\n", left, padded.join(inner), right)
    }

    /// Render the table; every line ends with a newline
    pub fn render(&self) -> String {
        let borders = self.borders();
        let widths = self.column_widths();
        let mut out = String::new();

        out.push_str(&Self::rule(&widths, borders.top));
        out.push_str(&Self::line(&widths, &self.header, borders.vertical));
        out.push_str(&Self::rule(&widths, borders.header_rule));
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                if let Some(rule) = borders.row_rule {
                    out.push_str(&Self::rule(&widths, rule));
                }
            }
            out.push_str(&Self::line(&widths, row, borders.vertical));
        }
        out.push_str(&Self::rule(&widths, borders.bottom));
        out
    }
}
