//! Symbol Formatter Module
//!
//! Renders marks and verdicts either as plain symbols or wrapped in ANSI
//! colours. Every rendered piece carries its visible width so tables can
//! pad without counting escape codes.

use crate::core::models::{CompatibilityMark, CompatibilityVerdict};

// =============================================================================
// Theme
// =============================================================================

/// Visual theme for terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// ANSI colours
    Color,
    /// Bare symbols (default; safe for pipes and files)
    #[default]
    Plain,
}

// =============================================================================
// Styled text
// =============================================================================

/// Text plus the number of terminal columns it occupies
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Styled {
    pub text: String,
    pub width: usize,
}

impl Styled {
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        let width = text.chars().count();
        Self { text, width }
    }

    fn painted(text: &str, sgr: &str) -> Self {
        Self {
            text: format!("\x1b[{}m{}\x1b[0m", sgr, text),
            width: text.chars().count(),
        }
    }

    /// Append another piece, keeping the width in step
    pub fn push(&mut self, other: &Styled) {
        self.text.push_str(&other.text);
        self.width += other.width;
    }

    pub fn push_str(&mut self, s: &str) {
        self.push(&Styled::plain(s));
    }
}

// =============================================================================
// Symbol Formatter
// =============================================================================

/// Formats compatibility marks and verdicts for the active theme.
#[derive(Debug, Clone, Default)]
pub struct SymbolFormatter {
    theme: Theme,
}

impl SymbolFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn mark(&self, mark: CompatibilityMark) -> Styled {
        match self.theme {
            Theme::Plain => Styled::plain(mark.symbol()),
            Theme::Color => {
                let sgr = match mark {
                    CompatibilityMark::Heart => "30;102",   // green
                    CompatibilityMark::Diamond => "30;106", // cyan
                    CompatibilityMark::Clover => "30;103",  // yellow
                    CompatibilityMark::Cross => "30;101",   // red
                };
                Styled::painted(mark.symbol(), sgr)
            }
        }
    }

    pub fn verdict(&self, verdict: CompatibilityVerdict) -> Styled {
        match self.theme {
            Theme::Plain => Styled::plain(verdict.label()),
            Theme::Color => {
                let sgr = match verdict {
                    CompatibilityVerdict::Good => "32",
                    CompatibilityVerdict::Average => "33",
                    CompatibilityVerdict::Bad => "31",
                };
                Styled::painted(verdict.label(), sgr)
            }
        }
    }
}
