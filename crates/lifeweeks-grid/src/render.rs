//! Text rendering of the week grid

use crate::{WeekCell, WeekGrid, WeekState};

/// Renderer configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub past: char,
    pub current: char,
    pub future: char,
    /// Drawn instead of the state glyph on milestone weeks
    pub milestone: char,

    /// Label every Nth row with the age it starts at; `None` disables labels
    pub year_label_every: Option<u32>,

    /// Append a legend line
    pub legend: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            past: '■',
            current: '◆',
            future: '□',
            milestone: '★',
            year_label_every: Some(5),
            legend: true,
        }
    }
}

impl RenderConfig {
    /// Plain ASCII glyphs for terminals without box characters
    pub fn ascii() -> Self {
        Self {
            past: '#',
            current: '@',
            future: '.',
            milestone: '*',
            ..Default::default()
        }
    }

    /// Bare grid rows only
    pub fn compact() -> Self {
        Self {
            year_label_every: None,
            legend: false,
            ..Default::default()
        }
    }
}

/// Draws a [`WeekGrid`] one row per line
#[derive(Debug, Clone, Default)]
pub struct GridRenderer {
    config: RenderConfig,
}

impl GridRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn glyph(&self, cell: &WeekCell) -> char {
        if cell.has_milestone {
            return self.config.milestone;
        }
        self.state_glyph(cell.state)
    }

    fn state_glyph(&self, state: WeekState) -> char {
        match state {
            WeekState::Past => self.config.past,
            WeekState::Current => self.config.current,
            WeekState::Future => self.config.future,
        }
    }

    fn label_width(&self, grid: &WeekGrid) -> usize {
        grid.row_count().saturating_sub(1).to_string().len()
    }

    /// Row text including its year label column, if enabled
    pub fn render_row(&self, grid: &WeekGrid, row: u32) -> String {
        let mut line = String::new();

        if let Some(every) = self.config.year_label_every.filter(|n| *n > 0) {
            let width = self.label_width(grid);
            if row % every == 0 {
                line.push_str(&format!("{row:>width$} "));
            } else {
                line.push_str(&" ".repeat(width + 1));
            }
        }

        line.extend(grid.row_cells(row).map(|cell| self.glyph(&cell)));
        line
    }

    pub fn legend(&self) -> String {
        let mut parts: Vec<String> = WeekState::ALL
            .iter()
            .map(|state| format!("{} {}", self.state_glyph(*state), state.label()))
            .collect();
        parts.push(format!("{} Milestone", self.config.milestone));
        parts.join("  ")
    }

    pub fn render(&self, grid: &WeekGrid) -> String {
        let mut lines: Vec<String> = (0..grid.row_count())
            .map(|row| self.render_row(grid, row))
            .collect();

        if self.config.legend {
            lines.push(String::new());
            lines.push(self.legend());
        }

        lines.join("\n")
    }
}
