//! Week grid model

use std::collections::BTreeMap;

use lifeweeks_core::WEEKS_PER_YEAR;
use serde::Serialize;

use crate::{WeekCell, WeekState};

/// A titled marker pinned to one week of life
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub title: String,
    /// Zero-based week of life
    pub week: u64,
}

impl Milestone {
    pub fn new(title: impl Into<String>, week: u64) -> Self {
        Milestone {
            title: title.into(),
            week,
        }
    }
}

/// Number of cells in each state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WeekCounts {
    pub past: u64,
    pub current: u64,
    pub future: u64,
}

/// Grid of `total_weeks` cells laid out `columns` to a row
#[derive(Clone, Debug)]
pub struct WeekGrid {
    weeks_lived: u64,
    total_weeks: u64,
    columns: u32,
    milestones: BTreeMap<u64, Milestone>,
}

impl WeekGrid {
    /// One row per year of 52 weeks
    pub fn new(weeks_lived: u64, total_weeks: u64) -> Self {
        WeekGrid {
            weeks_lived,
            total_weeks,
            columns: WEEKS_PER_YEAR,
            milestones: BTreeMap::new(),
        }
    }

    pub fn for_life_expectancy(weeks_lived: u64, life_expectancy_years: u32) -> Self {
        Self::new(
            weeks_lived,
            u64::from(life_expectancy_years) * u64::from(WEEKS_PER_YEAR),
        )
    }

    /// Add milestones, ignoring any that fall outside the grid
    pub fn with_milestones(mut self, milestones: impl IntoIterator<Item = Milestone>) -> Self {
        for milestone in milestones {
            self.add_milestone(milestone);
        }
        self
    }

    /// Pin a milestone; returns `false` when its week is outside the grid.
    /// A later milestone on the same week replaces the earlier one.
    pub fn add_milestone(&mut self, milestone: Milestone) -> bool {
        if milestone.week >= self.total_weeks {
            tracing::debug!(
                week = milestone.week,
                total_weeks = self.total_weeks,
                title = %milestone.title,
                "milestone outside grid ignored"
            );
            return false;
        }
        self.milestones.insert(milestone.week, milestone);
        true
    }

    #[inline]
    pub fn weeks_lived(&self) -> u64 {
        self.weeks_lived
    }

    #[inline]
    pub fn total_weeks(&self) -> u64 {
        self.total_weeks
    }

    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Rows needed to hold every week; the last row may be partial.
    /// Saturates at `u32::MAX` for horizons too large to address.
    pub fn row_count(&self) -> u32 {
        u32::try_from(self.total_weeks.div_ceil(u64::from(self.columns))).unwrap_or(u32::MAX)
    }

    /// The current week, or `None` once the horizon has been passed
    pub fn current_week(&self) -> Option<u64> {
        (self.weeks_lived < self.total_weeks).then_some(self.weeks_lived)
    }

    pub fn state_of(&self, week: u64) -> Option<WeekState> {
        (week < self.total_weeks).then(|| WeekState::classify(week, self.weeks_lived))
    }

    pub fn milestone_at(&self, week: u64) -> Option<&Milestone> {
        self.milestones.get(&week)
    }

    pub fn milestones(&self) -> impl Iterator<Item = &Milestone> {
        self.milestones.values()
    }

    pub fn cell(&self, row: u32, column: u32) -> Option<WeekCell> {
        if column >= self.columns {
            return None;
        }
        let week = u64::from(row) * u64::from(self.columns) + u64::from(column);
        let state = self.state_of(week)?;
        Some(WeekCell {
            week,
            row,
            column,
            state,
            has_milestone: self.milestones.contains_key(&week),
        })
    }

    /// Cells of one row, left to right
    pub fn row_cells(&self, row: u32) -> impl Iterator<Item = WeekCell> + '_ {
        (0..self.columns).map_while(move |column| self.cell(row, column))
    }

    /// Rows top to bottom, one year per row
    pub fn rows(&self) -> impl Iterator<Item = Vec<WeekCell>> + '_ {
        (0..self.row_count()).map(move |row| self.row_cells(row).collect())
    }

    /// Every cell in week order
    pub fn cells(&self) -> impl Iterator<Item = WeekCell> + '_ {
        (0..self.row_count()).flat_map(move |row| self.row_cells(row))
    }

    /// Counts per state without walking the cells
    pub fn counts(&self) -> WeekCounts {
        let past = self.weeks_lived.min(self.total_weeks);
        let current = u64::from(self.current_week().is_some());
        WeekCounts {
            past,
            current,
            future: self.total_weeks - past - current,
        }
    }

    /// "Week N: description" with a one-based week number
    pub fn hover_text(&self, week: u64) -> Option<String> {
        let state = self.state_of(week)?;
        let mut text = format!("Week {}: {}", week + 1, state.description());
        if let Some(milestone) = self.milestone_at(week) {
            text.push_str(" (");
            text.push_str(&milestone.title);
            text.push(')');
        }
        Some(text)
    }
}
