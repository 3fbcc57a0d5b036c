//! Week cell state

use serde::Serialize;

/// Position of a week relative to the current one
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekState {
    Past,
    Current,
    Future,
}

impl WeekState {
    pub const ALL: [WeekState; 3] = [WeekState::Past, WeekState::Current, WeekState::Future];

    /// Classify week `week` given how many weeks have been lived
    #[inline]
    pub fn classify(week: u64, weeks_lived: u64) -> Self {
        use std::cmp::Ordering::*;
        match week.cmp(&weeks_lived) {
            Less => WeekState::Past,
            Equal => WeekState::Current,
            Greater => WeekState::Future,
        }
    }

    /// Hover description
    pub fn description(self) -> &'static str {
        match self {
            WeekState::Past => "A week from your past",
            WeekState::Current => "Your current week",
            WeekState::Future => "A week in your potential future",
        }
    }

    /// Legend label
    pub fn label(self) -> &'static str {
        match self {
            WeekState::Past => "Past",
            WeekState::Current => "Present",
            WeekState::Future => "Future",
        }
    }
}

/// One week on the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WeekCell {
    /// Zero-based week of life
    pub week: u64,
    pub row: u32,
    pub column: u32,
    pub state: WeekState,
    pub has_milestone: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(WeekState::classify(0, 10), WeekState::Past);
        assert_eq!(WeekState::classify(9, 10), WeekState::Past);
        assert_eq!(WeekState::classify(10, 10), WeekState::Current);
        assert_eq!(WeekState::classify(11, 10), WeekState::Future);
    }

    #[test]
    fn test_first_week_is_current_at_birth() {
        assert_eq!(WeekState::classify(0, 0), WeekState::Current);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = WeekState::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Past", "Present", "Future"]);
    }
}
