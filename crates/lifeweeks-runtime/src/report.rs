//! Plain-text life report
//!
//! Prose is English; every number goes through the language's formatter.

use lifeweeks_core::{
    Language, INCOME_TARGET_PER_YEAR, LATE_STARTER_AGE, LIFETIME_PEOPLE_MET, MASTERY_HOURS,
    OBSERVABLE_UNIVERSE_DIAMETER_LY, SEQUOIA_LIFESPAN_YEARS, SLEEP_HOURS_PER_DAY,
    UNIVERSE_AGE_YEARS,
};
use lifeweeks_format::{
    age_from_birthdate, format_distance, format_number, format_percent, format_tiny_percent,
};
use lifeweeks_grid::{GridRenderer, WeekGrid};
use lifeweeks_stats::{
    income_breakdown, late_starter_age_at_mastery, mastery_stats, mastery_table, AllStats,
};

/// Weekly commitment quoted in the mastery summary line
const MASTERY_CONTEXT_HOURS_PER_WEEK: f64 = 10.0;

fn one_decimal(n: f64) -> f64 {
    (n * 10.0).round() / 10.0
}

struct Section {
    title: &'static str,
    lines: Vec<String>,
}

impl Section {
    fn new(title: &'static str) -> Self {
        Section {
            title,
            lines: Vec::new(),
        }
    }

    fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    fn lines(mut self, lines: impl IntoIterator<Item = String>) -> Self {
        self.lines.extend(lines);
        self
    }

    fn render(&self) -> String {
        let underline = "-".repeat(self.title.chars().count());
        let mut out = format!("{}\n{underline}", self.title);
        for line in &self.lines {
            out.push('\n');
            out.push_str(line);
        }
        out
    }
}

/// Text report over one [`AllStats`] snapshot
#[derive(Debug, Clone, Default)]
pub struct Report {
    renderer: GridRenderer,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_renderer(renderer: GridRenderer) -> Self {
        Report { renderer }
    }

    pub fn render(&self, stats: &AllStats, grid: &WeekGrid, lang: Language) -> String {
        let sections = [
            self.grid_section(stats, grid, lang),
            highlights(stats, lang),
            societal(stats, lang),
            cosmic(stats, lang),
            natural(stats, lang),
            weekly_time(stats, lang),
            mastery(stats, lang),
            opportunity(lang),
        ];

        sections
            .iter()
            .map(Section::render)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn grid_section(&self, stats: &AllStats, grid: &WeekGrid, lang: Language) -> Section {
        let n = |v: u64| format_number(v as f64, lang);
        let position = match grid.current_week() {
            Some(week) => format!(
                "Week {} of {}.",
                n(week + 1),
                n(grid.total_weeks())
            ),
            None => format!(
                "You have lived past all {} weeks of the grid.",
                n(grid.total_weeks())
            ),
        };

        Section::new("Your life in weeks")
            .line(self.renderer.render(grid))
            .line(String::new())
            .line(position)
            .line(format!(
                "You are {} old.",
                age_from_birthdate(&stats.birthdate, stats.computed_at, lang)
            ))
    }
}

fn highlights(stats: &AllStats, lang: Language) -> Section {
    let n = |v: u64| format_number(v as f64, lang);
    Section::new("Life highlights")
        .line(format!(
            "You've lived {} weeks, which is {} of a full life.",
            n(stats.life.weeks_lived),
            format_percent(stats.life.percent_lived, 1, lang)
        ))
        .line(format!(
            "That's {} days of experience and approximately {} seasons observed.",
            n(stats.life.days_lived),
            n(stats.natural.seasons)
        ))
        .line(format!(
            "Your heart has beaten approximately {} times.",
            n(stats.body.heartbeats)
        ))
        .line(format!(
            "You've taken around {} breaths and slept about {} hours.",
            n(stats.body.breaths),
            n(stats.body.sleep_hours)
        ))
}

fn societal(stats: &AllStats, lang: Language) -> Section {
    let n = |v: u64| format_number(v as f64, lang);
    let billions = |v: u64| format_number(one_decimal(v as f64 / 1e9), lang);
    let s = &stats.societal;
    Section::new("Societal context")
        .line(format!(
            "During your lifetime, humanity's population has grown from {} billion to over {} billion people.",
            billions(s.population_at_birth),
            billions(s.current_population)
        ))
        .line(format!(
            "The average person will meet around {} people in their lifetime. You've likely already met approximately {} individuals.",
            format_number(LIFETIME_PEOPLE_MET, lang),
            n(s.people_met)
        ))
        .line(format!(
            "Since your birth, humanity has collectively experienced approximately {} births and {} deaths.",
            n(s.births_worldwide),
            n(s.deaths_worldwide)
        ))
}

fn cosmic(stats: &AllStats, lang: Language) -> Section {
    let c = &stats.cosmic;
    Section::new("Cosmic perspective")
        .line(format!(
            "Since your birth, Earth has traveled approximately {} kilometers through space around the Sun.",
            format_number(c.earth_travel_km as f64, lang)
        ))
        .line(format!(
            "The observable universe is about {} billion light-years across, meaning light takes {} billion years to cross it. Your entire lifespan is just {} of the universe's age.",
            format_number(OBSERVABLE_UNIVERSE_DIAMETER_LY / 1e9, lang),
            format_number(UNIVERSE_AGE_YEARS / 1e9, lang),
            format_tiny_percent(c.universe_age_percent, 8)
        ))
        .line(format!(
            "During your lifetime, our solar system has moved about {} through the Milky Way galaxy.",
            format_distance(c.solar_system_travel_km as f64, lang)
        ))
}

fn natural(stats: &AllStats, lang: Language) -> Section {
    let n = |v: u64| format_number(v as f64, lang);
    Section::new("Natural world")
        .line(format!(
            "You've experienced approximately {} lunar cycles and {} trips around the Sun.",
            n(stats.natural.lunar_cycles),
            n(stats.cosmic.trips_around_sun)
        ))
        .line(format!(
            "A giant sequoia tree can live over {} years. Your current age is {} of its potential lifespan.",
            format_number(SEQUOIA_LIFESPAN_YEARS, lang),
            format_percent(stats.natural.sequoia_lifespan_percent, 2, lang)
        ))
        .line(format!(
            "Your body has replaced most of its cells about {} times. You are not made of the same atoms you were born with.",
            n(stats.body.cell_replacements)
        ))
}

fn weekly_time(stats: &AllStats, lang: Language) -> Section {
    let n = |v: u32| format_number(f64::from(v), lang);
    let w = &stats.weekly_time;
    Section::new("Your weekly time budget")
        .line(format!("Total hours in a week: {}", n(w.total_hours)))
        .line(format!(
            "Sleep ({}hrs/day): {} hours",
            format_number(SLEEP_HOURS_PER_DAY, lang),
            n(w.sleep_hours)
        ))
        .line(format!("Work ({}hrs/week): {} hours", n(w.work_hours), n(w.work_hours)))
        .line(format!("Remaining: {} hours", n(w.remaining_hours)))
        .line(String::new())
        .line(format!(
            "People complain about a {}-hour workweek. But you have {} waking hours left every week.",
            n(w.work_hours),
            n(w.remaining_hours)
        ))
        .line(format!(
            "That's {} hours per year. In 3 years: {} hours of potential.",
            n(w.yearly_remaining),
            n(w.three_year_remaining)
        ))
}

fn mastery(stats: &AllStats, lang: Language) -> Section {
    let age = stats.birthdate.age_at(stats.computed_at);
    let years = |v: f64| format_number(one_decimal(v), lang);

    let rows = mastery_table(age).into_iter().map(|row| {
        format!(
            "  {:<26} {} years, mastery at age {}",
            row.label,
            years(row.stats.years_to_mastery),
            years(row.stats.age_at_mastery)
        )
    });

    let mut section = Section::new("Path to mastery")
        .line(format!(
            "The {} hour rule with different weekly commitments:",
            format_number(MASTERY_HOURS, lang)
        ))
        .lines(rows);

    if let (Ok(m), Ok(late)) = (
        mastery_stats(age, MASTERY_CONTEXT_HOURS_PER_WEEK),
        late_starter_age_at_mastery(MASTERY_CONTEXT_HOURS_PER_WEEK),
    ) {
        section = section.line(String::new()).line(format!(
            "At {} hours/week you'll have {} hours at age {}. Someone starting at {} won't reach it until {}.",
            format_number(MASTERY_CONTEXT_HOURS_PER_WEEK, lang),
            format_number(MASTERY_HOURS, lang),
            years(m.age_at_mastery),
            format_number(LATE_STARTER_AGE, lang),
            years(late)
        ));
    }
    section
}

fn opportunity(lang: Language) -> Section {
    let dollars = |v: u64| format!("${}", format_number(v as f64, lang));
    let breakdown = income_breakdown();

    let streams = breakdown.streams.iter().map(|line| {
        format!(
            "  - {} ({}/year)",
            line.description,
            dollars(line.annual_revenue)
        )
    });

    Section::new("What's possible")
        .line(format!("{}/year is:", dollars(INCOME_TARGET_PER_YEAR)))
        .lines(streams)
        .line("All difficult. All doable.")
}
