//! lifeweeks - life in weeks from the command line

use std::io::{self, BufRead, Write};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lifeweeks_core::Language;
use lifeweeks_format::{format_number, format_percent};
use lifeweeks_grid::{GridRenderer, Milestone, RenderConfig, WeekGrid};
use lifeweeks_runtime::{
    init_tracing, AppConfig, AppState, LogFormat, Overrides, Report, Session, Step,
};
use lifeweeks_stats::{AllStats, StatsEngine};
use lifeweeks_time::Birthdate;

#[derive(Parser, Debug)]
#[command(
    name = "lifeweeks",
    version,
    about = "Visualize a life in weeks and the statistics behind it"
)]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Life expectancy in years used for the grid horizon
    #[arg(long, global = true)]
    life_expectancy: Option<u32>,

    /// Output language tag (en-US, es-ES, zh-CN)
    #[arg(long, global = true)]
    language: Option<Language>,

    /// Log output format (text or json)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the statistics for a birthdate
    Stats {
        birthdate: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Draw the week grid
    Grid {
        birthdate: String,
        /// Mark a week, as WEEK:TITLE (repeatable)
        #[arg(long = "milestone", value_parser = parse_milestone)]
        milestones: Vec<Milestone>,
        /// Use ASCII glyphs
        #[arg(long)]
        ascii: bool,
    },
    /// Project the 10,000-hour mastery age
    Mastery {
        birthdate: String,
        /// Weekly practice hours; omit for the preset table
        #[arg(long)]
        hours: Option<f64>,
    },
    /// Print the full report
    Report { birthdate: String },
    /// Ask for a birthdate and show the report
    Interactive,
    /// Run the HTTP API
    Serve {
        /// Address to bind
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
}

fn parse_milestone(raw: &str) -> std::result::Result<Milestone, String> {
    let (week, title) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected WEEK:TITLE, got '{raw}'"))?;
    let week = week
        .trim()
        .parse()
        .map_err(|_| format!("'{week}' is not a week number"))?;
    let title = title.trim();
    if title.is_empty() {
        return Err("milestone title is empty".to_string());
    }
    Ok(Milestone::new(title, week))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let overrides = Overrides {
        life_expectancy_years: cli.life_expectancy,
        language: cli.language,
        bind: match &cli.command {
            Command::Serve { bind } => *bind,
            _ => None,
        },
        log_format: cli.log_format,
    };
    let config = AppConfig::load(cli.config.as_deref(), &overrides)
        .context("failed to load configuration")?;
    init_tracing(&config.log);
    tracing::debug!(?config, "configuration resolved");

    let engine = Arc::new(StatsEngine::with_config(config.stats_config()));
    let lang = config.effective_language();

    match cli.command {
        Command::Stats { birthdate, json } => {
            let stats = compute(&engine, &birthdate)?;
            if json {
                let out = serde_json::to_string_pretty(&stats)
                    .context("failed to serialize statistics")?;
                println!("{out}");
            } else {
                print_stats(&stats, lang);
            }
        }
        Command::Grid {
            birthdate,
            milestones,
            ascii,
        } => {
            let stats = compute(&engine, &birthdate)?;
            let mut grid = WeekGrid::new(stats.life.weeks_lived, stats.life.total_weeks);
            if config.features.milestones {
                grid = grid.with_milestones(milestones);
            } else if !milestones.is_empty() {
                tracing::warn!("milestones are disabled; set features.milestones in the config file");
            }
            let render = if ascii {
                RenderConfig::ascii()
            } else {
                RenderConfig::default()
            };
            println!("{}", GridRenderer::with_config(render).render(&grid));
        }
        Command::Mastery { birthdate, hours } => {
            let birth = parse(&engine, &birthdate)?;
            print_mastery(&engine, &birth, hours, lang)?;
        }
        Command::Report { birthdate } => {
            let stats = compute(&engine, &birthdate)?;
            println!("{}", report(&stats, lang));
        }
        Command::Interactive => interactive(engine, lang)?,
        Command::Serve { .. } => {
            lifeweeks_runtime::run(config.server.bind, AppState::new(engine))
                .await
                .with_context(|| format!("HTTP server on {} failed", config.server.bind))?;
        }
    }

    Ok(())
}

fn parse(engine: &StatsEngine, birthdate: &str) -> Result<Birthdate> {
    engine
        .parse_birthdate(birthdate)
        .with_context(|| format!("invalid birthdate '{birthdate}'"))
}

fn compute(engine: &StatsEngine, birthdate: &str) -> Result<AllStats> {
    let birth = parse(engine, birthdate)?;
    engine
        .compute(&birth)
        .with_context(|| format!("cannot compute statistics for {birth}"))
}

fn report(stats: &AllStats, lang: Language) -> String {
    let grid = WeekGrid::new(stats.life.weeks_lived, stats.life.total_weeks);
    Report::new().render(stats, &grid, lang)
}

fn print_stats(stats: &AllStats, lang: Language) {
    let n = |v: u64| format_number(v as f64, lang);
    let life = &stats.life;

    println!("Birthdate        {}", stats.birthdate);
    println!("Weeks lived      {} of {}", n(life.weeks_lived), n(life.total_weeks));
    println!("Weeks remaining  {}", n(life.weeks_remaining()));
    println!("Percent lived    {}", format_percent(life.percent_lived, 1, lang));
    println!("Days lived       {}", n(life.days_lived));
    println!("Years lived      {}", format_number((life.years_lived * 100.0).round() / 100.0, lang));
    println!("Heartbeats       {}", n(stats.body.heartbeats));
    println!("Breaths          {}", n(stats.body.breaths));
    println!("Earth travel km  {}", n(stats.cosmic.earth_travel_km));
    println!("Lunar cycles     {}", n(stats.natural.lunar_cycles));
    println!("Seasons          {}", n(stats.natural.seasons));
}

fn print_mastery(
    engine: &StatsEngine,
    birth: &Birthdate,
    hours: Option<f64>,
    lang: Language,
) -> Result<()> {
    let years = |v: f64| format_number((v * 10.0).round() / 10.0, lang);

    match hours {
        Some(hours) => {
            let m = engine.mastery(birth, hours)?;
            println!(
                "{} hours/week: {} years, mastery at age {}",
                format_number(hours, lang),
                years(m.years_to_mastery),
                years(m.age_at_mastery)
            );
        }
        None => {
            for row in engine.mastery_presets(birth)? {
                println!(
                    "{:<26} {} years, mastery at age {}",
                    row.label,
                    years(row.stats.years_to_mastery),
                    years(row.stats.age_at_mastery)
                );
            }
        }
    }
    Ok(())
}

fn prompt(input: &mut impl BufRead, out: &mut impl Write, message: &str) -> Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn interactive(engine: Arc<StatsEngine>, lang: Language) -> Result<()> {
    let mut session = Session::new(engine);
    wizard(&mut session, &mut io::stdin().lock(), &mut io::stdout().lock(), lang)
}

/// Drive the two-step session until EOF or `q`
fn wizard(
    session: &mut Session,
    input: &mut impl BufRead,
    out: &mut impl Write,
    lang: Language,
) -> Result<()> {
    writeln!(out, "Life in weeks")?;
    writeln!(out, "A simple visualization to reflect on the passage of time")?;

    loop {
        match session.step() {
            Step::EnterBirthdate => {
                let Some(answer) = prompt(input, out, "\nEnter a birthdate (YYYY-MM-DD): ")? else {
                    break;
                };
                match session.submit(&answer) {
                    Ok(stats) => writeln!(out, "\n{}", report(stats, lang))?,
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
            Step::Results => {
                let Some(answer) =
                    prompt(input, out, "\nPress Enter to start over, or q to quit: ")?
                else {
                    break;
                };
                match answer.as_str() {
                    "q" | "quit" => break,
                    "" => session.reset(),
                    other => writeln!(out, "'{other}' is not an option; press Enter or type q")?,
                }
            }
        }
    }

    Ok(())
}
