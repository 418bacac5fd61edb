use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod catalog;
mod history;
mod models;
mod pipeline;
mod render;
mod selection;
mod timeline;

use pipeline::{PickOutcome, Settings};

#[derive(Parser)]
#[command(name = "tip-of-the-day")]
#[command(about = "Publish a weekly-scheduled tip of the day as a JSON content block", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// CSV catalog with ID, Category, Title, Description, Link, Timeline columns
    #[arg(long, global = true, env = "TIP_CATALOG", default_value = "tips.csv")]
    catalog: PathBuf,

    /// JSON list of tip ids already published
    #[arg(long, global = true, env = "TIP_HISTORY", default_value = "shown_tips.json")]
    history: PathBuf,

    /// Where the rendered content block is written
    #[arg(long, global = true, env = "TIP_OUTPUT", default_value = "json/tip.json")]
    out: PathBuf,

    /// First day of week 0 (YYYY-MM-DD)
    #[arg(long, global = true, env = "TIP_SEMESTER_START", default_value = "2025-08-25")]
    semester_start: NaiveDate,

    /// Use this date instead of the system date (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick an unshown tip for this week and write it out
    Pick,
    /// List the tips eligible this week
    Eligible {
        /// Semester week to inspect instead of the current one
        #[arg(long, allow_negative_numbers = true)]
        week: Option<i64>,
    },
    /// Forget every tip shown so far
    ResetHistory,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let settings = Settings {
        catalog: cli.catalog,
        history: cli.history,
        out: cli.out,
        semester_start: cli.semester_start,
    };
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());

    match cli.command {
        Commands::Pick => {
            let outcome = pipeline::pick(&settings, today, &mut rand::rng())?;
            println!("{}", outcome.summary());
            if matches!(outcome, PickOutcome::Published { .. }) {
                println!("Written to {}.", settings.out.display());
            }
        }
        Commands::Eligible { week } => {
            let week =
                week.unwrap_or_else(|| selection::current_week(settings.semester_start, today));
            let tips = pipeline::eligible(&settings, week)?;

            if tips.is_empty() {
                println!("No tips scheduled for week {week}.");
                return Ok(());
            }

            println!("Tips eligible for week {week}:");
            for entry in tips.iter() {
                println!(
                    "- [{}] {} ({}, weeks {}-{}){}",
                    entry.tip.id,
                    entry.tip.title,
                    entry.tip.category,
                    entry.tip.window.start_week,
                    entry.tip.window.end_week,
                    if entry.shown { " already shown" } else { "" }
                );
            }
        }
        Commands::ResetHistory => {
            let cleared = pipeline::reset_history(&settings)?;
            println!(
                "Cleared {cleared} shown tips from {}.",
                settings.history.display()
            );
        }
    }

    Ok(())
}
