mod commands;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use daybook_core::CalendarApp;
use daybook_core::config::DaybookConfig;
use daybook_core::store::FileStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "daybook")]
#[command(about = "Browse a month calendar and manage your local events")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid
    Month {
        /// Month to show (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Move this many months forward (or back, if negative)
        #[arg(short, long, allow_negative_numbers = true, default_value_t = 0)]
        offset: i32,

        /// Only show events whose title or description contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// List the events on one day
    Day {
        /// Date (YYYY-MM-DD)
        date: String,

        #[arg(short, long)]
        search: Option<String>,
    },
    /// Create a new event (prompts for anything not given)
    Add {
        title: Option<String>,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Start time (HH:MM)
        #[arg(short, long)]
        start: Option<String>,

        /// End time (HH:MM)
        #[arg(short, long)]
        end: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Category: default, work, personal or other
        #[arg(short, long)]
        color: Option<String>,
    },
    /// Change an existing event
    Edit {
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Start time (HH:MM)
        #[arg(short, long)]
        start: Option<String>,

        /// End time (HH:MM)
        #[arg(short, long)]
        end: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Category: default, work, personal or other
        #[arg(short, long)]
        color: Option<String>,
    },
    /// Delete an event
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Write a month's events to calendar-events-YYYY-MM.json
    Export {
        /// Month to export (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Directory to write to (defaults to export_dir from config)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Show configuration paths
    Config,
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = DaybookConfig::load()?;
    debug!(data_dir = %config.data_path().display(), "loaded config");

    let today = chrono::Local::now().date_naive();
    let load_app = || CalendarApp::load(config.store(), today);

    match cli.command {
        Commands::Month {
            month,
            offset,
            search,
        } => {
            let mut app = load_app();
            show_requested_month(&mut app, month.as_deref())?;
            app.shift_month(offset);
            app.set_query(search.unwrap_or_default());
            commands::month::run(&app, today)
        }
        Commands::Day { date, search } => {
            let mut app = load_app();
            app.select_day(parse_date(&date)?);
            app.set_query(search.unwrap_or_default());
            commands::day::run(&app)
        }
        Commands::Add {
            title,
            date,
            start,
            end,
            description,
            color,
        } => {
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => today,
            };
            let fields = commands::FormFields {
                title,
                start,
                end,
                description,
                color,
            };
            commands::add::run(&mut load_app(), date, fields)
        }
        Commands::Edit {
            id,
            title,
            date,
            start,
            end,
            description,
            color,
        } => {
            let date = date.as_deref().map(parse_date).transpose()?;
            let fields = commands::FormFields {
                title,
                start,
                end,
                description,
                color,
            };
            commands::edit::run(&mut load_app(), &id, date, fields)
        }
        Commands::Delete { id, yes } => commands::delete::run(&mut load_app(), &id, yes),
        Commands::Export { month, out } => {
            let mut app = load_app();
            show_requested_month(&mut app, month.as_deref())?;
            commands::export::run(&app, &config, out)
        }
        Commands::Config => commands::config::run(&config),
    }
}

/// Log to stderr so rendered output stays clean. `RUST_LOG` overrides the
/// default level.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn show_requested_month(app: &mut CalendarApp<FileStore>, month: Option<&str>) -> Result<()> {
    if let Some(s) = month {
        let first = parse_month(s)?;
        app.show_month(first.year(), first.month0() as i32);
    }
    Ok(())
}

/// Parse YYYY-MM-DD
fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}'. Expected YYYY-MM-DD", s))
}

/// Parse YYYY-MM as the first day of that month
fn parse_month(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}'. Expected YYYY-MM", s))
}
