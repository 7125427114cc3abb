mod commands;
mod html;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "contest-timeline")]
#[command(about = "Lay out contest schedules month by month")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored gantt chart
    Text,
    /// Row descriptors as JSON
    Json,
    /// HTML fragment for the contest page
    Html,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the contest timeline for a month
    Render {
        /// Schedule JSON (defaults to data_file from config)
        #[arg(short, long)]
        data: Option<PathBuf>,

        #[arg(short, long)]
        year: Option<i32>,

        #[arg(short, long)]
        month: Option<u32>,

        /// Move this many months from the selected month first (e.g. -1, 2)
        #[arg(long, allow_hyphen_values = true, default_value_t = 0)]
        step: i32,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Include contests that only pass through the month
        #[arg(long)]
        span: bool,

        /// Keep raw day positions for dates outside the month
        #[arg(long)]
        no_clamp: bool,
    },
    /// Map a pointer position on a track to a day
    DayAt {
        /// Pointer clientX
        #[arg(short, long, allow_hyphen_values = true)]
        x: f64,

        /// Track bounding box left edge
        #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
        left: f64,

        /// Track bounding box width
        #[arg(short, long)]
        width: f64,

        #[arg(long, default_value_t = 0.0)]
        pad_left: f64,

        #[arg(long, default_value_t = 0.0)]
        pad_right: f64,

        #[arg(short, long)]
        year: Option<i32>,

        #[arg(short, long)]
        month: Option<u32>,
    },
    /// Page from one month to another
    Navigate {
        #[arg(short, long)]
        year: Option<i32>,

        #[arg(short, long)]
        month: Option<u32>,

        /// Months to move, negative goes back
        #[arg(short, long, allow_hyphen_values = true, default_value_t = 1)]
        direction: i32,
    },
    /// Print the number of days in a month
    Days {
        #[arg(short, long)]
        year: Option<i32>,

        #[arg(short, long)]
        month: Option<u32>,
    },
    /// Show the month as a calendar grid with contest days marked
    Calendar {
        #[arg(short, long)]
        data: Option<PathBuf>,

        #[arg(short, long)]
        year: Option<i32>,

        #[arg(short, long)]
        month: Option<u32>,

        /// Highlight this date (YYYY-MM-DD, defaults to the local date)
        #[arg(long)]
        today: Option<String>,
    },
    /// List the month's contests by start day
    Agenda {
        #[arg(short, long)]
        data: Option<PathBuf>,

        #[arg(short, long)]
        year: Option<i32>,

        #[arg(short, long)]
        month: Option<u32>,

        #[arg(long)]
        span: bool,
    },
    /// Show the config file location, creating a commented default
    Config {
        /// Save this schedule file as the default
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Save this year as the month shown first
        #[arg(short, long)]
        year: Option<i32>,

        /// Save this month as the month shown first
        #[arg(short, long)]
        month: Option<u32>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            data,
            year,
            month,
            step,
            format,
            span,
            no_clamp,
        } => commands::timeline::run(data, year, month, step, format, span, no_clamp),
        Commands::DayAt {
            x,
            left,
            width,
            pad_left,
            pad_right,
            year,
            month,
        } => commands::day_at::run(x, left, width, pad_left, pad_right, year, month),
        Commands::Navigate {
            year,
            month,
            direction,
        } => commands::navigate::run(year, month, direction),
        Commands::Days { year, month } => commands::days::run(year, month),
        Commands::Calendar {
            data,
            year,
            month,
            today,
        } => commands::calendar::run(data, year, month, today),
        Commands::Agenda {
            data,
            year,
            month,
            span,
        } => commands::agenda::run(data, year, month, span),
        Commands::Config { data, year, month } => {
            commands::config::run(commands::config::ConfigUpdate { data, year, month })
        }
    }
}
