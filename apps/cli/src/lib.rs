//! Command-line front end for markdown flashcard decks.

pub mod commands;
pub mod config;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mdflash_core::BoxIntervals;

#[derive(Parser, Debug)]
#[command(name = "mdflash", version, about = "Spaced repetition over markdown decks")]
pub struct Cli {
    /// Increase log output (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Review interval per box, in days, comma separated.
    #[arg(long, global = true, env = "MDFLASH_BOX_INTERVALS", value_name = "DAYS")]
    pub box_intervals: Option<BoxIntervals>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a deck, repair its metadata and summarize it
    Load {
        file: PathBuf,
        /// Only cards whose category starts with this prefix
        #[arg(short, long, default_value = "")]
        category: String,
        /// Print the cards as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the categories of a deck
    Categories { file: PathBuf },
    /// Show when the next review is due
    Next {
        file: PathBuf,
        #[arg(short, long, default_value = "")]
        category: String,
    },
    /// List cards due today or earlier
    Due {
        file: PathBuf,
        #[arg(short, long, default_value = "")]
        category: String,
    },
    /// Change the schedule of one card
    Set {
        file: PathBuf,
        id: String,
        #[arg(long = "box", value_name = "N")]
        box_index: Option<u32>,
        /// Due date as YYYY-MM-DD
        #[arg(long)]
        due: Option<NaiveDate>,
        #[arg(long, conflicts_with = "disable")]
        enable: bool,
        #[arg(long)]
        disable: bool,
    },
    /// Write a copy of the deck with all progress reset
    Share { file: PathBuf },
}

pub fn init_tracing(verbose: u8) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            _ => EnvFilter::new("debug"),
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = config::deck_config(cli.box_intervals);

    match cli.command {
        Command::Load {
            file,
            category,
            json,
        } => commands::load(&file, config, &category, json),
        Command::Categories { file } => commands::categories(&file, config),
        Command::Next { file, category } => commands::next(&file, config, &category),
        Command::Due { file, category } => commands::due(&file, config, &category),
        Command::Set {
            file,
            id,
            box_index,
            due,
            enable,
            disable,
        } => {
            let enabled = match (enable, disable) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            commands::set(
                &file,
                config,
                &id,
                commands::ScheduleChange {
                    box_index,
                    due,
                    enabled,
                },
            )
        }
        Command::Share { file } => commands::share(&file),
    }
}
