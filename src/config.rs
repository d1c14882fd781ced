use crate::models::{FilterState, StatusFilter};
use crate::sources::DEFAULT_LIMIT;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";

#[derive(Debug, Parser)]
#[command(name = "property-board")]
#[command(about = "Browse, filter and delete rental property listings.")]
pub struct Config {
    /// Base URL of the listings API
    #[arg(long, env = "PROPERTY_BOARD_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// Maximum number of properties to load
    #[arg(long, default_value_t = DEFAULT_LIMIT, global = true)]
    pub limit: usize,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 30, global = true)]
    pub timeout_secs: u64,

    /// Use built-in sample listings instead of the API
    #[arg(long, global = true)]
    pub demo: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand, PartialEq)]
pub enum Command {
    /// List properties, optionally filtered
    #[command(alias = "ls")]
    List {
        /// all, available or unavailable
        #[arg(long, short, default_value_t = StatusFilter::All)]
        status: StatusFilter,
        /// Case-insensitive text matched against title and location
        #[arg(long, short = 'q', default_value = "")]
        search: String,
        /// Save the filtered properties as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Delete a property by id
    #[command(alias = "rm")]
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Edit a property (not available yet)
    Edit { id: i64 },
    /// Show availability counters
    Stats,
}

impl Config {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Subcommand to run, `list` with no filtering when none was given
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::List {
            status: StatusFilter::All,
            search: String::new(),
            json: None,
        })
    }
}

impl Command {
    pub fn filter_state(&self) -> FilterState {
        match self {
            Command::List { status, search, .. } => FilterState::new(*status, search.clone()),
            _ => FilterState::default(),
        }
    }
}
