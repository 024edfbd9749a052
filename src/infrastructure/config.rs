//! Command-line configuration.

use crate::application::ResponsePolicy;
use crate::domain::{ALL_GENRES, FilterState};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/fetch-movies";

#[derive(Parser, Debug)]
#[command(name = "reelgrid", version, about = "Browse movies from a search endpoint in the terminal")]
pub struct Args {
    /// Search endpoint receiving `{page, year, genre}` as a JSON POST
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
    /// How often the UI polls for input and finished requests, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub tick_ms: u64,
    /// Treatment of responses that arrive for superseded requests
    #[arg(long, value_enum, default_value_t = PolicyArg::LatestOnly)]
    pub policy: PolicyArg,
    /// File that receives log output
    #[arg(long, default_value = "reelgrid.log")]
    pub log_file: PathBuf,
    /// Fetch one page, print it and exit instead of starting the UI
    #[arg(long)]
    pub print: bool,
    /// Initial page
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    /// Initial release year filter
    #[arg(long)]
    pub year: Option<i32>,
    /// Initial genre filter
    #[arg(long, default_value = ALL_GENRES)]
    pub genre: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    LatestOnly,
    ArrivalOrder,
}

impl From<PolicyArg> for ResponsePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::LatestOnly => ResponsePolicy::LatestOnly,
            PolicyArg::ArrivalOrder => ResponsePolicy::ArrivalOrder,
        }
    }
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub timeout: Duration,
    pub tick: Duration,
    pub policy: ResponsePolicy,
    pub log_file: PathBuf,
    pub print: bool,
    pub filters: FilterState,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            filters: FilterState::new(args.page, args.year, args.genre),
            endpoint: args.endpoint,
            timeout: Duration::from_secs(args.timeout_secs),
            tick: Duration::from_millis(args.tick_ms),
            policy: args.policy.into(),
            log_file: args.log_file,
            print: args.print,
        }
    }
}

impl Config {
    pub fn from_cli() -> Self {
        Args::parse().into()
    }
}
