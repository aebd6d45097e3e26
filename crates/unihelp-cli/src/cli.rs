use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// UniHelp - campus marketplace client
#[derive(Parser, Debug)]
#[command(name = "unihelp")]
#[command(about = "Campus marketplace client: location-ranked help requests", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a unihelp.toml config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend API base URL (overrides config and environment)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Bearer token for authenticated calls
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Viewer latitude for distance ranking
    #[arg(long, global = true)]
    pub lat: Option<f64>,

    /// Viewer longitude for distance ranking
    #[arg(long, global = true)]
    pub lon: Option<f64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List requests, distance-ranked when an origin is known
    List(ListArgs),

    /// Show a single request with its permitted actions
    Show(ShowArgs),

    /// Create a new request
    Create(CreateArgs),

    /// Delete a request you own
    Delete(ShowArgs),

    /// Accept a request, becoming its worker
    Accept(ShowArgs),

    /// Submit a completion report for a request you are working on
    Complete(CompleteArgs),

    /// Rate the completion report of a request you own
    Rate(RateArgs),

    /// Manage group-funding participation
    Fund(FundArgs),

    /// Show your activity: requests, works, fundings, points
    My(MyArgs),

    /// Show the effective configuration and where each value came from
    Config,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Page number, zero-based
    #[arg(long, default_value = "0")]
    pub page: u32,

    /// Page size (defaults to the configured value)
    #[arg(long)]
    pub size: Option<u32>,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Request id
    pub id: u64,
}

#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Request title
    #[arg(long)]
    pub title: String,

    /// Request body text
    #[arg(long)]
    pub content: String,

    /// Category: info or help
    #[arg(long, default_value = "help")]
    pub category: String,

    /// Allow multiple funders to pool the reward
    #[arg(long)]
    pub group_funding: bool,

    /// Latitude of the request location
    #[arg(long)]
    pub latitude: f64,

    /// Longitude of the request location
    #[arg(long)]
    pub longitude: f64,

    /// Minutes until the request expires
    #[arg(long, default_value = "60")]
    pub remaining_minutes: u32,

    /// Total reward in currency units
    #[arg(long)]
    pub reward: u64,
}

#[derive(Parser, Debug)]
pub struct CompleteArgs {
    /// Request id
    pub id: u64,

    /// Completion report text (must not be empty)
    #[arg(long)]
    pub report: String,
}

#[derive(Parser, Debug)]
pub struct RateArgs {
    /// Request id
    pub id: u64,

    /// Rating, 0 to 5 inclusive
    #[arg(long)]
    pub rate: i64,
}

#[derive(Parser, Debug)]
pub struct FundArgs {
    #[command(subcommand)]
    pub command: FundCommands,
}

#[derive(Subcommand, Debug)]
pub enum FundCommands {
    /// Join the funding pool of a group-fundable request
    Join(ShowArgs),

    /// Withdraw your participation from a funding pool
    Withdraw(ShowArgs),
}

#[derive(Parser, Debug)]
pub struct MyArgs {
    #[command(subcommand)]
    pub command: MyCommands,
}

#[derive(Subcommand, Debug)]
pub enum MyCommands {
    /// Requests you created
    Requests(ListArgs),

    /// Requests you are working on
    Works(ListArgs),

    /// Requests you are funding
    Fundings(ListArgs),

    /// Your point balance
    Point,

    /// Withdraw points from your balance
    WithdrawPoint(WithdrawPointArgs),
}

#[derive(Parser, Debug)]
pub struct WithdrawPointArgs {
    /// Amount of points to withdraw
    pub point: u64,
}
