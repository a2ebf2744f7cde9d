//! CLI command definitions and dispatch.

pub mod club;
pub mod config;
pub mod migrate;
pub mod serve;
pub mod token;

use clap::{Parser, Subcommand};

use campus_core::config::AppConfig;
use campus_core::error::AppError;
use campus_database::Stores;

use crate::output::OutputFormat;

/// Campus Hub: student clubs, events, and announcements
#[derive(Debug, Parser)]
#[command(name = "campus", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (selects `config/{env}.toml`)
    #[arg(short, long, env = "CAMPUS_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Configuration inspection
    Config(config::ConfigArgs),
    /// Development bearer tokens
    Token(token::TokenArgs),
    /// Club inspection
    Club(club::ClubArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.env).await,
            Commands::Migrate(args) => migrate::execute(args, &self.env).await,
            Commands::Config(args) => config::execute(args, &self.env, self.format).await,
            Commands::Token(args) => token::execute(args, &self.env, self.format).await,
            Commands::Club(args) => club::execute(args, &self.env, self.format).await,
        }
    }
}

/// Helper: load configuration for an environment
pub fn load_config(env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(env)
}

/// Helper: open the configured stores
pub async fn open_stores(config: &AppConfig) -> Result<Stores, AppError> {
    Stores::connect(&config.database).await
}
