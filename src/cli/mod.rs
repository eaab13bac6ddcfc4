//! CLI module
//!
//! Provides subcommands for running the application:
//! - `serve`: run the web server
//! - `migrate`: apply or revert database migrations

pub mod migrate;
pub mod serve;

use clap::{Args, Parser, Subcommand};

/// User management web application
#[derive(Parser)]
#[command(name = "cadastro")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the web server
    Serve,

    /// Apply pending database migrations
    Migrate(MigrateArgs),
}

#[derive(Args)]
pub struct MigrateArgs {
    /// Revert the last applied migration instead of applying
    #[arg(long)]
    pub revert: bool,
}
