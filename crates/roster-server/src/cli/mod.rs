use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for the `roster` binary.
#[derive(Debug, Parser)]
#[command(name = "roster", version, about = "Roster - schema-validated user API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// List registered schemas, or print one
    Schemas(SchemasArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Config file to use instead of ./roster.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override server.host
    #[arg(long)]
    pub host: Option<String>,

    /// Override server.port
    #[arg(long)]
    pub port: Option<u16>,

    /// Override database.path
    #[arg(long)]
    pub database: Option<String>,
}

#[derive(Debug, Args)]
pub struct SchemasArgs {
    /// Schema name to print
    pub name: Option<String>,
}
