use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "shaderdock",
    author,
    version,
    about = "Shader dock configuration tools",
    arg_required_else_help = false
)]
pub struct Cli {
    #[command(flatten)]
    pub check: CheckArgs,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Dock configuration file (defaults to the discovered config directory).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output size used to compute the dock layout (e.g. `1920x1080`).
    #[arg(long, value_name = "WIDTHxHEIGHT", default_value = "1920x1080")]
    pub output: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the configuration and resolve its applications.
    Check(CheckArgs),
    /// Resolve an application's desktop entry and launch it detached, the
    /// way a dock click would.
    Launch {
        /// Desktop-entry identifier (e.g. `firefox`).
        #[arg(value_name = "APP_ID")]
        app_id: String,
    },
    /// Print the resolved configuration search paths.
    Where,
}

pub fn parse() -> Cli {
    Cli::parse()
}
