mod cli;
mod paths;
mod run;

use anyhow::Result;
use cli::Command;

fn main() -> Result<()> {
    let cli = cli::parse();
    run::initialise_tracing();

    match cli.command {
        Some(Command::Check(args)) => run::check(args),
        Some(Command::Launch { app_id }) => run::launch(&app_id),
        Some(Command::Where) => run::where_paths(),
        None => run::check(cli.check),
    }
}
