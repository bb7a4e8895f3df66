mod cli;
mod merge;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(e) = merge::run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
