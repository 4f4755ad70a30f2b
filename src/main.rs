//! Console blackjack against a computer dealer.

use std::io;
use std::process::ExitCode;

use blackjack::{Console, Options, Session};
use clap::Parser;

/// Play blackjack against the dealer in the terminal.
#[derive(Debug, Parser)]
#[command(name = "blackjack", version, about)]
struct Args {
    /// Seed for the shuffle, for a reproducible sequence of deals.
    #[arg(long)]
    seed: Option<u64>,
    /// Do not scroll the screen between phases.
    #[arg(long)]
    no_clear: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut options = Options::default().with_seed(args.seed);
    if args.no_clear {
        options = options.with_clear_lines(0);
    }

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock())
        .with_clear_lines(options.clear_lines);
    let mut session = Session::new(&options);

    match session.run(&mut console) {
        Ok(rounds) => {
            log::info!("played {rounds} round(s) with seed {}", session.seed());
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
