//! Command-line frontend for the Whodunit mystery game.

mod repl;

use std::io;
use std::process;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wd_game::{GameConfig, Session};

#[derive(Parser)]
#[command(
    name = "whodunit",
    about = "Whodunit: search the manor for clues and name the murderer",
    version
)]
struct Args {
    /// RNG seed for a random solution (default: the first combination)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    let config = match args.seed {
        Some(seed) => GameConfig::default().with_seed(seed),
        None => GameConfig::default(),
    };
    let mut session = Session::classic(config).map_err(|e| e.to_string())?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(&mut session, stdin.lock(), &mut stdout.lock()).map_err(|e| e.to_string())
}
