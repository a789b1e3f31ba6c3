//! Command-line entry point.
//!
//! ```text
//! war-sim <hand-a> <hand-b> [--json] [--max-rounds N]
//! war-sim --deal <seed> [--json] [--max-rounds N]
//! ```
//!
//! Set `RUST_LOG=debug` (or `trace`) to follow the game on stderr.

use std::process::ExitCode;

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use war_sim::{deal, load_hand, play_with_config, CardList, SetupError, WarConfig};

const USAGE: &str = "usage: war-sim <hand-a> <hand-b> [--json] [--max-rounds N]\n       war-sim --deal <seed> [--json] [--max-rounds N]";

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error("could not encode report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where the two hands come from.
#[derive(Debug, PartialEq, Eq)]
enum Source {
    Files(String, String),
    Deal(u64),
}

#[derive(Debug, PartialEq, Eq)]
struct Options {
    source: Source,
    json: bool,
    config: WarConfig,
}

fn usage(message: &str) -> SetupError {
    SetupError::Usage(format!("{}\n{}", message, USAGE))
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options, SetupError> {
    let mut files = Vec::new();
    let mut seed = None;
    let mut json = false;
    let mut config = WarConfig::default();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--deal" => {
                let value = args.next().ok_or_else(|| usage("--deal needs a seed"))?;
                seed = Some(value.parse().map_err(|_| usage("seed must be a number"))?);
            }
            "--max-rounds" => {
                let value = args.next().ok_or_else(|| usage("--max-rounds needs a value"))?;
                let rounds = value.parse().map_err(|_| usage("max rounds must be a number"))?;
                config = config.with_max_rounds(rounds);
            }
            _ if arg.starts_with("--") => return Err(usage(&format!("unknown option {}", arg))),
            _ => files.push(arg),
        }
    }

    let source = match (seed, files.len()) {
        (Some(seed), 0) => Source::Deal(seed),
        (None, 2) => {
            let second = files.pop().unwrap_or_default();
            let first = files.pop().unwrap_or_default();
            Source::Files(first, second)
        }
        _ => return Err(usage("Please provide 2 file names")),
    };

    Ok(Options {
        source,
        json,
        config,
    })
}

fn run() -> Result<(), CliError> {
    let options = parse_args(std::env::args().skip(1))?;

    let (mut alice, mut bob) = match options.source {
        Source::Files(first, second) => (load_hand(first)?, load_hand(second)?),
        Source::Deal(seed) => {
            let (mut first, mut second) = (CardList::new(), CardList::new());
            deal(seed, &mut first, &mut second);
            (first, second)
        }
    };

    alice.set_player("Alice");
    bob.set_player("Bob");

    let report = play_with_config(&mut alice, &mut bob, options.config);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
