use std::process::ExitCode;

use clap::Parser;

use mdflash_cli::{init_tracing, run, Cli};
use mdflash_core::DeckError;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            exit_code(&e)
        }
    }
}

/// 1 for errors the user can act on, 2 when the deck may be left inconsistent.
fn exit_code(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<DeckError>() {
        Some(e) if !e.is_recoverable() => ExitCode::from(2),
        _ => ExitCode::from(1),
    }
}
