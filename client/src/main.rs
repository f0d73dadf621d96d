mod command;
mod error;
mod interface;
mod settings;

use clap::Parser;
use tic_tac_toe_ai::Minimax;
use tracing_subscriber::EnvFilter;

use crate::interface::Console;
use crate::settings::{Args, Settings};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let settings = Settings::from(Args::parse());
    let opponent = Minimax::new(settings.search());
    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout(), opponent, settings);
    console.run()?;

    Ok(())
}
