use clap::{Parser, Subcommand};

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "phasetimer", version, about = "Phase-sequenced countdown timer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a timer session in the terminal
    Run {
        #[command(subcommand)]
        mode: common::Mode,
    },
    /// Print the built phase sequence as JSON without running it
    Preview {
        #[command(subcommand)]
        mode: common::Mode,
    },
    /// Named preset management
    Preset {
        #[command(subcommand)]
        action: commands::preset::PresetAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run { mode } => commands::run::run(mode),
        Commands::Preview { mode } => commands::preview::run(mode),
        Commands::Preset { action } => commands::preset::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
