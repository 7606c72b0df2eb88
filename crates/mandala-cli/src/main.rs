use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "mandala-cli", version, about = "Mandala CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Per-action heat and streaks
    Heat(commands::heat::HeatArgs),
    /// Render the 9x9 mandala grid
    Grid(commands::grid::GridArgs),
    /// Pillar heat summaries and cold-pillar nudges
    Coach(commands::coach::CoachArgs),
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Heat(args) => commands::heat::run(args),
        Commands::Grid(args) => commands::grid::run(args),
        Commands::Coach(args) => commands::coach::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
