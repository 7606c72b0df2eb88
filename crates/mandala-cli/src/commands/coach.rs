use std::path::PathBuf;

use clap::Args;
use mandala_core::{cold_pillars, HeatEngine, PillarHeatAnalyzer};

#[derive(Args)]
pub struct CoachArgs {
    /// Goal snapshot JSON file
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Compute as of this RFC 3339 instant (default: now)
    #[arg(long)]
    pub as_of: Option<String>,

    /// Emit JSON instead of a report
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: CoachArgs) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = super::load_snapshot(&args.snapshot)?;
    let as_of = super::parse_as_of(args.as_of.as_deref())?;

    let heat = HeatEngine::new().compute(&snapshot.events, as_of);
    let summaries = PillarHeatAnalyzer::new().summarize(&snapshot.pillars, &snapshot.actions, &heat);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!("Pillars for: {}\n", snapshot.goal.title);
    for summary in &summaries {
        println!(
            "  {}. {:<20} {:<8} score {:.1}  active {}/{}  best streak {}",
            summary.position,
            summary.title,
            summary.level.name(),
            summary.mean_score,
            summary.active_count,
            summary.action_count,
            summary.best_streak,
        );
    }

    let cold = cold_pillars(&summaries);
    if cold.is_empty() {
        println!("\nNo cold pillars. Keep it up.");
    } else {
        println!("\nCold pillars (nudge candidates):");
        for summary in cold {
            println!("  {} ({})", summary.title, summary.level.name());
        }
    }

    Ok(())
}
