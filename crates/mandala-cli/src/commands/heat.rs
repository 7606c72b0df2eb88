use std::collections::HashMap;
use std::path::PathBuf;

use clap::Args;
use mandala_core::{HeatEngine, HeatLevel};

#[derive(Args)]
pub struct HeatArgs {
    /// Goal snapshot JSON file
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Compute as of this RFC 3339 instant (default: now)
    #[arg(long)]
    pub as_of: Option<String>,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: HeatArgs) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = super::load_snapshot(&args.snapshot)?;
    let as_of = super::parse_as_of(args.as_of.as_deref())?;

    let engine = HeatEngine::new();
    let records = engine.compute(&snapshot.events, as_of);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    // Stable ordering: pillar position, then action position.
    let pillar_positions: HashMap<&str, u8> = snapshot
        .pillars
        .iter()
        .map(|p| (p.id.as_str(), p.position))
        .collect();
    let mut actions: Vec<_> = snapshot.actions.iter().collect();
    actions.sort_by_key(|a| {
        (
            pillar_positions.get(a.pillar_id.as_str()).copied().unwrap_or(u8::MAX),
            a.position,
        )
    });

    println!("{:<30} {:<8} {:>6} {:>4}  last activity", "action", "heat", "streak", "7d");
    for action in actions {
        let (level, streak, recent, last) = match records.get(&action.id) {
            Some(r) => (
                r.level,
                r.streak,
                r.recent_count,
                r.last_activity
                    .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "never".to_string()),
            ),
            None => (HeatLevel::Cold, 0, 0, "never".to_string()),
        };
        println!(
            "{:<30} {:<8} {:>6} {:>4}  {}",
            action.title,
            level.name(),
            streak,
            recent,
            last
        );
    }

    Ok(())
}
