use std::path::PathBuf;

use clap::Args;
use mandala_core::{CellKind, GridLayoutEngine, HeatEngine, HeatLevel, MandalaGrid, GRID_SIZE};

#[derive(Args)]
pub struct GridArgs {
    /// Goal snapshot JSON file
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Compute as of this RFC 3339 instant (default: now)
    #[arg(long)]
    pub as_of: Option<String>,

    /// Emit the serialized grid instead of ASCII art
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: GridArgs) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = super::load_snapshot(&args.snapshot)?;
    let as_of = super::parse_as_of(args.as_of.as_deref())?;

    let heat = HeatEngine::new().compute(&snapshot.events, as_of);
    let grid = GridLayoutEngine::new().layout(
        &snapshot.goal,
        &snapshot.pillars,
        &snapshot.actions,
        &heat,
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&grid)?);
        return Ok(());
    }

    print!("{}", render_ascii(&grid, &snapshot.goal.title));

    println!();
    for pillar in &snapshot.pillars {
        println!("  {}. {}", pillar.position, pillar.title);
    }

    Ok(())
}

/// Glyph for an action cell at the given heat.
fn heat_char(level: HeatLevel) -> char {
    match level {
        HeatLevel::Cold => '░',
        HeatLevel::Warming => '▒',
        HeatLevel::Warm => '▓',
        HeatLevel::Hot => '█',
        HeatLevel::Fire => '✸',
    }
}

/// Render the grid as ASCII art, one glyph per cell, 3x3 blocks
/// separated by whitespace.
fn render_ascii(grid: &MandalaGrid, goal_title: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Mandala: {}\n\n", goal_title));

    for row in 0..GRID_SIZE {
        if row > 0 && row % 3 == 0 {
            output.push('\n');
        }
        for (col, cell) in grid.row(row).enumerate() {
            if col > 0 && col % 3 == 0 {
                output.push(' ');
            }
            let glyph = match cell.kind {
                CellKind::Empty => '·',
                CellKind::Goal => '◎',
                CellKind::Pillar => '◆',
                CellKind::Action => heat_char(cell.heat.unwrap_or(HeatLevel::Cold)),
            };
            output.push(glyph);
            output.push(' ');
        }
        output.push('\n');
    }

    output.push('\n');
    output.push_str("Legend: ◎ goal  ◆ pillar  ░ cold  ▒ warming  ▓ warm  █ hot  ✸ fire\n");

    output
}
