//! 9x9 mandala grid layout engine.
//!
//! The goal sits at the absolute center (4,4). Each pillar appears
//! twice: once in the ring of 8 cells around the goal, and once as
//! the center of one of the 8 outer 3x3 regions. Each action fills
//! one of the 8 cells around its pillar's region center. The same
//! clockwise direction table drives all three placements, so actions
//! are arranged around their pillar exactly the way pillars are
//! arranged around the goal.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::MalformedHierarchy;
use crate::heat::{HeatLevel, HeatRecord};
use crate::model::{Action, Goal, Pillar};

/// Grid side length.
pub const GRID_SIZE: usize = 9;

/// Row and column of the goal cell.
pub const CENTER: (usize, usize) = (4, 4);

/// Unit direction for each radial position, clockwise starting at the
/// top. Index by `position - 1`.
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),  // top
    (-1, 1),  // top-right
    (0, 1),   // right
    (1, 1),   // bottom-right
    (1, 0),   // bottom
    (1, -1),  // bottom-left
    (0, -1),  // left
    (-1, -1), // top-left
];

/// Cell of a pillar in the ring around the goal. Position must be 1-8.
fn ring_cell(position: u8) -> (usize, usize) {
    let (dr, dc) = DIRECTIONS[usize::from(position - 1)];
    (
        (CENTER.0 as i32 + dr) as usize,
        (CENTER.1 as i32 + dc) as usize,
    )
}

/// Center of a pillar's outer 3x3 region, 3 cells out along the same
/// radial as its ring cell.
fn region_center(position: u8) -> (usize, usize) {
    let (dr, dc) = DIRECTIONS[usize::from(position - 1)];
    (
        (CENTER.0 as i32 + 3 * dr) as usize,
        (CENTER.1 as i32 + 3 * dc) as usize,
    )
}

/// Offset of an action from its pillar's region center.
fn action_offset(position: u8) -> (i32, i32) {
    DIRECTIONS[usize::from(position - 1)]
}

/// What occupies a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    Empty,
    Goal,
    Pillar,
    Action,
}

/// One cell of the 9x9 grid.
///
/// `ref_id` and `title` point back at the placed entity so a renderer
/// can route clicks and show tooltips; `heat` is set on action cells
/// only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
    pub kind: CellKind,
    pub ref_id: Option<String>,
    pub title: Option<String>,
    pub heat: Option<HeatLevel>,
}

impl GridCell {
    fn empty(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            kind: CellKind::Empty,
            ref_id: None,
            title: None,
            heat: None,
        }
    }

    fn goal(row: usize, col: usize, goal: &Goal) -> Self {
        Self {
            row,
            col,
            kind: CellKind::Goal,
            ref_id: Some(goal.id.clone()),
            title: Some(goal.title.clone()),
            heat: None,
        }
    }

    fn pillar(row: usize, col: usize, pillar: &Pillar) -> Self {
        Self {
            row,
            col,
            kind: CellKind::Pillar,
            ref_id: Some(pillar.id.clone()),
            title: Some(pillar.title.clone()),
            heat: None,
        }
    }

    fn action(row: usize, col: usize, action: &Action, heat: HeatLevel) -> Self {
        Self {
            row,
            col,
            kind: CellKind::Action,
            ref_id: Some(action.id.clone()),
            title: Some(action.title.clone()),
            heat: Some(heat),
        }
    }
}

/// Complete 9x9 cell assignment, freshly constructed per layout call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MandalaGrid {
    /// All 81 cells in row-major order
    cells: Vec<GridCell>,
}

impl MandalaGrid {
    fn empty() -> Self {
        let mut cells = Vec::with_capacity(GRID_SIZE * GRID_SIZE);
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                cells.push(GridCell::empty(row, col));
            }
        }
        Self { cells }
    }

    fn set(&mut self, cell: GridCell) {
        let idx = cell.row * GRID_SIZE + cell.col;
        self.cells[idx] = cell;
    }

    /// Get the cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Option<&GridCell> {
        if row < GRID_SIZE && col < GRID_SIZE {
            self.cells.get(row * GRID_SIZE + col)
        } else {
            None
        }
    }

    /// Iterate all 81 cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter()
    }

    /// Iterate one row of cells.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &GridCell> {
        self.cells
            .iter()
            .skip(row * GRID_SIZE)
            .take(GRID_SIZE)
    }

    /// Count cells of the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|c| c.kind == kind).count()
    }
}

/// Layout engine placing a goal hierarchy onto the grid.
///
/// Layout is a pure, total function of its inputs: identical inputs
/// always yield an identical grid.
#[derive(Debug, Default)]
pub struct GridLayoutEngine;

impl GridLayoutEngine {
    /// Create a layout engine.
    pub fn new() -> Self {
        Self
    }

    /// Build the full 9x9 grid for one goal.
    ///
    /// Fewer than 8 pillars, or fewer than 8 actions under a pillar,
    /// leaves the corresponding cells empty. Out-of-range or
    /// duplicated positions, or an action referencing an unsupplied
    /// pillar, fail fast.
    pub fn layout(
        &self,
        goal: &Goal,
        pillars: &[Pillar],
        actions: &[Action],
        heat: &HashMap<String, HeatRecord>,
    ) -> Result<MandalaGrid, MalformedHierarchy> {
        validate_positions(pillars, actions)?;

        let mut grid = MandalaGrid::empty();
        grid.set(GridCell::goal(CENTER.0, CENTER.1, goal));

        let mut regions: HashMap<&str, (usize, usize)> = HashMap::with_capacity(pillars.len());
        for pillar in pillars {
            let (row, col) = ring_cell(pillar.position);
            grid.set(GridCell::pillar(row, col, pillar));

            let center = region_center(pillar.position);
            grid.set(GridCell::pillar(center.0, center.1, pillar));
            regions.insert(pillar.id.as_str(), center);
        }

        for action in actions {
            let center = regions.get(action.pillar_id.as_str()).ok_or_else(|| {
                MalformedHierarchy::UnknownPillar {
                    action_id: action.id.clone(),
                    pillar_id: action.pillar_id.clone(),
                }
            })?;

            let (dr, dc) = action_offset(action.position);
            let row = (center.0 as i32 + dr) as usize;
            let col = (center.1 as i32 + dc) as usize;

            let level = heat
                .get(&action.id)
                .map(|record| record.level)
                .unwrap_or(HeatLevel::Cold);
            grid.set(GridCell::action(row, col, action, level));
        }

        Ok(grid)
    }
}

/// Check position ranges and per-parent uniqueness.
///
/// Valid permutations of 1-8 within each parent cannot collide on the
/// grid, so this is the only runtime check layout needs.
fn validate_positions(
    pillars: &[Pillar],
    actions: &[Action],
) -> Result<(), MalformedHierarchy> {
    let mut pillar_seen: HashMap<u8, &str> = HashMap::new();
    for pillar in pillars {
        if !(1..=8).contains(&pillar.position) {
            return Err(MalformedHierarchy::PositionOutOfRange {
                entity: "pillar",
                id: pillar.id.clone(),
                position: pillar.position,
            });
        }
        if let Some(other) = pillar_seen.insert(pillar.position, pillar.id.as_str()) {
            return Err(MalformedHierarchy::DuplicatePosition {
                entity: "pillar",
                id: pillar.id.clone(),
                other_id: other.to_string(),
                position: pillar.position,
            });
        }
    }

    let mut action_seen: HashMap<(&str, u8), &str> = HashMap::new();
    for action in actions {
        if !(1..=8).contains(&action.position) {
            return Err(MalformedHierarchy::PositionOutOfRange {
                entity: "action",
                id: action.id.clone(),
                position: action.position,
            });
        }
        let key = (action.pillar_id.as_str(), action.position);
        if let Some(other) = action_seen.insert(key, action.id.as_str()) {
            return Err(MalformedHierarchy::DuplicatePosition {
                entity: "action",
                id: action.id.clone(),
                other_id: other.to_string(),
                position: action.position,
            });
        }
    }

    Ok(())
}
