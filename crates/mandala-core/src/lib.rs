//! # Mandala Core Library
//!
//! Deterministic activity-to-visualization engine for a mandala-style
//! goal tracker: one goal, 8 supporting pillars, 8 actions per pillar
//! (64 total). External collaborators persist the hierarchy, map
//! free-text check-ins onto actions and render the result; this crate
//! owns the pure computation in between.
//!
//! ## Key Components
//!
//! - [`HeatEngine`]: per-action heat classification and streaks from
//!   the activity log
//! - [`GridLayoutEngine`]: total 9x9 cell assignment placing the
//!   goal, pillars and actions in two concentric rings
//! - [`PillarHeatAnalyzer`]: pillar-level aggregates for the coaching
//!   layer
//!
//! Both engines are pure functions over an in-memory snapshot: no
//! shared state, no I/O, safe to call concurrently for different
//! goals.

pub mod coaching;
pub mod error;
pub mod grid;
pub mod heat;
pub mod model;

pub use coaching::{cold_pillars, PillarHeatAnalyzer, PillarSummary};
pub use error::{CoreError, MalformedHierarchy, Result};
pub use grid::{CellKind, GridCell, GridLayoutEngine, MandalaGrid, CENTER, GRID_SIZE};
pub use heat::{days_since, HeatConfig, HeatEngine, HeatLevel, HeatRecord};
pub use model::{Action, ActivityEvent, Goal, GoalSnapshot, Pillar};
