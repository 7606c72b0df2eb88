//! Data model for the mandala hierarchy and its activity log.
//!
//! A goal decomposes into up to 8 pillars, each holding up to 8
//! actions (64 total). Check-ins are mapped onto actions by an
//! external workflow; each mapping produces one immutable
//! [`ActivityEvent`]. These records arrive pre-fetched from the
//! external store as a single consistent [`GoalSnapshot`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single top-level objective, placed at the grid center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Goal ID
    pub id: String,

    /// Goal title
    pub title: String,
}

/// One of up to 8 supporting life areas under a goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pillar {
    /// Pillar ID
    pub id: String,

    /// Owning goal ID
    pub goal_id: String,

    /// Radial position, 1-8, unique within the goal
    pub position: u8,

    /// Pillar title
    pub title: String,
}

/// One of up to 8 trackable behaviors under a pillar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Action ID
    pub id: String,

    /// Owning pillar ID
    pub pillar_id: String,

    /// Owning goal ID (denormalized for goal-wide queries)
    pub goal_id: String,

    /// Radial position, 1-8, unique within the pillar
    pub position: u8,

    /// Action title
    pub title: String,
}

/// A single timestamped activity event for an action.
///
/// Events are append-only: created once per (check-in x mapped action)
/// pair and never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEvent {
    /// Action the event was mapped onto
    pub action_id: String,

    /// Owning pillar ID (denormalized)
    pub pillar_id: String,

    /// Owning goal ID (denormalized)
    pub goal_id: String,

    /// When the activity occurred
    pub timestamp: DateTime<Utc>,
}

/// A consistent, already-fetched view of one goal: hierarchy records
/// plus the full activity log.
///
/// The external store assembles this per invocation; the core never
/// reads storage itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSnapshot {
    /// The goal record
    pub goal: Goal,

    /// Pillars under the goal (8 when fully built, fewer mid-crafting)
    pub pillars: Vec<Pillar>,

    /// Actions across all pillars
    pub actions: Vec<Action>,

    /// Activity log for the goal, in no particular order
    #[serde(default)]
    pub events: Vec<ActivityEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_snapshot_roundtrip_defaults_events() {
        let json = r#"{
            "goal": { "id": "g1", "title": "Run a marathon" },
            "pillars": [
                { "id": "p1", "goal_id": "g1", "position": 1, "title": "Endurance" }
            ],
            "actions": []
        }"#;

        let snapshot: GoalSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.goal.title, "Run a marathon");
        assert_eq!(snapshot.pillars.len(), 1);
        assert!(snapshot.events.is_empty());
    }

    #[test]
    fn test_event_timestamp_parses_rfc3339() {
        let json = r#"{
            "action_id": "a1",
            "pillar_id": "p1",
            "goal_id": "g1",
            "timestamp": "2026-08-01T09:30:00Z"
        }"#;

        let event: ActivityEvent = serde_json::from_str(json).unwrap();
        let expected = Utc.with_ymd_and_hms(2026, 8, 1, 9, 30, 0).unwrap();
        assert_eq!(event.timestamp, expected);
    }
}
