//! Pillar-level heat summaries for the coaching layer.
//!
//! The coaching collaborator nudges users about pillars that have gone
//! cold and celebrates strong streaks. It only needs aggregates, not
//! the full grid: per pillar, the mean heat score across its actions
//! and a quantized level.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::heat::{HeatLevel, HeatRecord};
use crate::model::{Action, Pillar};

/// Aggregated heat for one pillar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillarSummary {
    /// Pillar ID
    pub pillar_id: String,

    /// Pillar title
    pub title: String,

    /// Radial position, 1-8
    pub position: u8,

    /// Actions defined under the pillar
    pub action_count: u32,

    /// Actions with at least one event in the recent window
    pub active_count: u32,

    /// Longest streak among the pillar's actions
    pub best_streak: u32,

    /// Mean heat score over the pillar's actions (0.0-4.0); actions
    /// with no activity score 0
    pub mean_score: f64,

    /// Quantized level of `mean_score`
    pub level: HeatLevel,
}

/// Analyzer producing pillar summaries from heat records.
#[derive(Debug, Default)]
pub struct PillarHeatAnalyzer;

impl PillarHeatAnalyzer {
    /// Create a new analyzer.
    pub fn new() -> Self {
        Self
    }

    /// Summarize every supplied pillar, sorted by position.
    ///
    /// A pillar with no actions yet summarizes as `Cold` with a zero
    /// score.
    pub fn summarize(
        &self,
        pillars: &[Pillar],
        actions: &[Action],
        heat: &HashMap<String, HeatRecord>,
    ) -> Vec<PillarSummary> {
        let mut by_pillar: HashMap<&str, Vec<&Action>> = HashMap::new();
        for action in actions {
            by_pillar
                .entry(action.pillar_id.as_str())
                .or_default()
                .push(action);
        }

        let mut summaries: Vec<_> = pillars
            .iter()
            .map(|pillar| {
                let pillar_actions = by_pillar
                    .get(pillar.id.as_str())
                    .map(Vec::as_slice)
                    .unwrap_or(&[]);

                let mut score_total = 0u32;
                let mut active_count = 0;
                let mut best_streak = 0;
                for action in pillar_actions {
                    if let Some(record) = heat.get(&action.id) {
                        score_total += u32::from(record.level.score());
                        if record.recent_count > 0 {
                            active_count += 1;
                        }
                        best_streak = best_streak.max(record.streak);
                    }
                }

                let mean_score = if pillar_actions.is_empty() {
                    0.0
                } else {
                    f64::from(score_total) / pillar_actions.len() as f64
                };

                PillarSummary {
                    pillar_id: pillar.id.clone(),
                    title: pillar.title.clone(),
                    position: pillar.position,
                    action_count: pillar_actions.len() as u32,
                    active_count,
                    best_streak,
                    mean_score,
                    level: HeatLevel::from_score(mean_score),
                }
            })
            .collect();

        summaries.sort_by_key(|s| s.position);
        summaries
    }
}

/// Nudge candidates: summaries at or below `Warming`, coldest first.
pub fn cold_pillars(summaries: &[PillarSummary]) -> Vec<&PillarSummary> {
    let mut cold: Vec<_> = summaries
        .iter()
        .filter(|s| s.level <= HeatLevel::Warming)
        .collect();
    cold.sort_by(|a, b| {
        a.mean_score
            .partial_cmp(&b.mean_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.position.cmp(&b.position))
    });
    cold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pillar(position: u8, title: &str) -> Pillar {
        Pillar {
            id: format!("p{position}"),
            goal_id: "g1".to_string(),
            position,
            title: title.to_string(),
        }
    }

    fn action(pillar_position: u8, position: u8) -> Action {
        Action {
            id: format!("a{pillar_position}-{position}"),
            pillar_id: format!("p{pillar_position}"),
            goal_id: "g1".to_string(),
            position,
            title: format!("Action {pillar_position}-{position}"),
        }
    }

    fn record(action_id: &str, level: HeatLevel, recent_count: u32, streak: u32) -> HeatRecord {
        HeatRecord {
            action_id: action_id.to_string(),
            last_activity: None,
            recent_count,
            streak,
            level,
        }
    }

    #[test]
    fn test_summary_averages_action_scores() {
        let analyzer = PillarHeatAnalyzer::new();
        let pillars = vec![pillar(1, "Fitness")];
        let actions = vec![action(1, 1), action(1, 2)];

        let mut heat = HashMap::new();
        heat.insert("a1-1".to_string(), record("a1-1", HeatLevel::Fire, 4, 5));
        heat.insert("a1-2".to_string(), record("a1-2", HeatLevel::Warm, 1, 0));

        let summaries = analyzer.summarize(&pillars, &actions, &heat);
        assert_eq!(summaries.len(), 1);

        let summary = &summaries[0];
        assert_eq!(summary.action_count, 2);
        assert_eq!(summary.active_count, 2);
        assert_eq!(summary.best_streak, 5);
        assert_eq!(summary.mean_score, 3.0); // (4 + 2) / 2
        assert_eq!(summary.level, HeatLevel::Hot);
    }

    #[test]
    fn test_unscored_actions_count_as_cold() {
        let analyzer = PillarHeatAnalyzer::new();
        let pillars = vec![pillar(1, "Fitness")];
        let actions = vec![action(1, 1), action(1, 2), action(1, 3), action(1, 4)];

        let mut heat = HashMap::new();
        heat.insert("a1-1".to_string(), record("a1-1", HeatLevel::Fire, 4, 5));

        let summaries = analyzer.summarize(&pillars, &actions, &heat);
        assert_eq!(summaries[0].mean_score, 1.0); // 4 / 4
        assert_eq!(summaries[0].active_count, 1);
    }

    #[test]
    fn test_empty_pillar_is_cold() {
        let analyzer = PillarHeatAnalyzer::new();
        let summaries = analyzer.summarize(&[pillar(2, "Rest")], &[], &HashMap::new());

        assert_eq!(summaries[0].action_count, 0);
        assert_eq!(summaries[0].mean_score, 0.0);
        assert_eq!(summaries[0].level, HeatLevel::Cold);
    }

    #[test]
    fn test_summaries_sorted_by_position() {
        let analyzer = PillarHeatAnalyzer::new();
        let pillars = vec![pillar(5, "E"), pillar(1, "A"), pillar(3, "C")];

        let summaries = analyzer.summarize(&pillars, &[], &HashMap::new());
        let positions: Vec<_> = summaries.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![1, 3, 5]);
    }

    #[test]
    fn test_cold_pillars_sorted_coldest_first() {
        let analyzer = PillarHeatAnalyzer::new();
        let pillars = vec![pillar(1, "A"), pillar(2, "B"), pillar(3, "C")];
        let actions = vec![action(1, 1), action(2, 1), action(3, 1)];

        let mut heat = HashMap::new();
        heat.insert("a1-1".to_string(), record("a1-1", HeatLevel::Fire, 3, 4));
        heat.insert("a2-1".to_string(), record("a2-1", HeatLevel::Warming, 1, 0));
        // a3-1 has no record: cold.

        let summaries = analyzer.summarize(&pillars, &actions, &heat);
        let cold = cold_pillars(&summaries);

        assert_eq!(cold.len(), 2);
        assert_eq!(cold[0].pillar_id, "p3");
        assert_eq!(cold[1].pillar_id, "p2");
    }
}
