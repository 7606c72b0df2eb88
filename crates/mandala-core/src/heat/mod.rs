//! Activity heat engine.
//!
//! Turns the append-only activity log into per-action metrics: last
//! activity, a rolling recent-activity count, a consecutive-day streak
//! and a five-level heat classification. Everything here is a pure
//! function of the event list and an `as_of` instant; records are
//! recomputed from scratch on every query, so there is no cache to
//! invalidate.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ActivityEvent;

const DAY_SECS: i64 = 24 * 60 * 60;

/// Five-level classification of an action's recency and consistency.
///
/// Ordered coldest to hottest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatLevel {
    Cold,
    Warming,
    Warm,
    Hot,
    Fire,
}

impl HeatLevel {
    /// Numeric score, 0 (cold) to 4 (fire).
    pub fn score(&self) -> u8 {
        match self {
            HeatLevel::Cold => 0,
            HeatLevel::Warming => 1,
            HeatLevel::Warm => 2,
            HeatLevel::Hot => 3,
            HeatLevel::Fire => 4,
        }
    }

    /// Quantize an averaged score back to a level.
    pub fn from_score(score: f64) -> Self {
        if score >= 3.5 {
            HeatLevel::Fire
        } else if score >= 2.5 {
            HeatLevel::Hot
        } else if score >= 1.5 {
            HeatLevel::Warm
        } else if score >= 0.5 {
            HeatLevel::Warming
        } else {
            HeatLevel::Cold
        }
    }

    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            HeatLevel::Cold => "cold",
            HeatLevel::Warming => "warming",
            HeatLevel::Warm => "warm",
            HeatLevel::Hot => "hot",
            HeatLevel::Fire => "fire",
        }
    }
}

/// Derived per-action activity metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatRecord {
    /// Action these metrics describe
    pub action_id: String,

    /// Most recent event timestamp, if any
    pub last_activity: Option<DateTime<Utc>>,

    /// Events within the rolling recent window (7 days by default)
    pub recent_count: u32,

    /// Consecutive calendar days with activity, walking back from
    /// `as_of`; a gap on the current day is forgiven
    pub streak: u32,

    /// Classification of `(days_since, streak)` at `as_of`
    pub level: HeatLevel,
}

/// Configuration for heat computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatConfig {
    /// Rolling window for `recent_count` (days)
    pub recent_window_days: i64,

    /// Hard cap on the streak walk (days). A streak longer than this
    /// is reported as the cap itself.
    pub streak_lookback_days: u32,

    /// Streak at or above which an action is `Fire` regardless of recency
    pub fire_streak: u32,

    /// `Hot` when last activity is at most this many days old
    pub hot_within_days: i64,

    /// `Warm` threshold (days)
    pub warm_within_days: i64,

    /// `Warming` threshold (days); older is `Cold`
    pub warming_within_days: i64,

    /// Offset from UTC for calendar-day boundaries (hours)
    pub timezone_offset_hours: i32,
}

impl Default for HeatConfig {
    fn default() -> Self {
        Self {
            recent_window_days: 7,
            streak_lookback_days: 30,
            fire_streak: 3,
            hot_within_days: 2,
            warm_within_days: 7,
            warming_within_days: 14,
            timezone_offset_hours: 0,
        }
    }
}

/// Whole days elapsed between the last activity and `as_of`.
///
/// `None` means the action has never seen activity, which classifies
/// as infinitely old.
pub fn days_since(last_activity: Option<DateTime<Utc>>, as_of: DateTime<Utc>) -> Option<i64> {
    last_activity.map(|ts| (as_of - ts).num_days().max(0))
}

/// Heat computation engine.
pub struct HeatEngine {
    config: HeatConfig,
}

impl HeatEngine {
    /// Create an engine with default config.
    pub fn new() -> Self {
        Self {
            config: HeatConfig::default(),
        }
    }

    /// Create an engine with custom config.
    pub fn with_config(config: HeatConfig) -> Self {
        Self { config }
    }

    /// Get the active configuration.
    pub fn config(&self) -> &HeatConfig {
        &self.config
    }

    /// Compute one [`HeatRecord`] per action that has at least one
    /// event.
    ///
    /// Actions absent from the result map have no activity at all and
    /// default to `Cold` with a zero streak at the consumer.
    pub fn compute(
        &self,
        events: &[ActivityEvent],
        as_of: DateTime<Utc>,
    ) -> HashMap<String, HeatRecord> {
        let recent_cutoff = as_of - Duration::days(self.config.recent_window_days);

        let mut by_action: HashMap<&str, Vec<DateTime<Utc>>> = HashMap::new();
        for event in events {
            by_action
                .entry(event.action_id.as_str())
                .or_default()
                .push(event.timestamp);
        }

        let mut records = HashMap::with_capacity(by_action.len());
        for (action_id, timestamps) in by_action {
            let last_activity = timestamps.iter().copied().max();
            let recent_count = timestamps.iter().filter(|ts| **ts >= recent_cutoff).count() as u32;
            let streak = self.streak(&timestamps, as_of);
            let level = self.level_for(days_since(last_activity, as_of), streak);

            records.insert(
                action_id.to_string(),
                HeatRecord {
                    action_id: action_id.to_string(),
                    last_activity,
                    recent_count,
                    streak,
                    level,
                },
            );
        }

        records
    }

    /// Classify `(days_since, streak)` into a heat level.
    ///
    /// A streak at or above the fire threshold overrides recency.
    pub fn level_for(&self, days_since: Option<i64>, streak: u32) -> HeatLevel {
        if streak >= self.config.fire_streak {
            return HeatLevel::Fire;
        }
        match days_since {
            Some(days) if days <= self.config.hot_within_days => HeatLevel::Hot,
            Some(days) if days <= self.config.warm_within_days => HeatLevel::Warm,
            Some(days) if days <= self.config.warming_within_days => HeatLevel::Warming,
            _ => HeatLevel::Cold,
        }
    }

    /// Count consecutive active calendar days, most recent first.
    ///
    /// Day boundaries are local midnights in the configured offset.
    /// Multiple events on one day count once. A day with no activity
    /// ends the streak, except the current day: the user may simply
    /// not have checked in yet today.
    fn streak(&self, timestamps: &[DateTime<Utc>], as_of: DateTime<Utc>) -> u32 {
        let shift = i64::from(self.config.timezone_offset_hours) * 3600;
        let local_secs = as_of.timestamp() + shift;
        let today_start = as_of.timestamp() - local_secs.rem_euclid(DAY_SECS);

        let mut streak = 0;
        for day in 0..self.config.streak_lookback_days {
            let start = today_start - i64::from(day) * DAY_SECS;
            let end = start + DAY_SECS;

            let has_activity = timestamps
                .iter()
                .any(|ts| ts.timestamp() >= start && ts.timestamp() < end);

            if has_activity {
                streak += 1;
            } else if day > 0 {
                break;
            }
        }

        streak
    }
}

impl Default for HeatEngine {
    fn default() -> Self {
        Self::new()
    }
}
