use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

use crate::generator::problem::Mode;
use crate::session::state::Theme;

/// Storage key holding the whole achievement log as one JSON array.
pub const ACHIEVEMENTS_KEY: &str = "achievements";

/// Where an unparsable achievement log is kept before it is replaced.
pub const ACHIEVEMENTS_BACKUP_KEY: &str = "achievements-corrupt";

/// One persisted milestone. Field names match the stored JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementRecord {
    pub date: String,
    pub mode: Mode,
    pub theme: Theme,
    // Entries written before milestones were tracked count as the first one.
    #[serde(default = "default_milestone")]
    pub milestone: u32,
    /// Creation instant, epoch milliseconds.
    pub timestamp: i64,
}

fn default_milestone() -> u32 {
    50
}

impl AchievementRecord {
    pub fn new<Tz: TimeZone>(mode: Mode, theme: Theme, milestone: u32, at: DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            date: at.format("%-m/%-d/%Y").to_string(),
            mode,
            theme,
            milestone,
            timestamp: at.timestamp_millis(),
        }
    }

    pub fn now(mode: Mode, theme: Theme, milestone: u32) -> Self {
        Self::new(mode, theme, milestone, Local::now())
    }

    pub fn summary(&self) -> String {
        format!(
            "{} {} - {} Correct Answers!",
            self.theme.icon(),
            self.mode.label(),
            self.milestone
        )
    }
}

/// Display order: newest first. Storage order is untouched.
pub fn newest_first(records: &[AchievementRecord]) -> Vec<AchievementRecord> {
    let mut sorted = records.to_vec();
    // Milestones only grow, so they break same-millisecond ties.
    sorted.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then(b.milestone.cmp(&a.milestone))
    });
    sorted
}
