//! Leaderboard Model
//!
//! Ranked entries for the gym and friends tabs. Ordering is by streak
//! descending, with ranks reassigned after sorting.

use serde::{Deserialize, Serialize};

/// Which leaderboard to show
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardTab {
    #[default]
    Gym,
    Friends,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub avatar: String,
    pub level: u32,
    pub weekly_workouts: u32,
    pub streak: u32,
    #[serde(default)]
    pub is_current_user: bool,
}

/// Sort by streak descending and reassign ranks starting at 1
pub fn rank_by_streak(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| b.streak.cmp(&a.streak));
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = index as u32 + 1;
    }
    entries
}
