//! Gym Model
//!
//! Gyms on the map view: occupancy, self-reported busy level, what
//! people are training, and the house leaderboard of top lifters.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Self-reported crowding level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum BusyLevel {
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    #[strum(serialize = "Very High")]
    VeryHigh,
}

/// What members are currently training, as percentages
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ActivityBreakdown {
    pub arms: u32,
    pub legs: u32,
    pub cardio: u32,
    pub classes: u32,
    pub other: u32,
}

/// A gym's best lifters and their big-three numbers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopLifter {
    pub name: String,
    pub avatar: String,
    pub squat: u32,
    pub bench: u32,
    pub deadlift: u32,
}

impl TopLifter {
    pub fn total(&self) -> u32 {
        self.squat + self.bench + self.deadlift
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gym {
    pub id: String,
    pub name: String,
    pub address: String,
    pub distance: String,
    pub current_activity: u32,
    pub max_capacity: u32,
    pub busy_level: BusyLevel,
    pub activity_breakdown: ActivityBreakdown,
    pub top_lifters: Vec<TopLifter>,
}

impl Gym {
    /// Occupancy as a percentage of capacity, capped at 100
    pub fn occupancy_percent(&self) -> u32 {
        if self.max_capacity == 0 {
            return 0;
        }
        (self.current_activity * 100 / self.max_capacity).min(100)
    }
}
