//! Mock Data Stores
//!
//! Static seeded collections standing in for a real backend. Built
//! once at startup; services clone what they need to mutate and read
//! the rest in place.

pub mod exercises;
pub mod feed;
pub mod groups;
pub mod gyms;
pub mod leaderboard;
pub mod templates;
pub mod users;

use crate::models::exercise::Exercise;
use crate::models::leaderboard::LeaderboardEntry;
use crate::models::signup::ExistingUser;
use crate::models::template::WorkoutTemplate;
use users::Friend;

/// Everything seeded at startup that stays read-only
#[derive(Debug, Clone)]
pub struct MockStore {
    pub exercises: Vec<Exercise>,
    pub templates: Vec<WorkoutTemplate>,
    pub gym_leaderboard: Vec<LeaderboardEntry>,
    pub friends_leaderboard: Vec<LeaderboardEntry>,
    pub existing_users: Vec<ExistingUser>,
    pub friends: Vec<Friend>,
}

impl MockStore {
    pub fn seed() -> Self {
        Self {
            exercises: exercises::exercise_catalog(),
            templates: templates::workout_templates(),
            gym_leaderboard: leaderboard::gym_leaderboard(),
            friends_leaderboard: leaderboard::friends_leaderboard(),
            existing_users: users::existing_users(),
            friends: users::friends(),
        }
    }

    pub fn exercise(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn template(&self, id: &str) -> Option<&WorkoutTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn friend(&self, id: &str) -> Option<&Friend> {
        self.friends.iter().find(|f| f.id == id)
    }

    /// Catalog entries matching the search box, all when empty
    pub fn search_exercises(&self, query: &str) -> Vec<&Exercise> {
        if query.trim().is_empty() {
            return self.exercises.iter().collect();
        }
        self.exercises.iter().filter(|e| e.matches(query)).collect()
    }
}
