//! Community Service
//!
//! Gym map data with busy-level reports, the streak leaderboards, and
//! groups with their chat history. Gyms, group rosters, and messages
//! mutate in memory; leaderboards are ranked from the seeded boards on
//! every read.

use std::collections::HashMap;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::{Mutex, RwLock};

use crate::mock::{self, MockStore};
use crate::models::group::{generate_join_code, Group, Message};
use crate::models::gym::{BusyLevel, Gym};
use crate::models::leaderboard::{rank_by_streak, LeaderboardEntry, LeaderboardTab};

/// Service for gyms, leaderboards, and groups
#[derive(Clone)]
pub struct CommunityService {
    gyms: Arc<RwLock<Vec<Gym>>>,
    groups: Arc<RwLock<Vec<Group>>>,
    messages: Arc<RwLock<HashMap<String, Vec<Message>>>>,
    rng: Arc<Mutex<StdRng>>,
    store: Arc<MockStore>,
}

impl CommunityService {
    pub fn new(store: Arc<MockStore>) -> Self {
        let groups = mock::groups::groups();
        let messages = groups
            .iter()
            .map(|g| (g.id.clone(), mock::groups::group_messages(&g.id)))
            .collect();

        Self {
            gyms: Arc::new(RwLock::new(mock::gyms::gyms())),
            groups: Arc::new(RwLock::new(groups)),
            messages: Arc::new(RwLock::new(messages)),
            rng: Arc::new(Mutex::new(StdRng::from_entropy())),
            store,
        }
    }

    pub async fn gyms(&self) -> Vec<Gym> {
        self.gyms.read().await.clone()
    }

    /// Crowd-sourced busy report: overwrite the gym's level
    pub async fn report_busy_level(
        &self,
        gym_id: &str,
        level: BusyLevel,
    ) -> Result<Gym, CommunityServiceError> {
        let mut gyms = self.gyms.write().await;
        let gym = gyms
            .iter_mut()
            .find(|g| g.id == gym_id)
            .ok_or_else(|| CommunityServiceError::GymNotFound(gym_id.to_string()))?;

        gym.busy_level = level;
        tracing::info!(gym = %gym.name, level = %level, "Busy level reported");
        Ok(gym.clone())
    }

    /// One leaderboard tab, ranked by streak
    pub async fn leaderboard(&self, tab: LeaderboardTab) -> Vec<LeaderboardEntry> {
        let board = match tab {
            LeaderboardTab::Gym => self.store.gym_leaderboard.clone(),
            LeaderboardTab::Friends => self.store.friends_leaderboard.clone(),
        };
        rank_by_streak(board)
    }

    pub async fn groups(&self) -> Vec<Group> {
        self.groups.read().await.clone()
    }

    /// Create a group with a fresh join code; the creator is the sole
    /// member
    pub async fn create_group(
        &self,
        name: &str,
        description: &str,
        avatar_emoji: &str,
    ) -> Result<Group, CommunityServiceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CommunityServiceError::EmptyGroupName);
        }

        let join_code = {
            let mut rng = self.rng.lock().await;
            generate_join_code(&mut *rng)
        };

        let mut groups = self.groups.write().await;
        let group = Group {
            id: (groups.len() + 1).to_string(),
            name: name.to_string(),
            description: description.trim().to_string(),
            avatar_emoji: avatar_emoji.to_string(),
            join_code,
            member_count: 1,
            current_streak: 0,
            best_streak: 0,
        };

        tracing::info!(group = %group.name, join_code = %group.join_code, "Group created");

        self.messages
            .write()
            .await
            .insert(group.id.clone(), Vec::new());
        groups.push(group.clone());
        Ok(group)
    }

    /// Join a group by its code; the member count grows by one
    pub async fn join_group(&self, join_code: &str) -> Result<Group, CommunityServiceError> {
        let code = join_code.trim().to_uppercase();

        let mut groups = self.groups.write().await;
        let group = groups
            .iter_mut()
            .find(|g| g.join_code == code)
            .ok_or(CommunityServiceError::InvalidJoinCode(code))?;

        group.member_count += 1;
        Ok(group.clone())
    }

    pub async fn group_messages(
        &self,
        group_id: &str,
    ) -> Result<Vec<Message>, CommunityServiceError> {
        self.ensure_group(group_id).await?;
        Ok(self
            .messages
            .read()
            .await
            .get(group_id)
            .cloned()
            .unwrap_or_default())
    }

    /// Append a chat message and return it
    pub async fn post_message(
        &self,
        group_id: &str,
        sender: &str,
        avatar: &str,
        content: &str,
    ) -> Result<Message, CommunityServiceError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(CommunityServiceError::EmptyMessage);
        }
        self.ensure_group(group_id).await?;

        let message = Message::new(sender, avatar, content, "now");
        self.messages
            .write()
            .await
            .entry(group_id.to_string())
            .or_default()
            .push(message.clone());
        Ok(message)
    }

    async fn ensure_group(&self, group_id: &str) -> Result<(), CommunityServiceError> {
        let groups = self.groups.read().await;
        if groups.iter().any(|g| g.id == group_id) {
            Ok(())
        } else {
            Err(CommunityServiceError::GroupNotFound(group_id.to_string()))
        }
    }
}

/// Community service errors
#[derive(Debug, thiserror::Error)]
pub enum CommunityServiceError {
    #[error("Gym '{0}' not found")]
    GymNotFound(String),

    #[error("Group '{0}' not found")]
    GroupNotFound(String),

    #[error("No group matches join code '{0}'")]
    InvalidJoinCode(String),

    #[error("Group name cannot be empty")]
    EmptyGroupName,

    #[error("Message cannot be empty")]
    EmptyMessage,
}
