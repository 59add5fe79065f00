//! Feed Service
//!
//! Mutable state behind the social feeds: reaction tallies, comments
//! appended during the session, and friend nudges. Posts are seeded
//! from the mock data at startup and reset when the process restarts.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::mock::{self, MockStore};
use crate::models::feed::{Post, ReactionKind, ReactionOutcome};

/// Which feed the viewer is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedTab {
    #[default]
    Main,
    Friends,
}

/// Acknowledgement for a nudge
#[derive(Debug, Clone, Serialize)]
pub struct NudgeReceipt {
    pub status: String,
    pub friend: String,
}

/// Service managing feed posts and reactions
#[derive(Clone)]
pub struct FeedService {
    main_posts: Arc<RwLock<Vec<Post>>>,
    friends_posts: Arc<RwLock<Vec<Post>>>,
    store: Arc<MockStore>,
}

impl FeedService {
    pub fn new(store: Arc<MockStore>) -> Self {
        Self {
            main_posts: Arc::new(RwLock::new(mock::feed::main_feed_posts())),
            friends_posts: Arc::new(RwLock::new(mock::feed::friends_feed_posts())),
            store,
        }
    }

    /// Posts for one feed tab
    pub async fn feed(&self, tab: FeedTab) -> Vec<Post> {
        match tab {
            FeedTab::Main => self.main_posts.read().await.clone(),
            FeedTab::Friends => self.friends_posts.read().await.clone(),
        }
    }

    /// Toggle the viewer's reaction on a post, whichever feed it is on
    pub async fn react(
        &self,
        post_id: &str,
        kind: ReactionKind,
    ) -> Result<ReactionOutcome, FeedServiceError> {
        self.with_post(post_id, |post| post.react(kind)).await
    }

    /// Append a comment and return the updated post
    pub async fn add_comment(
        &self,
        post_id: &str,
        author: &str,
        content: &str,
    ) -> Result<Post, FeedServiceError> {
        self.with_post(post_id, |post| {
            post.add_comment(author, content);
            post.clone()
        })
        .await
    }

    /// Nudge a friend to get a workout in
    pub async fn nudge(&self, friend_id: &str) -> Result<NudgeReceipt, FeedServiceError> {
        let friend = self
            .store
            .friend(friend_id)
            .ok_or_else(|| FeedServiceError::FriendNotFound(friend_id.to_string()))?;

        tracing::info!(friend = %friend.name, "Nudge sent");

        Ok(NudgeReceipt {
            status: "nudged".to_string(),
            friend: friend.name.clone(),
        })
    }

    async fn with_post<F, T>(&self, post_id: &str, apply: F) -> Result<T, FeedServiceError>
    where
        F: FnOnce(&mut Post) -> T,
    {
        {
            let mut posts = self.main_posts.write().await;
            if let Some(post) = posts.iter_mut().find(|p| p.id == post_id) {
                return Ok(apply(post));
            }
        }

        let mut posts = self.friends_posts.write().await;
        match posts.iter_mut().find(|p| p.id == post_id) {
            Some(post) => Ok(apply(post)),
            None => Err(FeedServiceError::PostNotFound(post_id.to_string())),
        }
    }
}

/// Feed service errors
#[derive(Debug, thiserror::Error)]
pub enum FeedServiceError {
    #[error("Post '{0}' not found")]
    PostNotFound(String),

    #[error("Friend '{0}' not found")]
    FriendNotFound(String),
}
