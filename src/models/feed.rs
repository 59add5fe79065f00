//! Feed Post Model
//!
//! Posts on the main and friends feeds, with the reaction toggling
//! rules the legacy reaction endpoint implements: reacting with the
//! same kind removes it, a different kind replaces it, otherwise it
//! is added.

use serde::{Deserialize, Serialize};
use strum::Display;

/// What a post announces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PostKind {
    Workout,
    Pr,
    Streak,
    Checkin,
    Post,
}

/// Available reaction kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionKind {
    Heart,
    ThumbsUp,
    Flex,
    Fire,
}

/// Per-kind reaction tallies
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ReactionCounts {
    pub heart: u32,
    pub thumbs_up: u32,
    pub flex: u32,
    pub fire: u32,
}

impl ReactionCounts {
    pub fn new(heart: u32, thumbs_up: u32, flex: u32, fire: u32) -> Self {
        Self {
            heart,
            thumbs_up,
            flex,
            fire,
        }
    }

    pub fn count(&self, kind: ReactionKind) -> u32 {
        match kind {
            ReactionKind::Heart => self.heart,
            ReactionKind::ThumbsUp => self.thumbs_up,
            ReactionKind::Flex => self.flex,
            ReactionKind::Fire => self.fire,
        }
    }

    fn slot(&mut self, kind: ReactionKind) -> &mut u32 {
        match kind {
            ReactionKind::Heart => &mut self.heart,
            ReactionKind::ThumbsUp => &mut self.thumbs_up,
            ReactionKind::Flex => &mut self.flex,
            ReactionKind::Fire => &mut self.fire,
        }
    }

    fn increment(&mut self, kind: ReactionKind) {
        *self.slot(kind) += 1;
    }

    fn decrement(&mut self, kind: ReactionKind) {
        let slot = self.slot(kind);
        *slot = slot.saturating_sub(1);
    }
}

/// What a reaction toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionStatus {
    Added,
    Changed,
    Removed,
}

/// Response payload the legacy script reads: `{status, count, active}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionOutcome {
    pub status: ReactionStatus,
    #[serde(rename = "type")]
    pub kind: ReactionKind,
    pub count: u32,
    pub active: bool,
}

/// Who posted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostAuthor {
    pub name: String,
    pub avatar: String,
    pub streak: u32,
}

/// Workout stats attached to a workout/checkin post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostStats {
    pub exercises: u32,
    pub sets: u32,
    pub duration: String,
}

/// PR details attached to a pr post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrInfo {
    pub exercise: String,
    pub weight: String,
}

/// A comment appended at runtime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub content: String,
}

/// A feed post. Seeded posts carry display-ready timestamps since
/// there is no real backend behind them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author: PostAuthor,
    pub kind: PostKind,
    pub timestamp: String,
    pub location: Option<String>,
    pub content: String,
    pub workout_name: Option<String>,
    pub stats: Option<PostStats>,
    pub pr_info: Option<PrInfo>,
    pub streak_days: Option<u32>,
    pub reactions: ReactionCounts,
    pub user_reaction: Option<ReactionKind>,
    pub comment_count: u32,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    /// Toggle the viewer's reaction
    pub fn react(&mut self, kind: ReactionKind) -> ReactionOutcome {
        let status = match self.user_reaction {
            Some(current) if current == kind => {
                self.reactions.decrement(kind);
                self.user_reaction = None;
                ReactionStatus::Removed
            }
            Some(current) => {
                self.reactions.decrement(current);
                self.reactions.increment(kind);
                self.user_reaction = Some(kind);
                ReactionStatus::Changed
            }
            None => {
                self.reactions.increment(kind);
                self.user_reaction = Some(kind);
                ReactionStatus::Added
            }
        };

        ReactionOutcome {
            status,
            kind,
            count: self.reactions.count(kind),
            active: self.user_reaction == Some(kind),
        }
    }

    /// Append a comment
    pub fn add_comment(&mut self, author: &str, content: &str) {
        self.comments.push(Comment {
            author: author.to_string(),
            content: content.to_string(),
        });
        self.comment_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Post {
        Post {
            id: "f1".to_string(),
            author: PostAuthor {
                name: "Alex Chen".to_string(),
                avatar: "🏋️".to_string(),
                streak: 23,
            },
            kind: PostKind::Workout,
            timestamp: "2h ago".to_string(),
            location: Some("Gold's Gym".to_string()),
            content: "Chest day".to_string(),
            workout_name: Some("Chest Day".to_string()),
            stats: None,
            pr_info: None,
            streak_days: None,
            reactions: ReactionCounts::new(32, 10, 15, 8),
            user_reaction: None,
            comment_count: 12,
            comments: Vec::new(),
        }
    }

    #[test]
    fn test_react_add_then_remove() {
        let mut post = post();

        let outcome = post.react(ReactionKind::Fire);
        assert_eq!(outcome.status, ReactionStatus::Added);
        assert_eq!(outcome.count, 9);
        assert!(outcome.active);

        let outcome = post.react(ReactionKind::Fire);
        assert_eq!(outcome.status, ReactionStatus::Removed);
        assert_eq!(outcome.count, 8);
        assert!(!outcome.active);
        assert!(post.user_reaction.is_none());
    }

    #[test]
    fn test_react_change_moves_the_count() {
        let mut post = post();

        post.react(ReactionKind::Heart);
        let outcome = post.react(ReactionKind::Flex);

        assert_eq!(outcome.status, ReactionStatus::Changed);
        assert_eq!(outcome.count, 16);
        assert!(outcome.active);
        assert_eq!(post.reactions.heart, 32, "previous reaction is released");
    }

    #[test]
    fn test_remove_never_underflows() {
        let mut post = post();
        post.reactions = ReactionCounts::default();

        post.react(ReactionKind::Heart);
        let outcome = post.react(ReactionKind::Heart);
        assert_eq!(outcome.count, 0);
    }

    #[test]
    fn test_add_comment() {
        let mut post = post();
        post.add_comment("You", "Huge!");

        assert_eq!(post.comment_count, 13);
        assert_eq!(post.comments.len(), 1);
    }
}
