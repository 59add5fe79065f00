//! Seeded feed posts

use crate::models::feed::{
    Post, PostAuthor, PostKind, PostStats, PrInfo, ReactionCounts, ReactionKind,
};

fn author(name: &str, avatar: &str, streak: u32) -> PostAuthor {
    PostAuthor {
        name: name.to_string(),
        avatar: avatar.to_string(),
        streak,
    }
}

/// Global posts from around the world
pub fn main_feed_posts() -> Vec<Post> {
    vec![
        Post {
            id: "m1".to_string(),
            author: author("David Kim", "⚡", 42),
            kind: PostKind::Workout,
            timestamp: "1h ago".to_string(),
            location: Some("Crunch Fitness - NYC".to_string()),
            content: "Early morning grind 💪".to_string(),
            workout_name: Some("Full Body".to_string()),
            stats: None,
            pr_info: None,
            streak_days: None,
            reactions: ReactionCounts::new(124, 56, 89, 42),
            user_reaction: None,
            comment_count: 34,
            comments: Vec::new(),
        },
        Post {
            id: "m2".to_string(),
            author: author("Jennifer Lopez", "🌟", 100),
            kind: PostKind::Streak,
            timestamp: "3h ago".to_string(),
            location: None,
            content: "100 days straight! Never giving up 🔥🔥".to_string(),
            workout_name: None,
            stats: None,
            pr_info: None,
            streak_days: Some(100),
            reactions: ReactionCounts::new(256, 145, 78, 189),
            user_reaction: Some(ReactionKind::Fire),
            comment_count: 67,
            comments: Vec::new(),
        },
        Post {
            id: "m3".to_string(),
            author: author("Carlos Rivera", "🏆", 28),
            kind: PostKind::Pr,
            timestamp: "5h ago".to_string(),
            location: Some("Iron Temple Gym".to_string()),
            content: "Finally hit 500 lbs on squat! 🎯".to_string(),
            workout_name: Some("Leg Day".to_string()),
            stats: None,
            pr_info: Some(PrInfo {
                exercise: "Squat".to_string(),
                weight: "500 lbs".to_string(),
            }),
            streak_days: None,
            reactions: ReactionCounts::new(187, 98, 134, 76),
            user_reaction: Some(ReactionKind::Flex),
            comment_count: 45,
            comments: Vec::new(),
        },
    ]
}

/// Posts from friends only
pub fn friends_feed_posts() -> Vec<Post> {
    vec![
        Post {
            id: "f1".to_string(),
            author: author("Alex Chen", "🏋️", 23),
            kind: PostKind::Workout,
            timestamp: "2h ago".to_string(),
            location: Some("Gold's Gym".to_string()),
            content: "Day 23 - Chest and shoulders feeling strong today 💪".to_string(),
            workout_name: Some("Chest Day".to_string()),
            stats: Some(PostStats {
                exercises: 8,
                sets: 24,
                duration: "1h 15m".to_string(),
            }),
            pr_info: None,
            streak_days: None,
            reactions: ReactionCounts::new(32, 10, 15, 8),
            user_reaction: Some(ReactionKind::Flex),
            comment_count: 12,
            comments: Vec::new(),
        },
        Post {
            id: "f2".to_string(),
            author: author("Sarah Miller", "🏃‍♀️", 50),
            kind: PostKind::Streak,
            timestamp: "4h ago".to_string(),
            location: None,
            content: "Hit 50 days in a row! Not stopping now 🔥".to_string(),
            workout_name: None,
            stats: None,
            pr_info: None,
            streak_days: Some(50),
            reactions: ReactionCounts::new(45, 20, 12, 32),
            user_reaction: Some(ReactionKind::Fire),
            comment_count: 23,
            comments: Vec::new(),
        },
        Post {
            id: "f3".to_string(),
            author: author("Marcus Johnson", "💪", 15),
            kind: PostKind::Pr,
            timestamp: "6h ago".to_string(),
            location: Some("LA Fitness".to_string()),
            content: "New deadlift PR! Been working towards this for months".to_string(),
            workout_name: Some("Back & Deadlifts".to_string()),
            stats: None,
            pr_info: Some(PrInfo {
                exercise: "Deadlift".to_string(),
                weight: "405 lbs".to_string(),
            }),
            streak_days: None,
            reactions: ReactionCounts::new(60, 35, 48, 25),
            user_reaction: Some(ReactionKind::Heart),
            comment_count: 28,
            comments: Vec::new(),
        },
        Post {
            id: "f4".to_string(),
            author: author("Emily Wong", "🎯", 7),
            kind: PostKind::Checkin,
            timestamp: "8h ago".to_string(),
            location: Some("Equinox".to_string()),
            content: "Morning workout done ✅ Legs feeling it".to_string(),
            workout_name: Some("Leg Day".to_string()),
            stats: Some(PostStats {
                exercises: 6,
                sets: 18,
                duration: "55m".to_string(),
            }),
            pr_info: None,
            streak_days: None,
            reactions: ReactionCounts::new(28, 18, 10, 8),
            user_reaction: None,
            comment_count: 8,
            comments: Vec::new(),
        },
    ]
}
