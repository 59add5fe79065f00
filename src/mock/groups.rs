//! Seeded groups and chat history

use crate::models::group::{Group, Message};

pub fn groups() -> Vec<Group> {
    vec![
        Group {
            id: "1".to_string(),
            name: "Morning Crew".to_string(),
            description: "6am lifters, rain or shine".to_string(),
            avatar_emoji: "☀️".to_string(),
            join_code: "MORNCREW".to_string(),
            member_count: 8,
            current_streak: 12,
            best_streak: 21,
        },
        Group {
            id: "2".to_string(),
            name: "Fiji Fit".to_string(),
            description: "Island strength club".to_string(),
            avatar_emoji: "🦵".to_string(),
            join_code: "FIJIFIT1".to_string(),
            member_count: 5,
            current_streak: 7,
            best_streak: 14,
        },
        Group {
            id: "3".to_string(),
            name: "Gold's Gym Regulars".to_string(),
            description: "The usual suspects at Gold's".to_string(),
            avatar_emoji: "🏋️".to_string(),
            join_code: "GOLDSREG".to_string(),
            member_count: 12,
            current_streak: 23,
            best_streak: 30,
        },
    ]
}

/// Message history per group id
pub fn group_messages(group_id: &str) -> Vec<Message> {
    match group_id {
        "1" => vec![
            Message::new("Alex Chen", "🏋️", "Who's hitting the gym tomorrow at 6am?", "15m ago"),
            Message::new("Sarah Miller", "🏃‍♀️", "I'm in. Legs?", "12m ago"),
            Message::new("Alex Chen", "🏋️", "Legs it is 🦵", "10m ago"),
        ],
        "2" => vec![
            Message::new("Marcus Johnson", "💪", "New squat PR! 315 lbs", "1h ago"),
            Message::new("Emily Wong", "🎯", "LETS GO 🔥", "55m ago"),
        ],
        "3" => vec![
            Message::new("Jalen Chan", "🏋️", "Anyone free for a workout buddy session?", "3h ago"),
        ],
        _ => Vec::new(),
    }
}
