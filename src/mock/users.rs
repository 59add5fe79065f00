//! Seeded users: registered accounts for sign-up checks and the
//! viewer's friends list for nudges

use serde::{Deserialize, Serialize};

use crate::models::signup::ExistingUser;

/// Accounts already registered, checked during sign-up
pub fn existing_users() -> Vec<ExistingUser> {
    vec![
        ExistingUser::new("john@example.com", "+1234567890", "john_doe"),
        ExistingUser::new("jane@example.com", "+0987654321", "jane_smith"),
    ]
}

/// A friend on the groups screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Friend {
    pub id: String,
    pub name: String,
    pub username: String,
    pub avatar: String,
    pub status: String,
    pub streak: u32,
    pub workouts_this_week: u32,
}

fn friend(id: &str, name: &str, username: &str, avatar: &str, status: &str, streak: u32, weekly: u32) -> Friend {
    Friend {
        id: id.to_string(),
        name: name.to_string(),
        username: username.to_string(),
        avatar: avatar.to_string(),
        status: status.to_string(),
        streak,
        workouts_this_week: weekly,
    }
}

pub fn friends() -> Vec<Friend> {
    vec![
        friend("1", "Jalen Chan", "jalenchan2", "🏋️", "working-out", 5, 3),
        friend("2", "Sarah Miller", "sarahmiller", "🏃‍♀️", "online", 3, 2),
        friend("3", "Marcus Johnson", "marcusjohnson", "💪", "working-out", 7, 4),
        friend("4", "Emily Wong", "emilywong", "🎯", "offline", 2, 1),
    ]
}
