//! Group and Chat Model
//!
//! Workout groups with join codes, group streaks, and in-memory
//! message history. Messaging is plain request/response; there is no
//! real-time transport.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub description: String,
    pub avatar_emoji: String,
    pub join_code: String,
    pub member_count: u32,
    pub current_streak: u32,
    pub best_streak: u32,
}

/// One chat message. Seeded messages carry display-ready timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub sender: String,
    pub avatar: String,
    pub content: String,
    pub timestamp: String,
}

impl Message {
    pub fn new(sender: &str, avatar: &str, content: &str, timestamp: &str) -> Self {
        Self {
            sender: sender.to_string(),
            avatar: avatar.to_string(),
            content: content.to_string(),
            timestamp: timestamp.to_string(),
        }
    }
}

/// Eight uppercase alphanumeric characters, same shape the original
/// assigns on group creation
pub fn generate_join_code<R: Rng>(rng: &mut R) -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    (0..8)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
