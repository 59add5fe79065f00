//! Models module for Spottr
//!
//! Contains all data models and their validation logic.

pub mod exercise;
pub mod feed;
pub mod group;
pub mod gym;
pub mod leaderboard;
pub mod signup;
pub mod template;
pub mod workout;
