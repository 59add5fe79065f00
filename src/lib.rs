//! Spottr backend library
//!
//! A fitness social prototype over in-memory mock data: the workout
//! builder with live sessions, the social feeds, gym map data,
//! leaderboards, groups, and sign-up validation.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod mock;
pub mod models;
pub mod services;
