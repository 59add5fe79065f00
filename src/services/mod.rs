//! Services module for Spottr
//!
//! Contains all business logic and service implementations.

pub mod clock;
pub mod community_service;
pub mod feed_service;
pub mod workout_service;

// Re-export commonly used services
pub use clock::{Clock, ManualClock, SystemClock};
pub use community_service::{CommunityService, CommunityServiceError};
pub use feed_service::{FeedService, FeedServiceError, FeedTab, NudgeReceipt};
pub use workout_service::{SessionView, WorkoutService, WorkoutServiceError};
