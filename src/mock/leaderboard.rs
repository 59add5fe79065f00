//! Seeded leaderboard entries

use crate::models::leaderboard::LeaderboardEntry;

fn entry(name: &str, avatar: &str, level: u32, weekly: u32, streak: u32) -> LeaderboardEntry {
    LeaderboardEntry {
        rank: 0,
        name: name.to_string(),
        avatar: avatar.to_string(),
        level,
        weekly_workouts: weekly,
        streak,
        is_current_user: name == "You",
    }
}

/// Members of the viewer's gym. Unranked; ranks are assigned at query
/// time after sorting by streak.
pub fn gym_leaderboard() -> Vec<LeaderboardEntry> {
    vec![
        entry("Marcus Strong", "💪", 32, 7, 92),
        entry("Lisa Chen", "🔥", 28, 6, 67),
        entry("Jake Power", "⚡", 26, 6, 53),
        entry("Sarah Fit", "💎", 24, 5, 45),
        entry("Tom Lift", "🎯", 22, 5, 38),
        entry("You", "🏋️", 12, 4, 23),
        entry("Nina Strong", "✨", 18, 4, 28),
        entry("Chris Bulk", "⭐", 17, 3, 22),
    ]
}

/// The viewer plus accepted friends
pub fn friends_leaderboard() -> Vec<LeaderboardEntry> {
    vec![
        entry("Ryan Mitchell", "🔥", 15, 6, 32),
        entry("Emma Davis", "💫", 14, 5, 28),
        entry("Chris Brown", "⚡", 13, 5, 25),
        entry("You", "🏋️", 12, 4, 23),
        entry("Olivia Wilson", "✨", 11, 3, 18),
        entry("Jake Taylor", "🎯", 10, 3, 12),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::leaderboard::rank_by_streak;

    #[test]
    fn test_current_user_is_marked_once_per_board() {
        for board in [gym_leaderboard(), friends_leaderboard()] {
            assert_eq!(board.iter().filter(|e| e.is_current_user).count(), 1);
        }
    }

    #[test]
    fn test_gym_board_ranks_by_streak() {
        let ranked = rank_by_streak(gym_leaderboard());
        assert_eq!(ranked[0].name, "Marcus Strong");
        // "Nina Strong" (28) outranks "You" (23) once sorted
        assert!(ranked.iter().position(|e| e.name == "Nina Strong").unwrap()
            < ranked.iter().position(|e| e.is_current_user).unwrap());
    }
}
