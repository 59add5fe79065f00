//! Seeded gyms

use crate::models::gym::{ActivityBreakdown, BusyLevel, Gym, TopLifter};

fn lifter(name: &str, avatar: &str, squat: u32, bench: u32, deadlift: u32) -> TopLifter {
    TopLifter {
        name: name.to_string(),
        avatar: avatar.to_string(),
        squat,
        bench,
        deadlift,
    }
}

pub fn gyms() -> Vec<Gym> {
    vec![
        Gym {
            id: "1".to_string(),
            name: "Lifetime Fitness".to_string(),
            address: "123 Main St".to_string(),
            distance: "0.5 mi".to_string(),
            current_activity: 47,
            max_capacity: 150,
            busy_level: BusyLevel::Moderate,
            activity_breakdown: ActivityBreakdown {
                arms: 30,
                legs: 25,
                cardio: 20,
                classes: 15,
                other: 10,
            },
            top_lifters: vec![
                lifter("Tyler Chen", "👑", 495, 365, 545),
                lifter("Sarah Kim", "💎", 405, 225, 475),
                lifter("Mike Torres", "🔥", 385, 315, 455),
                lifter("Emma Wilson", "✨", 315, 205, 405),
                lifter("Chris Anderson", "⚡", 365, 295, 425),
            ],
        },
        Gym {
            id: "2".to_string(),
            name: "Gold's Gym".to_string(),
            address: "456 Oak Ave".to_string(),
            distance: "1.2 mi".to_string(),
            current_activity: 89,
            max_capacity: 120,
            busy_level: BusyLevel::High,
            activity_breakdown: ActivityBreakdown {
                arms: 35,
                legs: 20,
                cardio: 25,
                classes: 10,
                other: 10,
            },
            top_lifters: vec![
                lifter("Jessica Park", "⚡", 455, 295, 500),
                lifter("David Wu", "🎯", 385, 275, 465),
                lifter("Emma Stone", "✨", 295, 225, 385),
                lifter("Ryan Lee", "🔥", 425, 315, 485),
                lifter("Sophia Martinez", "💎", 335, 245, 415),
            ],
        },
        Gym {
            id: "3".to_string(),
            name: "LA Fitness".to_string(),
            address: "789 Pine Rd".to_string(),
            distance: "2.1 mi".to_string(),
            current_activity: 23,
            max_capacity: 100,
            busy_level: BusyLevel::Low,
            activity_breakdown: ActivityBreakdown {
                arms: 25,
                legs: 30,
                cardio: 25,
                classes: 10,
                other: 10,
            },
            top_lifters: vec![
                lifter("Chris Lee", "⭐", 405, 285, 475),
                lifter("Nina Garcia", "🌟", 315, 205, 385),
                lifter("Alex Johnson", "💪", 365, 275, 425),
                lifter("Mia Thompson", "✨", 285, 195, 365),
                lifter("Jake Wilson", "🔥", 395, 295, 455),
            ],
        },
        Gym {
            id: "4".to_string(),
            name: "Equinox".to_string(),
            address: "321 Elm St".to_string(),
            distance: "3.5 mi".to_string(),
            current_activity: 102,
            max_capacity: 130,
            busy_level: BusyLevel::VeryHigh,
            activity_breakdown: ActivityBreakdown {
                arms: 30,
                legs: 25,
                cardio: 20,
                classes: 15,
                other: 10,
            },
            top_lifters: vec![
                lifter("Ryan Mitchell", "🔥", 475, 335, 520),
                lifter("Olivia Wilson", "✨", 365, 235, 445),
                lifter("Jake Taylor", "🎯", 405, 295, 485),
                lifter("Isabella Brown", "💎", 325, 215, 405),
                lifter("Ethan Davis", "⚡", 445, 315, 505),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_gym_has_five_top_lifters() {
        for gym in gyms() {
            assert_eq!(gym.top_lifters.len(), 5, "{}", gym.name);
        }
    }
}
