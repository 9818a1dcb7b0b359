use indexmap::IndexMap;

use crate::models::Activity;

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: u32,
    participants: &'static [&'static str],
}

const SEED_ACTIVITIES: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Soccer Team",
        description: "Join the school soccer team and compete in matches",
        schedule: "Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 18,
        participants: &["lucas@mergington.edu", "mia@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball Club",
        description: "Practice basketball skills and play friendly games",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: &["liam@mergington.edu", "ava@mergington.edu"],
    },
    SeedActivity {
        name: "Art Workshop",
        description: "Explore painting, drawing, and sculpture techniques",
        schedule: "Mondays, 4:00 PM - 5:30 PM",
        max_participants: 16,
        participants: &["ella@mergington.edu", "jack@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Act in plays and learn stage performance skills",
        schedule: "Tuesdays, 3:30 PM - 5:00 PM",
        max_participants: 20,
        participants: &["chloe@mergington.edu", "noah@mergington.edu"],
    },
    SeedActivity {
        name: "Math Olympiad",
        description: "Prepare for math competitions and solve challenging problems",
        schedule: "Fridays, 2:00 PM - 3:30 PM",
        max_participants: 10,
        participants: &["oliver@mergington.edu", "grace@mergington.edu"],
    },
    SeedActivity {
        name: "Science Club",
        description: "Conduct experiments and explore scientific concepts",
        schedule: "Wednesdays, 3:30 PM - 5:00 PM",
        max_participants: 14,
        participants: &["benjamin@mergington.edu", "zoe@mergington.edu"],
    },
];

/// The activities the school offers at startup, in listing order.
pub fn seed_activities() -> IndexMap<String, Activity> {
    SEED_ACTIVITIES
        .iter()
        .map(|seed| {
            let activity = Activity::new(seed.description, seed.schedule, seed.max_participants)
                .with_participants(seed.participants.iter().copied());
            (seed.name.to_string(), activity)
        })
        .collect()
}
