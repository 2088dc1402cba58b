//! Activity snapshots used across tests
//!
//! Bodies are raw JSON strings so key order survives the trip through the
//! mock server.

pub const CHESS_ONE_PARTICIPANT: &str = r#"{
    "Chess": {
        "description": "d",
        "schedule": "s",
        "max_participants": 2,
        "participants": ["a@x.com"]
    }
}"#;

pub const CHESS_TWO_PARTICIPANTS: &str = r#"{
    "Chess": {
        "description": "d",
        "schedule": "s",
        "max_participants": 2,
        "participants": ["a@x.com", "b@x.com"]
    }
}"#;

pub const CHESS_EMPTY: &str = r#"{
    "Chess": {
        "description": "d",
        "schedule": "s",
        "max_participants": 2,
        "participants": []
    }
}"#;

/// Three school activities, deliberately not in alphabetical order
pub const SCHOOL_ACTIVITIES: &str = r#"{
    "Programming Class": {
        "description": "Learn programming fundamentals and build software projects",
        "schedule": "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        "max_participants": 20,
        "participants": ["emma@mergington.edu", "sophia@mergington.edu"]
    },
    "Chess Club": {
        "description": "Learn strategies and compete in chess tournaments",
        "schedule": "Fridays, 3:30 PM - 5:00 PM",
        "max_participants": 12,
        "participants": ["michael@mergington.edu", "daniel@mergington.edu"]
    },
    "Gym Class": {
        "description": "Physical education and sports activities",
        "schedule": "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        "max_participants": 30,
        "participants": []
    }
}"#;
