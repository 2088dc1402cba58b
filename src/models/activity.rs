//! Activity model
//!
//! `GET /activities` returns a JSON object keyed by activity name. The board
//! shows activities in the order the server sent them, so the snapshot keeps
//! that order instead of collecting into a hash map.

use std::fmt;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::ser::SerializeMap;

/// Activity details as sent by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

/// A named activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub details: ActivityDetails,
}

impl Activity {
    pub fn new(name: impl Into<String>, details: ActivityDetails) -> Self {
        Self { name: name.into(), details }
    }

    /// Remaining capacity; negative if the server reports more participants than spots
    pub fn available_spots(&self) -> i64 {
        i64::from(self.details.max_participants) - self.details.participants.len() as i64
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.details.participants.iter().any(|p| p == email)
    }
}

/// Snapshot of all activities from the most recent fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Activities {
    entries: Vec<Activity>,
}

impl Activities {
    pub fn new(entries: Vec<Activity>) -> Self {
        Self { entries }
    }

    /// Look up an activity by name
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries.iter().find(|a| a.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|a| a.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Activities {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, ActivityDetails)> for Activities {
    fn from_iter<I: IntoIterator<Item = (String, ActivityDetails)>>(iter: I) -> Self {
        let mut activities = Activities::default();
        for (name, details) in iter {
            activities.upsert(name, details);
        }
        activities
    }
}

impl Activities {
    // A repeated key replaces the earlier entry in place, like a JSON object.
    fn upsert(&mut self, name: String, details: ActivityDetails) {
        match self.entries.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.details = details,
            None => self.entries.push(Activity { name, details }),
        }
    }
}

impl<'de> Deserialize<'de> for Activities {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ActivitiesVisitor;

        impl<'de> Visitor<'de> for ActivitiesVisitor {
            type Value = Activities;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity details")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Activities, M::Error> {
                let mut activities = Activities {
                    entries: Vec::with_capacity(map.size_hint().unwrap_or(0)),
                };
                while let Some((name, details)) = map.next_entry::<String, ActivityDetails>()? {
                    activities.upsert(name, details);
                }
                Ok(activities)
            }
        }

        deserializer.deserialize_map(ActivitiesVisitor)
    }
}

impl Serialize for Activities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for activity in &self.entries {
            map.serialize_entry(&activity.name, &activity.details)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_keeps_server_order() {
        let json = r#"{
            "Programming Class": {"description": "p", "schedule": "Tue", "max_participants": 20, "participants": []},
            "Chess Club": {"description": "c", "schedule": "Fri", "max_participants": 12, "participants": ["michael@mergington.edu"]},
            "Art Club": {"description": "a", "schedule": "Thu", "max_participants": 15, "participants": []}
        }"#;
        let activities: Activities = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = activities.names().collect();
        assert_eq!(names, vec!["Programming Class", "Chess Club", "Art Club"]);
        assert!(activities.get("Chess Club").unwrap().has_participant("michael@mergington.edu"));
    }

    #[test]
    fn test_missing_participants_defaults_to_empty() {
        let json = r#"{"Chess": {"description": "d", "schedule": "s", "max_participants": 2}}"#;
        let activities: Activities = serde_json::from_str(json).unwrap();
        assert!(activities.get("Chess").unwrap().details.participants.is_empty());
    }

    #[test]
    fn test_rejects_non_object_payload() {
        assert!(serde_json::from_str::<Activities>("[]").is_err());
        assert!(serde_json::from_str::<Activities>(r#"{"Chess": 1}"#).is_err());
    }

    #[test]
    fn test_available_spots() {
        let activity = Activity::new("Chess", ActivityDetails {
            description: "d".into(),
            schedule: "s".into(),
            max_participants: 2,
            participants: vec!["a@x.com".into()],
        });
        assert_eq!(activity.available_spots(), 1);

        let overfull = Activity::new("Gym", ActivityDetails {
            description: "d".into(),
            schedule: "s".into(),
            max_participants: 1,
            participants: vec!["a@x.com".into(), "b@x.com".into()],
        });
        assert_eq!(overfull.available_spots(), -1);
    }

    #[test]
    fn test_serialize_preserves_order() {
        let activities: Activities = vec![
            ("B".to_string(), ActivityDetails { description: "b".into(), schedule: "s".into(), max_participants: 1, participants: vec![] }),
            ("A".to_string(), ActivityDetails { description: "a".into(), schedule: "s".into(), max_participants: 1, participants: vec![] }),
        ].into_iter().collect();
        let json = serde_json::to_string(&activities).unwrap();
        assert!(json.find("\"B\"").unwrap() < json.find("\"A\"").unwrap());
    }
}
