//! Sermon types.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single unit of content within a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sermon {
    pub id: String,
    pub title: String,
    pub theme: String,
    pub scripture: String,
    /// Calendar day only; sermons carry no time-of-day. Undated sermons
    /// have no calendar presence.
    pub date: Option<NaiveDate>,
    pub notes: String,
    #[serde(default)]
    pub custom: CustomFields,
    pub status: SermonStatus,
}

impl Sermon {
    pub fn from_new(id: String, new: NewSermon) -> Self {
        Sermon {
            id,
            title: new.title,
            theme: new.theme,
            scripture: new.scripture,
            date: new.date,
            notes: new.notes,
            custom: new.custom,
            status: new.status,
        }
    }
}

/// Input for creating a sermon: everything but the assigned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSermon {
    pub title: String,
    pub theme: String,
    pub scripture: String,
    pub date: Option<NaiveDate>,
    pub notes: String,
    #[serde(default)]
    pub custom: CustomFields,
    pub status: SermonStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SermonStatus {
    Draft,
    InProgress,
    Complete,
}

/// Recognized custom-field keys. The mapping itself is open-ended on the
/// wire, but these are the keys the planning views read and write.
pub const BOTTOM_LINE: &str = "bottomLine";
pub const SERVICE_AGENDA: &str = "serviceAgenda";
pub const ANNOUNCEMENTS: &str = "announcements";
pub const SOCIAL_MEDIA_PLANS: &str = "socialMediaPlans";

/// Named free-text fields attached to a sermon (string key → string value).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomFields(BTreeMap<String, String>);

impl CustomFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_fields_round_trip() {
        let mut fields = CustomFields::new();
        fields.set(BOTTOM_LINE, "God is faithful");
        fields.set(SERVICE_AGENDA, "worship, message, response");

        assert_eq!(fields.get(BOTTOM_LINE), Some("God is faithful"));
        assert_eq!(fields.get(ANNOUNCEMENTS), None);

        // Serializes as a plain JSON object, not a wrapper
        let json = serde_json::to_string(&fields).unwrap();
        assert!(json.starts_with('{'));
        let back: CustomFields = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fields);
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&SermonStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
    }

    #[test]
    fn test_date_serializes_as_local_date_string() {
        let sermon = Sermon {
            id: "x".to_string(),
            title: "Week 1".to_string(),
            theme: String::new(),
            scripture: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 3, 3),
            notes: String::new(),
            custom: CustomFields::new(),
            status: SermonStatus::Draft,
        };
        let json = serde_json::to_value(&sermon).unwrap();
        assert_eq!(json["date"], "2024-03-03");
    }
}
