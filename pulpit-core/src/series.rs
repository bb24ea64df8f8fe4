//! Series types.
//!
//! A series is the canonical grouping entity: it embeds its sermons in
//! insertion order and carries the display fields (title, color) that flow
//! into the calendar projection.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::sermon::Sermon;

/// A named, dated grouping of sermons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: String,
    pub title: String,
    pub description: String,
    pub summary: String,
    /// Display color token (hex string), inherited by the series' calendar
    /// events.
    pub color: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: SeriesStatus,
    /// Sermons in insertion order.
    #[serde(default)]
    pub sermons: Vec<Sermon>,
    #[serde(default)]
    pub collaborators: Vec<Collaborator>,
    pub artwork: Option<MediaRef>,
    pub bumper_video: Option<MediaRef>,
}

impl Series {
    /// Materialize a new series from its creation input. The sermon list
    /// starts empty; sermons are added through their own operations.
    pub fn from_new(id: String, new: NewSeries) -> Self {
        Series {
            id,
            title: new.title,
            description: new.description,
            summary: new.summary,
            color: new.color,
            start_date: new.start_date,
            end_date: new.end_date,
            status: new.status,
            sermons: Vec::new(),
            collaborators: new.collaborators,
            artwork: new.artwork,
            bumper_video: new.bumper_video,
        }
    }

    pub fn is_archived(&self) -> bool {
        self.status == SeriesStatus::Archived
    }
}

/// Input for creating a series: everything but the assigned id and the
/// (initially empty) sermon list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSeries {
    pub title: String,
    pub description: String,
    pub summary: String,
    pub color: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: SeriesStatus,
    #[serde(default)]
    pub collaborators: Vec<Collaborator>,
    pub artwork: Option<MediaRef>,
    pub bumper_video: Option<MediaRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesStatus {
    Planning,
    Active,
    Complete,
    Archived,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collaborator {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: CollaboratorRole,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollaboratorRole {
    Editor,
    Viewer,
}

/// Artwork or bumper-video reference: a local file awaiting upload, or the
/// public URL the gateway returned once it was uploaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MediaRef {
    Pending { path: PathBuf },
    Remote { url: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_new_starts_with_empty_sermons() {
        let new = NewSeries {
            title: "Hope".to_string(),
            description: String::new(),
            summary: String::new(),
            color: "#6366f1".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            status: SeriesStatus::Planning,
            collaborators: vec![],
            artwork: None,
            bumper_video: None,
        };

        let series = Series::from_new("abc".to_string(), new);
        assert_eq!(series.id, "abc");
        assert!(series.sermons.is_empty());
        assert!(!series.is_archived());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SeriesStatus::Planning).unwrap(),
            "\"planning\""
        );
        assert_eq!(
            serde_json::to_string(&SeriesStatus::Archived).unwrap(),
            "\"archived\""
        );
    }
}
