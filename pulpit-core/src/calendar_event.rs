//! Derived calendar event types.
//!
//! Events are never mutated directly by callers: they exist only as side
//! effects of entity-store operations driven by the planner.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids;
use crate::series::Series;
use crate::sermon::Sermon;

/// Fallback display color when neither the event nor its series carries one.
pub const DEFAULT_EVENT_COLOR: &str = "#6366f1";

/// A derived calendar entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    /// Series title.
    pub title: String,
    /// Sermon title.
    pub subtitle: String,
    /// Calendar day, serialized as the normalized `YYYY-MM-DD` local date
    /// string (never a timestamp, so no timezone drift).
    pub date: NaiveDate,
    pub color: String,
    pub series_id: Option<String>,
    pub sermon_id: Option<String>,
    pub kind: EventKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Sermon,
    Event,
}

impl CalendarEvent {
    /// Build the projection entry for a sermon, or `None` when the sermon
    /// is undated. The event id derives from the sermon's stable id, so
    /// the same sermon always resolves to the same slot.
    pub fn for_sermon(series: &Series, sermon: &Sermon) -> Option<Self> {
        let date = sermon.date?;
        Some(CalendarEvent {
            id: ids::sermon_event_id(&series.id, &sermon.id),
            title: series.title.clone(),
            subtitle: sermon.title.clone(),
            date,
            color: if series.color.is_empty() {
                DEFAULT_EVENT_COLOR.to_string()
            } else {
                series.color.clone()
            },
            series_id: Some(series.id.clone()),
            sermon_id: Some(sermon.id.clone()),
            kind: EventKind::Sermon,
        })
    }
}

/// Partial update for an existing event. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub date: Option<NaiveDate>,
    pub color: Option<String>,
}
