//! The calendar projection store.
//!
//! A derived index over dated sermons, keyed by event id with
//! replace-by-id semantics: the same key never accumulates duplicates.
//! Only the planner writes here; readers get date-ordered views.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::calendar_event::{CalendarEvent, DEFAULT_EVENT_COLOR, EventPatch};
use crate::series::Series;

#[derive(Debug, Default, Clone)]
pub struct CalendarProjection {
    events: HashMap<String, CalendarEvent>,
}

impl CalendarProjection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace by event id.
    pub fn upsert(&mut self, event: CalendarEvent) {
        self.events.insert(event.id.clone(), event);
    }

    /// Delete by id; no-op if absent.
    pub fn remove(&mut self, id: &str) {
        self.events.remove(id);
    }

    /// Merge fields into an existing event; no-op if the id is unknown.
    /// Color falls back to the previous value (or the default token)
    /// rather than being cleared by an empty patch.
    pub fn patch(&mut self, id: &str, patch: EventPatch) {
        let Some(event) = self.events.get_mut(id) else {
            return;
        };
        if let Some(title) = patch.title {
            event.title = title;
        }
        if let Some(subtitle) = patch.subtitle {
            event.subtitle = subtitle;
        }
        if let Some(date) = patch.date {
            event.date = date;
        }
        match patch.color {
            Some(color) if !color.is_empty() => event.color = color,
            _ => {
                if event.color.is_empty() {
                    event.color = DEFAULT_EVENT_COLOR.to_string();
                }
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&CalendarEvent> {
        self.events.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.events.contains_key(id)
    }

    /// The zero-or-one event on a given day. The projection holds at most
    /// one event per day by design (single service per day); callers must
    /// not rely on more.
    pub fn event_on_day(&self, day: NaiveDate) -> Option<&CalendarEvent> {
        self.events.values().find(|e| e.date == day)
    }

    /// All events, date-ordered (ties broken by id for stable output).
    pub fn events(&self) -> Vec<&CalendarEvent> {
        let mut all: Vec<&CalendarEvent> = self.events.values().collect();
        all.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        all
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drop every event back-referencing the given series.
    pub fn remove_series_events(&mut self, series_id: &str) {
        self.events
            .retain(|_, e| e.series_id.as_deref() != Some(series_id));
    }

    /// Recompute the whole projection from canonical state (startup bulk
    /// load). Existing events are discarded.
    pub fn rebuild<'a, I>(&mut self, series: I)
    where
        I: IntoIterator<Item = &'a Series>,
    {
        self.events.clear();
        for s in series {
            for sermon in &s.sermons {
                if let Some(event) = CalendarEvent::for_sermon(s, sermon) {
                    self.upsert(event);
                }
            }
        }
    }
}
