//! Identifier generation.
//!
//! Two kinds of identifiers: freshly random ones for new entities, and
//! deterministic ones for sermon-linked calendar events so that repeated
//! mutations of the same sermon resolve to the same projection slot.

use uuid::Uuid;

/// A fresh, practically-unique identifier for a new series, sermon, or
/// ad hoc calendar event.
pub fn new_entity_id() -> String {
    Uuid::new_v4().to_string()
}

/// Deterministic calendar-event identifier for a sermon.
///
/// Keyed on the sermon's stable id rather than its title: a title-derived
/// key changes on rename and strands the old event in the projection.
pub fn sermon_event_id(series_id: &str, sermon_id: &str) -> String {
    format!("{series_id}-sermon-{sermon_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_ids_are_unique() {
        assert_ne!(new_entity_id(), new_entity_id());
    }

    #[test]
    fn test_sermon_event_id_is_deterministic() {
        assert_eq!(sermon_event_id("s1", "a"), sermon_event_id("s1", "a"));
        assert_ne!(sermon_event_id("s1", "a"), sermon_event_id("s2", "a"));
        assert_ne!(sermon_event_id("s1", "a"), sermon_event_id("s1", "b"));
    }

    #[test]
    fn test_sermon_event_id_ignores_title() {
        // Renaming a sermon must not move its projection slot.
        assert_eq!(sermon_event_id("s1", "a"), "s1-sermon-a");
    }
}
