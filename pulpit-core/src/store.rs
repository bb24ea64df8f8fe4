//! Canonical series storage, partitioned into active and archived sets.
//!
//! The two partitions are disjoint: a series lives in exactly one at any
//! time, and their union is the full collection. All mutation goes through
//! the planner; this type only knows local state.

use crate::error::{PulpitError, PulpitResult};
use crate::series::{Series, SeriesStatus};
use crate::sermon::Sermon;

#[derive(Debug, Default, Clone)]
pub struct EntityStore {
    active: Vec<Series>,
    archived: Vec<Series>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &[Series] {
        &self.active
    }

    pub fn archived(&self) -> &[Series] {
        &self.archived
    }

    /// Every series across both partitions, active first.
    pub fn iter_all(&self) -> impl Iterator<Item = &Series> {
        self.active.iter().chain(self.archived.iter())
    }

    pub fn find(&self, id: &str) -> Option<&Series> {
        self.iter_all().find(|s| s.id == id)
    }

    pub fn find_active(&self, id: &str) -> Option<&Series> {
        self.active.iter().find(|s| s.id == id)
    }

    pub fn find_archived(&self, id: &str) -> Option<&Series> {
        self.archived.iter().find(|s| s.id == id)
    }

    /// Replace both partitions wholesale (startup bulk load).
    pub fn set_loaded(&mut self, active: Vec<Series>, archived: Vec<Series>) {
        self.active = active;
        self.archived = archived;
    }

    pub fn insert_active(&mut self, series: Series) {
        self.active.push(series);
    }

    /// Full-record replace by id in whichever partition currently holds
    /// the record.
    pub fn replace(&mut self, series: Series) -> PulpitResult<()> {
        for slot in self.active.iter_mut().chain(self.archived.iter_mut()) {
            if slot.id == series.id {
                *slot = series;
                return Ok(());
            }
        }
        Err(PulpitError::NotFound(format!("series {}", series.id)))
    }

    /// Remove from both partitions unconditionally. Idempotent; returns
    /// the removed record if one existed.
    pub fn remove(&mut self, id: &str) -> Option<Series> {
        let mut removed = None;
        if let Some(pos) = self.active.iter().position(|s| s.id == id) {
            removed = Some(self.active.remove(pos));
        }
        if let Some(pos) = self.archived.iter().position(|s| s.id == id) {
            removed = Some(self.archived.remove(pos));
        }
        removed
    }

    /// Move active → archived, setting status. `None` (no-op) when the id
    /// is not in the active partition.
    pub fn archive(&mut self, id: &str) -> Option<&Series> {
        let pos = self.active.iter().position(|s| s.id == id)?;
        let mut series = self.active.remove(pos);
        series.status = SeriesStatus::Archived;
        self.archived.push(series);
        self.archived.last()
    }

    /// Move archived → active, setting status. `None` (no-op) when the id
    /// is not in the archived partition.
    pub fn unarchive(&mut self, id: &str) -> Option<&Series> {
        let pos = self.archived.iter().position(|s| s.id == id)?;
        let mut series = self.archived.remove(pos);
        series.status = SeriesStatus::Active;
        self.active.push(series);
        self.active.last()
    }

    /// Append a sermon to one active-partition series.
    pub fn add_sermon(&mut self, series_id: &str, sermon: Sermon) -> PulpitResult<()> {
        let series = self.active_mut(series_id)?;
        series.sermons.push(sermon);
        Ok(())
    }

    /// Full-record replace of a sermon within one active-partition series.
    pub fn update_sermon(&mut self, series_id: &str, sermon: Sermon) -> PulpitResult<()> {
        let series = self.active_mut(series_id)?;
        let slot = series
            .sermons
            .iter_mut()
            .find(|s| s.id == sermon.id)
            .ok_or_else(|| {
                PulpitError::NotFound(format!("sermon {} in series {series_id}", sermon.id))
            })?;
        *slot = sermon;
        Ok(())
    }

    /// Remove a sermon from one active-partition series. Returns the
    /// removed sermon, or `None` if the sermon id was already gone.
    pub fn remove_sermon(
        &mut self,
        series_id: &str,
        sermon_id: &str,
    ) -> PulpitResult<Option<Sermon>> {
        let series = self.active_mut(series_id)?;
        Ok(series
            .sermons
            .iter()
            .position(|s| s.id == sermon_id)
            .map(|pos| series.sermons.remove(pos)))
    }

    fn active_mut(&mut self, id: &str) -> PulpitResult<&mut Series> {
        self.active
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| PulpitError::NotFound(format!("series {id}")))
    }

    /// True when no series id appears in both partitions.
    pub fn partitions_disjoint(&self) -> bool {
        self.active
            .iter()
            .all(|a| self.archived.iter().all(|b| a.id != b.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{NewSeries, SeriesStatus};
    use crate::sermon::{CustomFields, SermonStatus};
    use chrono::NaiveDate;

    fn make_series(id: &str) -> Series {
        Series::from_new(
            id.to_string(),
            NewSeries {
                title: format!("Series {id}"),
                description: String::new(),
                summary: String::new(),
                color: "#6366f1".to_string(),
                start_date: NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
                status: SeriesStatus::Planning,
                collaborators: vec![],
                artwork: None,
                bumper_video: None,
            },
        )
    }

    fn make_sermon(id: &str) -> Sermon {
        Sermon {
            id: id.to_string(),
            title: format!("Sermon {id}"),
            theme: String::new(),
            scripture: String::new(),
            date: None,
            notes: String::new(),
            custom: CustomFields::new(),
            status: SermonStatus::Draft,
        }
    }

    #[test]
    fn test_replace_in_either_partition() {
        let mut store = EntityStore::new();
        store.insert_active(make_series("a"));
        store.insert_active(make_series("b"));
        store.archive("b");

        let mut updated = make_series("b");
        updated.title = "Renamed".to_string();
        store.replace(updated).unwrap();
        assert_eq!(store.find_archived("b").unwrap().title, "Renamed");

        let err = store.replace(make_series("ghost")).unwrap_err();
        assert!(matches!(err, PulpitError::NotFound(_)));
    }

    #[test]
    fn test_remove_is_idempotent_across_partitions() {
        let mut store = EntityStore::new();
        store.insert_active(make_series("a"));
        store.archive("a");

        assert!(store.remove("a").is_some());
        assert!(store.remove("a").is_none());
        assert!(store.active().is_empty());
        assert!(store.archived().is_empty());
    }

    #[test]
    fn test_archive_round_trip_sets_status() {
        let mut store = EntityStore::new();
        store.insert_active(make_series("a"));

        store.archive("a");
        assert!(store.find_active("a").is_none());
        assert_eq!(
            store.find_archived("a").unwrap().status,
            SeriesStatus::Archived
        );
        assert!(store.partitions_disjoint());

        store.unarchive("a");
        assert!(store.find_archived("a").is_none());
        assert_eq!(store.find_active("a").unwrap().status, SeriesStatus::Active);
        assert!(store.partitions_disjoint());
    }

    #[test]
    fn test_archive_missing_id_is_noop() {
        let mut store = EntityStore::new();
        store.insert_active(make_series("a"));
        assert!(store.archive("ghost").is_none());
        assert_eq!(store.active().len(), 1);
    }

    #[test]
    fn test_sermon_ops_require_active_series() {
        let mut store = EntityStore::new();
        store.insert_active(make_series("a"));
        store.archive("a");

        let err = store.add_sermon("a", make_sermon("s1")).unwrap_err();
        assert!(matches!(err, PulpitError::NotFound(_)));
    }

    #[test]
    fn test_sermon_crud_within_series() {
        let mut store = EntityStore::new();
        store.insert_active(make_series("a"));

        store.add_sermon("a", make_sermon("s1")).unwrap();
        store.add_sermon("a", make_sermon("s2")).unwrap();
        assert_eq!(store.find_active("a").unwrap().sermons.len(), 2);

        let mut updated = make_sermon("s1");
        updated.title = "Renamed".to_string();
        store.update_sermon("a", updated).unwrap();
        assert_eq!(
            store.find_active("a").unwrap().sermons[0].title,
            "Renamed"
        );

        assert!(store.remove_sermon("a", "s1").unwrap().is_some());
        assert!(store.remove_sermon("a", "s1").unwrap().is_none());
        assert_eq!(store.find_active("a").unwrap().sermons.len(), 1);
    }
}
