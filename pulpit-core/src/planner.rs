//! The sync orchestrator.
//!
//! Every mutation follows a fixed order: remote write first, then the
//! canonical entity-store mutation, then the derived calendar-projection
//! mutation. The order is never reversed or parallelized within one call.
//! Mutations are optimistic (no rollback path), and `delete_series`
//! applies the local removal even when the remote delete fails
//! (best-effort delete, logged).
//!
//! Two independently initiated operations on the same entity can still
//! interleave at their await points; whichever gateway call resolves last
//! wins locally. There is no per-entity mutation queue, no cancellation,
//! and no retries.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::calendar_event::{CalendarEvent, EventKind, EventPatch};
use crate::error::{PulpitError, PulpitResult};
use crate::gateway::PersistenceGateway;
use crate::ids;
use crate::projection::CalendarProjection;
use crate::series::{NewSeries, Series, SeriesStatus};
use crate::sermon::{NewSermon, Sermon};
use crate::store::EntityStore;

pub struct Planner<G: PersistenceGateway> {
    gateway: G,
    store: EntityStore,
    calendar: CalendarProjection,
    loading: bool,
}

impl<G: PersistenceGateway> Planner<G> {
    pub fn new(gateway: G) -> Self {
        Planner {
            gateway,
            store: EntityStore::new(),
            calendar: CalendarProjection::new(),
            loading: false,
        }
    }

    // =========================================================================
    // Read surface
    // =========================================================================

    pub fn active_series(&self) -> &[Series] {
        self.store.active()
    }

    pub fn archived_series(&self) -> &[Series] {
        self.store.archived()
    }

    pub fn series(&self, series_id: &str) -> Option<&Series> {
        self.store.find(series_id)
    }

    /// Date-ordered view of the calendar projection.
    pub fn calendar_events(&self) -> Vec<&CalendarEvent> {
        self.calendar.events()
    }

    pub fn event_on_day(&self, day: NaiveDate) -> Option<&CalendarEvent> {
        self.calendar.event_on_day(day)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    // =========================================================================
    // Bulk load
    // =========================================================================

    /// Initial bulk load: fetch every series (active and archived) plus
    /// its sermons, populate both partitions, and rebuild the projection
    /// from scratch.
    pub async fn load(&mut self) -> PulpitResult<()> {
        self.loading = true;
        let result = self.load_inner().await;
        self.loading = false;
        result
    }

    async fn load_inner(&mut self) -> PulpitResult<()> {
        let all = self.gateway.list_series().await?;

        let mut active = Vec::new();
        let mut archived = Vec::new();
        for mut series in all {
            series.sermons = self.gateway.list_sermons(&series.id).await?;
            if series.is_archived() {
                archived.push(series);
            } else {
                active.push(series);
            }
        }

        info!(
            active = active.len(),
            archived = archived.len(),
            "loaded series from gateway"
        );

        self.store.set_loaded(active, archived);
        self.calendar.rebuild(self.store.iter_all());
        Ok(())
    }

    // =========================================================================
    // Series operations
    // =========================================================================

    /// Create a series. The gateway-assigned record is adopted locally
    /// with an empty sermon list; returns the new id.
    pub async fn create_series(&mut self, new: NewSeries) -> PulpitResult<String> {
        let series = Series::from_new(ids::new_entity_id(), new);
        let mut created = self.gateway.create_series(&series).await?;
        created.sermons = Vec::new();

        let id = created.id.clone();
        self.store.insert_active(created);
        Ok(id)
    }

    /// Full-record replace in whichever partition holds the series.
    ///
    /// Sermon edits go through the sermon operations; this refreshes only
    /// the series-level fields its events display (title, color).
    pub async fn update_series(&mut self, series: Series) -> PulpitResult<()> {
        if self.store.find(&series.id).is_none() {
            return Err(PulpitError::NotFound(format!("series {}", series.id)));
        }

        self.gateway.update_series(&series).await?;

        let patches: Vec<(String, EventPatch)> = series
            .sermons
            .iter()
            .map(|sermon| {
                (
                    ids::sermon_event_id(&series.id, &sermon.id),
                    EventPatch {
                        title: Some(series.title.clone()),
                        color: Some(series.color.clone()),
                        ..EventPatch::default()
                    },
                )
            })
            .collect();

        self.store.replace(series)?;
        for (event_id, patch) in patches {
            self.calendar.patch(&event_id, patch);
        }
        Ok(())
    }

    /// Delete a series everywhere. The remote delete is best-effort: on
    /// gateway failure the error is logged and local removal proceeds,
    /// including every calendar event the series sourced.
    pub async fn delete_series(&mut self, series_id: &str) -> PulpitResult<()> {
        if let Err(err) = self.gateway.delete_series(series_id).await {
            warn!(series_id, error = %err, "remote delete failed; removing local state anyway");
        }
        self.store.remove(series_id);
        self.calendar.remove_series_events(series_id);
        Ok(())
    }

    /// Move a series to the archived partition. Its sermons keep their
    /// calendar events. No-op when the id is not in the active partition.
    pub async fn archive_series(&mut self, series_id: &str) -> PulpitResult<()> {
        let Some(series) = self.store.find_active(series_id) else {
            return Ok(());
        };
        let mut updated = series.clone();
        updated.status = SeriesStatus::Archived;

        self.gateway.update_series(&updated).await?;
        self.store.archive(series_id);
        Ok(())
    }

    /// Restore a series to the active partition with status `active`.
    /// No-op when the id is not in the archived partition.
    pub async fn unarchive_series(&mut self, series_id: &str) -> PulpitResult<()> {
        let Some(series) = self.store.find_archived(series_id) else {
            return Ok(());
        };
        let mut updated = series.clone();
        updated.status = SeriesStatus::Active;

        self.gateway.update_series(&updated).await?;
        self.store.unarchive(series_id);
        Ok(())
    }

    // =========================================================================
    // Sermon operations
    // =========================================================================

    /// Add a sermon to an active series. A dated sermon gets its calendar
    /// event; an undated one has no calendar presence. Returns the new id.
    pub async fn add_sermon(&mut self, series_id: &str, new: NewSermon) -> PulpitResult<String> {
        if self.store.find_active(series_id).is_none() {
            return Err(PulpitError::NotFound(format!("series {series_id}")));
        }

        let sermon = Sermon::from_new(ids::new_entity_id(), new);
        let created = self.gateway.create_sermon(series_id, &sermon).await?;

        let id = created.id.clone();
        self.store.add_sermon(series_id, created)?;
        self.project_sermon(series_id, &id);
        Ok(id)
    }

    /// Full-record replace of a sermon within an active series. The
    /// projection follows: the event moves with a date change, appears
    /// when the sermon gains a date, and disappears when it loses one.
    pub async fn update_sermon(&mut self, series_id: &str, sermon: Sermon) -> PulpitResult<()> {
        let exists = self
            .store
            .find_active(series_id)
            .is_some_and(|s| s.sermons.iter().any(|x| x.id == sermon.id));
        if !exists {
            return Err(PulpitError::NotFound(format!(
                "sermon {} in series {series_id}",
                sermon.id
            )));
        }

        self.gateway.update_sermon(&sermon).await?;

        let sermon_id = sermon.id.clone();
        self.store.update_sermon(series_id, sermon)?;
        self.project_sermon(series_id, &sermon_id);
        Ok(())
    }

    /// Remove a sermon from an active series along with its calendar event.
    pub async fn delete_sermon(&mut self, series_id: &str, sermon_id: &str) -> PulpitResult<()> {
        if self.store.find_active(series_id).is_none() {
            return Err(PulpitError::NotFound(format!("series {series_id}")));
        }

        self.gateway.delete_sermon(sermon_id).await?;
        self.store.remove_sermon(series_id, sermon_id)?;
        self.project_sermon(series_id, sermon_id);
        Ok(())
    }

    /// Bring the projection entry for one sermon in line with canonical
    /// state: a dated sermon has exactly one event, an undated or deleted
    /// one has none.
    fn project_sermon(&mut self, series_id: &str, sermon_id: &str) {
        let event = self.store.find(series_id).and_then(|series| {
            series
                .sermons
                .iter()
                .find(|s| s.id == sermon_id)
                .and_then(|sermon| CalendarEvent::for_sermon(series, sermon))
        });

        match event {
            Some(event) => self.calendar.upsert(event),
            None => self
                .calendar
                .remove(&ids::sermon_event_id(series_id, sermon_id)),
        }
    }

    // =========================================================================
    // Invariant check
    // =========================================================================

    /// Defensive check of the consistency contract: partitions disjoint,
    /// and the projection is a one-to-one view of dated sermons across
    /// both partitions. Intended for tests and debug assertions, not for
    /// user-facing flows.
    pub fn verify_projection(&self) -> PulpitResult<()> {
        if !self.store.partitions_disjoint() {
            return Err(PulpitError::ProjectionInconsistency(
                "a series appears in both partitions".into(),
            ));
        }

        let mut dated = 0usize;
        for series in self.store.iter_all() {
            for sermon in &series.sermons {
                let Some(date) = sermon.date else {
                    continue;
                };
                dated += 1;

                let event_id = ids::sermon_event_id(&series.id, &sermon.id);
                let Some(event) = self.calendar.get(&event_id) else {
                    return Err(PulpitError::ProjectionInconsistency(format!(
                        "dated sermon {} has no calendar event",
                        sermon.id
                    )));
                };
                if event.sermon_id.as_deref() != Some(sermon.id.as_str()) || event.date != date {
                    return Err(PulpitError::ProjectionInconsistency(format!(
                        "event {event_id} does not match sermon {}",
                        sermon.id
                    )));
                }
            }
        }

        let projected = self
            .calendar
            .events()
            .iter()
            .filter(|e| e.kind == EventKind::Sermon)
            .count();
        if projected != dated {
            return Err(PulpitError::ProjectionInconsistency(format!(
                "{projected} sermon events for {dated} dated sermons"
            )));
        }
        Ok(())
    }
}
