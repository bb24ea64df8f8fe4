//! Core library for pulpit.
//!
//! Holds the canonical collections of sermon series (active and archived),
//! a derived calendar projection over their dated sermons, and the sync
//! orchestrator that keeps both consistent with a remote persistence
//! provider:
//! - `series` / `sermon` / `calendar_event` for the data model
//! - `store` and `projection` for local state
//! - `gateway`, `protocol` and `remote` for the persistence side
//! - `planner` for the orchestrator the presentation layer drives

pub mod calendar_event;
pub mod config;
pub mod error;
pub mod gateway;
pub mod ids;
pub mod planner;
pub mod projection;
pub mod protocol;
pub mod remote;
pub mod series;
pub mod sermon;
pub mod store;

// Re-export the types presentation code touches most
pub use calendar_event::{CalendarEvent, DEFAULT_EVENT_COLOR, EventKind, EventPatch};
pub use error::{PulpitError, PulpitResult};
pub use gateway::{MediaKind, PersistenceGateway};
pub use planner::Planner;
pub use series::{Collaborator, CollaboratorRole, MediaRef, NewSeries, Series, SeriesStatus};
pub use sermon::{CustomFields, NewSermon, Sermon, SermonStatus};
