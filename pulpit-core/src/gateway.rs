//! Persistence gateway contract.
//!
//! The planner never talks to a backend directly; it goes through this
//! trait. The production implementation shells out to a provider binary
//! (`remote::RemoteGateway`); tests drive the planner with an in-memory
//! mock.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PulpitResult;
use crate::series::Series;
use crate::sermon::Sermon;

/// What `upload_media` is carrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Artwork,
    Video,
}

/// Remote CRUD for series and sermons, plus media upload.
///
/// `list_series` returns series records without their sermons; callers
/// fetch those per series with `list_sermons`. Media upload is consumed by
/// the form layer only; the core just stores the returned URL string.
#[allow(async_fn_in_trait)]
pub trait PersistenceGateway {
    async fn list_series(&self) -> PulpitResult<Vec<Series>>;

    async fn create_series(&self, series: &Series) -> PulpitResult<Series>;

    async fn update_series(&self, series: &Series) -> PulpitResult<()>;

    async fn delete_series(&self, series_id: &str) -> PulpitResult<()>;

    async fn list_sermons(&self, series_id: &str) -> PulpitResult<Vec<Sermon>>;

    async fn create_sermon(&self, series_id: &str, sermon: &Sermon) -> PulpitResult<Sermon>;

    async fn update_sermon(&self, sermon: &Sermon) -> PulpitResult<()>;

    async fn delete_sermon(&self, sermon_id: &str) -> PulpitResult<()>;

    /// Upload a media file; returns its public URL.
    async fn upload_media(&self, kind: MediaKind, path: &Path) -> PulpitResult<String>;
}
