//! JSON-file storage for the local provider.
//!
//! One file holds everything: series records (without their sermons) and
//! sermon rows keyed by owning series. Writes go through a temp file and
//! rename.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use pulpit_core::gateway::MediaKind;
use pulpit_core::series::Series;
use pulpit_core::sermon::Sermon;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreData {
    series: Vec<Series>,
    sermons: Vec<SermonRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SermonRow {
    series_id: String,
    sermon: Sermon,
}

pub struct FileStore {
    dir: PathBuf,
    data: StoreData,
}

impl FileStore {
    pub fn open() -> Result<Self> {
        let dir = dirs::data_dir()
            .context("Could not determine data directory")?
            .join("pulpit");
        Self::open_at(dir)
    }

    fn open_at(dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&dir)?;
        let path = dir.join("store.json");

        let data = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content)
                .with_context(|| format!("Corrupt store file {}", path.display()))?
        } else {
            StoreData::default()
        };

        Ok(FileStore { dir, data })
    }

    fn save(&self) -> Result<()> {
        let path = self.dir.join("store.json");
        let temp = self.dir.join("store.json.tmp");

        std::fs::write(&temp, serde_json::to_string_pretty(&self.data)?)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }

    pub fn list_series(&self) -> Result<Vec<Series>> {
        Ok(self.data.series.clone())
    }

    pub fn create_series(&mut self, mut series: Series) -> Result<Series> {
        if self.data.series.iter().any(|s| s.id == series.id) {
            bail!("Series {} already exists", series.id);
        }
        // Sermons live in their own rows
        series.sermons = Vec::new();
        self.data.series.push(series.clone());
        self.save()?;
        Ok(series)
    }

    pub fn update_series(&mut self, mut series: Series) -> Result<()> {
        series.sermons = Vec::new();
        let slot = self
            .data
            .series
            .iter_mut()
            .find(|s| s.id == series.id)
            .with_context(|| format!("Series {} not found", series.id))?;
        *slot = series;
        self.save()
    }

    pub fn delete_series(&mut self, series_id: &str) -> Result<()> {
        self.data.series.retain(|s| s.id != series_id);
        self.data.sermons.retain(|row| row.series_id != series_id);
        self.save()
    }

    pub fn list_sermons(&self, series_id: &str) -> Result<Vec<Sermon>> {
        Ok(self
            .data
            .sermons
            .iter()
            .filter(|row| row.series_id == series_id)
            .map(|row| row.sermon.clone())
            .collect())
    }

    pub fn create_sermon(&mut self, series_id: &str, sermon: Sermon) -> Result<Sermon> {
        if !self.data.series.iter().any(|s| s.id == series_id) {
            bail!("Series {} not found", series_id);
        }
        self.data.sermons.push(SermonRow {
            series_id: series_id.to_string(),
            sermon: sermon.clone(),
        });
        self.save()?;
        Ok(sermon)
    }

    pub fn update_sermon(&mut self, sermon: Sermon) -> Result<()> {
        let row = self
            .data
            .sermons
            .iter_mut()
            .find(|row| row.sermon.id == sermon.id)
            .with_context(|| format!("Sermon {} not found", sermon.id))?;
        row.sermon = sermon;
        self.save()
    }

    pub fn delete_sermon(&mut self, sermon_id: &str) -> Result<()> {
        self.data.sermons.retain(|row| row.sermon.id != sermon_id);
        self.save()
    }

    /// "Upload" media by copying it into the provider's media directory;
    /// returns a file:// URL the core can store on the series.
    pub fn store_media(&self, kind: MediaKind, path: &Path) -> Result<String> {
        let media_dir = self.dir.join("media");
        std::fs::create_dir_all(&media_dir)?;

        let file_name = path
            .file_name()
            .with_context(|| format!("Not a file: {}", path.display()))?;
        let prefix = match kind {
            MediaKind::Artwork => "artwork",
            MediaKind::Video => "video",
        };
        let dest = media_dir.join(format!("{prefix}-{}", file_name.to_string_lossy()));

        std::fs::copy(path, &dest)
            .with_context(|| format!("Failed to copy {}", path.display()))?;
        Ok(format!("file://{}", dest.display()))
    }
}
