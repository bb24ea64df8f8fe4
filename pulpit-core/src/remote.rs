//! Subprocess-backed persistence gateway.
//!
//! Providers are external binaries named `pulpit-provider-<name>` that
//! speak the JSON protocol over stdin/stdout. Providers manage their own
//! credentials; the core forwards opaque params from the config file with
//! every request.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use crate::config::RemoteConfig;
use crate::error::{PulpitError, PulpitResult};
use crate::gateway::{MediaKind, PersistenceGateway};
use crate::protocol::{Command as ProviderCommand, Request, Response};
use crate::series::Series;
use crate::sermon::Sermon;

const PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// A provider binary, addressed by its short name ("local", "supabase", …).
#[derive(Clone)]
pub struct Provider(String);

impl Provider {
    pub fn from_name(name: &str) -> Self {
        Provider(name.to_string())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    fn binary_path(&self) -> PulpitResult<std::path::PathBuf> {
        let binary_name = format!("pulpit-provider-{}", self.0);
        which::which(&binary_name).map_err(|_| {
            PulpitError::ProviderNotInstalled(format!(
                "{}. Install it with:\n  cargo install {}",
                self.0, binary_name
            ))
        })
    }

    /// Call a provider command, bounded by the provider timeout.
    pub async fn call_with_timeout<R: DeserializeOwned>(
        &self,
        command: ProviderCommand,
        params: serde_json::Value,
    ) -> PulpitResult<R> {
        timeout(PROVIDER_TIMEOUT, self.call(command, params))
            .await
            .map_err(|_| PulpitError::ProviderTimeout(PROVIDER_TIMEOUT.as_secs()))?
    }

    pub async fn call<R: DeserializeOwned>(
        &self,
        command: ProviderCommand,
        params: serde_json::Value,
    ) -> PulpitResult<R> {
        let request = Request { command, params };
        let request_json = serde_json::to_string(&request)
            .map_err(|e| PulpitError::Serialization(e.to_string()))?;

        let binary_path = self.binary_path()?;
        debug!(provider = %self.0, ?command, "calling provider");

        let mut child = Command::new(&binary_path)
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::inherit())
            .spawn()
            .map_err(|e| {
                PulpitError::Persistence(format!(
                    "Failed to spawn {}: {}",
                    binary_path.display(),
                    e
                ))
            })?;

        // Write request to stdin (unwrap safe: we piped stdin above)
        let mut stdin = child.stdin.take().unwrap();
        stdin
            .write_all(format!("{request_json}\n").as_bytes())
            .await?;
        drop(stdin);

        let output = child.wait_with_output().await?;

        if !output.status.success() {
            return Err(PulpitError::Persistence(format!(
                "Provider exited with status: {}",
                output.status.code().unwrap_or(-1)
            )));
        }

        let response_str = String::from_utf8_lossy(&output.stdout);
        if response_str.is_empty() {
            return Err(PulpitError::Persistence(
                "Provider returned no response".into(),
            ));
        }

        let response: Response<R> = serde_json::from_str(&response_str)
            .map_err(|e| PulpitError::Persistence(format!("Failed to parse response: {}", e)))?;

        match response {
            Response::Success { data } => Ok(data),
            Response::Error { error } => Err(PulpitError::Persistence(error)),
        }
    }
}

/// The production gateway: one provider call per operation.
pub struct RemoteGateway {
    provider: Provider,
    params: HashMap<String, toml::Value>,
}

impl RemoteGateway {
    pub fn from_remote_config(config: &RemoteConfig) -> Self {
        RemoteGateway {
            provider: Provider::from_name(&config.provider),
            params: config.params.clone(),
        }
    }

    /// Config params converted to the JSON object each request starts from.
    fn base_params(&self) -> serde_json::Value {
        let json_map: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| {
                (
                    k.clone(),
                    serde_json::to_value(v).unwrap_or(serde_json::Value::Null),
                )
            })
            .collect();
        serde_json::Value::Object(json_map)
    }
}

impl PersistenceGateway for RemoteGateway {
    async fn list_series(&self) -> PulpitResult<Vec<Series>> {
        self.provider
            .call_with_timeout(ProviderCommand::ListSeries, self.base_params())
            .await
    }

    async fn create_series(&self, series: &Series) -> PulpitResult<Series> {
        let mut params = self.base_params();
        params["series"] =
            serde_json::to_value(series).map_err(|e| PulpitError::Serialization(e.to_string()))?;
        self.provider
            .call_with_timeout(ProviderCommand::CreateSeries, params)
            .await
    }

    async fn update_series(&self, series: &Series) -> PulpitResult<()> {
        let mut params = self.base_params();
        params["series"] =
            serde_json::to_value(series).map_err(|e| PulpitError::Serialization(e.to_string()))?;
        self.provider
            .call_with_timeout(ProviderCommand::UpdateSeries, params)
            .await
    }

    async fn delete_series(&self, series_id: &str) -> PulpitResult<()> {
        let mut params = self.base_params();
        params["series_id"] = serde_json::Value::String(series_id.to_string());
        self.provider
            .call_with_timeout(ProviderCommand::DeleteSeries, params)
            .await
    }

    async fn list_sermons(&self, series_id: &str) -> PulpitResult<Vec<Sermon>> {
        let mut params = self.base_params();
        params["series_id"] = serde_json::Value::String(series_id.to_string());
        self.provider
            .call_with_timeout(ProviderCommand::ListSermons, params)
            .await
    }

    async fn create_sermon(&self, series_id: &str, sermon: &Sermon) -> PulpitResult<Sermon> {
        let mut params = self.base_params();
        params["series_id"] = serde_json::Value::String(series_id.to_string());
        params["sermon"] =
            serde_json::to_value(sermon).map_err(|e| PulpitError::Serialization(e.to_string()))?;
        self.provider
            .call_with_timeout(ProviderCommand::CreateSermon, params)
            .await
    }

    async fn update_sermon(&self, sermon: &Sermon) -> PulpitResult<()> {
        let mut params = self.base_params();
        params["sermon"] =
            serde_json::to_value(sermon).map_err(|e| PulpitError::Serialization(e.to_string()))?;
        self.provider
            .call_with_timeout(ProviderCommand::UpdateSermon, params)
            .await
    }

    async fn delete_sermon(&self, sermon_id: &str) -> PulpitResult<()> {
        let mut params = self.base_params();
        params["sermon_id"] = serde_json::Value::String(sermon_id.to_string());
        self.provider
            .call_with_timeout(ProviderCommand::DeleteSermon, params)
            .await
    }

    async fn upload_media(&self, kind: MediaKind, path: &Path) -> PulpitResult<String> {
        let mut params = self.base_params();
        params["kind"] =
            serde_json::to_value(kind).map_err(|e| PulpitError::Serialization(e.to_string()))?;
        params["path"] = serde_json::Value::String(path.to_string_lossy().into_owned());
        self.provider
            .call_with_timeout(ProviderCommand::UploadMedia, params)
            .await
    }
}
