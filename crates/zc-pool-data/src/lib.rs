use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{debug, warn};
use zc_registry_client::PoolDataProvider;
use zc_types::{PoolAsset, PoolAssets};

pub const DEFAULT_POOL_DATA_URL: &str = "http://localhost:3000";

// ── Pool data document ───────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct PoolAssetsDocument {
    #[serde(default)]
    assets: Vec<PoolAssetEntry>,
}

#[derive(Debug, Deserialize)]
struct PoolAssetEntry {
    denom: String,
    #[serde(flatten)]
    asset: PoolAsset,
}

fn into_pool_assets(document: PoolAssetsDocument) -> PoolAssets {
    let mut assets = PoolAssets::with_capacity(document.assets.len());
    for entry in document.assets {
        if assets.insert(entry.denom.clone(), entry.asset).is_some() {
            warn!("duplicate pool data entry for {}, keeping the last one", entry.denom);
        }
    }
    assets
}

/// HTTP pool data source.
///
/// Reads `POOL_DATA_URL` from environment at construction time
/// (default: `http://localhost:3000`) and fetches
/// `<endpoint>/<chain_name>/pool_assets`.
pub struct HttpPoolDataProvider {
    endpoint: String,
    http: reqwest::Client,
}

impl HttpPoolDataProvider {
    pub fn new(endpoint: Option<String>) -> Self {
        let endpoint = endpoint
            .or_else(|| std::env::var("POOL_DATA_URL").ok())
            .unwrap_or_else(|| DEFAULT_POOL_DATA_URL.to_string());
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn with_client(endpoint: &str, http: reqwest::Client) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PoolDataProvider for HttpPoolDataProvider {
    async fn pool_assets(&self, chain_name: &str) -> Result<Option<PoolAssets>> {
        let url = format!("{}/{}/pool_assets", self.endpoint, chain_name);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .context("pool data transport")?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            debug!("no pool data published for {}", chain_name);
            return Ok(None);
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("pool data HTTP {status}: {text}");
        }

        let document: PoolAssetsDocument = response.json().await.context("pool data parse")?;
        Ok(Some(into_pool_assets(document)))
    }
}

/// Pool data snapshots on disk, one `<chain_name>.pool_assets.json` per chain.
pub struct FilePoolDataProvider {
    dir: PathBuf,
}

impl FilePoolDataProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn snapshot_path(&self, chain_name: &str) -> PathBuf {
        self.dir.join(format!("{chain_name}.pool_assets.json"))
    }
}

#[async_trait]
impl PoolDataProvider for FilePoolDataProvider {
    async fn pool_assets(&self, chain_name: &str) -> Result<Option<PoolAssets>> {
        let path = self.snapshot_path(chain_name);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("no pool data snapshot at {}", path.display());
                return Ok(None);
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read pool data: {}", path.display()));
            }
        };

        let document: PoolAssetsDocument = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse pool data: {}", path.display()))?;
        Ok(Some(into_pool_assets(document)))
    }
}
