mod config;
mod error;
mod loader;
mod orchestrator;
mod writer;

use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use zc_chain_registry::FileChainRegistry;
use zc_pool_data::{FilePoolDataProvider, HttpPoolDataProvider};
use zc_registry_client::PoolDataProvider;

use crate::config::{GeneratorConfig, PoolDataSource};
use crate::orchestrator::Orchestrator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GeneratorConfig::from_env()?;
    info!(
        "assetlists root {}, chain registry {}",
        config.assetlists_root.display(),
        config.chain_registry_root.display()
    );

    let registry = Arc::new(FileChainRegistry::new(&config.chain_registry_root));
    let pool_data: Arc<dyn PoolDataProvider> = match &config.pool_data {
        PoolDataSource::Snapshot { dir } => {
            info!("reading pool data snapshots from {}", dir.display());
            Arc::new(FilePoolDataProvider::new(dir))
        }
        PoolDataSource::Http { url } => {
            let provider = HttpPoolDataProvider::new(url.clone());
            info!("fetching pool data from {}", provider.endpoint());
            Arc::new(provider)
        }
    };

    let orchestrator = Orchestrator::new(config.assetlists_root.clone(), config.chains.clone(), registry, pool_data);
    let report = orchestrator.run().await;

    info!(
        "zone config generation finished: {} written, {} skipped",
        report.written(),
        report.failed()
    );
    for outcome in report.outcomes.iter().filter(|outcome| outcome.result.is_err()) {
        warn!("{} was not generated", outcome.chain_name);
    }

    if report.all_failed() {
        anyhow::bail!("no zone config was generated");
    }

    Ok(())
}
