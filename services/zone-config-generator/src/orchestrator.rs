use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use zc_registry_client::{ChainRegistryClient, PoolDataProvider};
use zc_resolver::AssetResolver;
use zc_types::ZoneConfig;

use crate::config::ChainTarget;
use crate::error::GenerateError;
use crate::loader::load_zone_assets;
use crate::writer::write_zone_config;

#[derive(Debug)]
pub(crate) struct ChainOutcome {
    pub(crate) chain_name: String,
    pub(crate) result: Result<PathBuf, GenerateError>,
}

#[derive(Debug, Default)]
pub(crate) struct RunReport {
    pub(crate) outcomes: Vec<ChainOutcome>,
}

impl RunReport {
    pub(crate) fn written(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.result.is_ok()).count()
    }

    pub(crate) fn failed(&self) -> usize {
        self.outcomes.len() - self.written()
    }

    pub(crate) fn all_failed(&self) -> bool {
        !self.outcomes.is_empty() && self.written() == 0
    }
}

pub(crate) struct Orchestrator {
    assetlists_root: PathBuf,
    chains: Vec<ChainTarget>,
    registry: Arc<dyn ChainRegistryClient>,
    pool_data: Arc<dyn PoolDataProvider>,
}

impl Orchestrator {
    pub(crate) fn new(
        assetlists_root: PathBuf,
        chains: Vec<ChainTarget>,
        registry: Arc<dyn ChainRegistryClient>,
        pool_data: Arc<dyn PoolDataProvider>,
    ) -> Self {
        Self {
            assetlists_root,
            chains,
            registry,
            pool_data,
        }
    }

    /// Generates every configured chain in order. A failing chain is logged
    /// and recorded; it never stops the chains after it.
    pub(crate) async fn run(&self) -> RunReport {
        let mut report = RunReport::default();

        for chain in &self.chains {
            info!("generating zone config for {} ({})", chain.chain_name, chain.chain_id);
            let result = self.generate_chain(chain).await;
            match &result {
                Ok(path) => info!("wrote {}", path.display()),
                Err(err) => warn!("skipping {}: {}", chain.chain_name, error_chain(err)),
            }
            report.outcomes.push(ChainOutcome {
                chain_name: chain.chain_name.clone(),
                result,
            });
        }

        report
    }

    pub(crate) async fn generate_chain(&self, chain: &ChainTarget) -> Result<PathBuf, GenerateError> {
        let zone_assets = load_zone_assets(&self.assetlists_root, chain)?;

        let pool_assets = match self.pool_data.pool_assets(&chain.chain_name).await {
            Ok(Some(pool_assets)) => pool_assets,
            Ok(None) => {
                return Err(GenerateError::EnrichmentUnavailable {
                    chain: chain.chain_name.clone(),
                    reason: "no pool data returned".to_owned(),
                });
            }
            Err(err) => {
                return Err(GenerateError::EnrichmentUnavailable {
                    chain: chain.chain_name.clone(),
                    reason: format!("{err:#}"),
                });
            }
        };

        let resolver = AssetResolver::new(&chain.chain_name, &*self.registry, &pool_assets);
        let zone_config = ZoneConfig {
            chain_name: chain.chain_name.clone(),
            assets: resolver.resolve_all(&zone_assets),
        };
        info!(
            "resolved {} assets for {}",
            zone_config.assets.len(),
            chain.chain_name
        );

        write_zone_config(&self.assetlists_root, chain, &zone_config)
    }
}

fn error_chain(err: &GenerateError) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    message
}
