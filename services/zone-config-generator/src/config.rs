use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

pub(crate) const ZONE_ASSETS_FILE_NAME: &str = "osmosis.zone_assets.json";
const ZONE_CONFIG_SUFFIX: &str = ".zone_config.json";
const DEFAULT_ASSETLISTS_ROOT: &str = "../../..";

/// Every chain the generator knows about, in processing order.
/// The flag marks chains generated when `ZONE_CHAINS` is not set.
const KNOWN_CHAINS: [(&str, &str, bool); 3] = [
    ("osmosis", "osmosis-1", true),
    ("osmosistestnet4", "osmo-test-4", false),
    ("osmosistestnet", "osmo-test-5", true),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ChainTarget {
    pub(crate) chain_name: String,
    pub(crate) chain_id: String,
}

impl ChainTarget {
    pub(crate) fn new(chain_name: &str, chain_id: &str) -> Self {
        Self {
            chain_name: chain_name.to_owned(),
            chain_id: chain_id.to_owned(),
        }
    }

    pub(crate) fn zone_assets_path(&self, assetlists_root: &Path) -> PathBuf {
        assetlists_root.join(&self.chain_id).join(ZONE_ASSETS_FILE_NAME)
    }

    pub(crate) fn zone_config_path(&self, assetlists_root: &Path) -> PathBuf {
        assetlists_root
            .join(&self.chain_id)
            .join(format!("{}{ZONE_CONFIG_SUFFIX}", self.chain_id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PoolDataSource {
    Http { url: Option<String> },
    Snapshot { dir: PathBuf },
}

#[derive(Debug, Clone)]
pub(crate) struct GeneratorConfig {
    pub(crate) assetlists_root: PathBuf,
    pub(crate) chain_registry_root: PathBuf,
    pub(crate) pool_data: PoolDataSource,
    pub(crate) chains: Vec<ChainTarget>,
}

impl GeneratorConfig {
    pub(crate) fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let assetlists_root = PathBuf::from(
            non_empty("ZONE_ASSETLISTS_ROOT").unwrap_or_else(|| DEFAULT_ASSETLISTS_ROOT.to_owned()),
        );
        let chain_registry_root = non_empty("CHAIN_REGISTRY_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| assetlists_root.join("..").join("chain-registry"));

        let pool_data = match non_empty("POOL_DATA_DIR") {
            Some(dir) => PoolDataSource::Snapshot { dir: PathBuf::from(dir) },
            None => PoolDataSource::Http {
                url: non_empty("POOL_DATA_URL"),
            },
        };

        let chains = match non_empty("ZONE_CHAINS") {
            Some(selection) => select_chains(&selection)?,
            None => default_chains(),
        };

        Ok(Self {
            assetlists_root,
            chain_registry_root,
            pool_data,
            chains,
        })
    }
}

pub(crate) fn default_chains() -> Vec<ChainTarget> {
    KNOWN_CHAINS
        .iter()
        .filter(|(_, _, enabled)| *enabled)
        .map(|(name, id, _)| ChainTarget::new(name, id))
        .collect()
}

/// Picks known chains by name; the configured order wins over the order given.
fn select_chains(selection: &str) -> Result<Vec<ChainTarget>> {
    let requested: Vec<&str> = selection
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();

    if requested.is_empty() {
        bail!("ZONE_CHAINS does not name any chain");
    }

    for name in &requested {
        if !KNOWN_CHAINS.iter().any(|(known, _, _)| known == name) {
            bail!("unknown chain in ZONE_CHAINS: {name}");
        }
    }

    Ok(KNOWN_CHAINS
        .iter()
        .filter(|(name, _, _)| requested.contains(name))
        .map(|(name, id, _)| ChainTarget::new(name, id))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<GeneratorConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        GeneratorConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_match_published_chains() -> Result<()> {
        let config = config_from(&[])?;

        assert_eq!(config.assetlists_root, PathBuf::from("../../.."));
        assert_eq!(config.chain_registry_root, PathBuf::from("../../../../chain-registry"));
        assert_eq!(config.pool_data, PoolDataSource::Http { url: None });
        assert_eq!(
            config.chains,
            vec![
                ChainTarget::new("osmosis", "osmosis-1"),
                ChainTarget::new("osmosistestnet", "osmo-test-5"),
            ]
        );
        Ok(())
    }

    #[test]
    fn snapshot_dir_takes_precedence_over_url() -> Result<()> {
        let config = config_from(&[
            ("POOL_DATA_URL", "https://pools.example"),
            ("POOL_DATA_DIR", "/tmp/pools"),
        ])?;
        assert_eq!(
            config.pool_data,
            PoolDataSource::Snapshot {
                dir: PathBuf::from("/tmp/pools")
            }
        );
        Ok(())
    }

    #[test]
    fn chain_selection_keeps_configured_order() -> Result<()> {
        let config = config_from(&[("ZONE_CHAINS", "osmosistestnet, osmosistestnet4,osmosis")])?;
        let names: Vec<&str> = config.chains.iter().map(|c| c.chain_name.as_str()).collect();
        assert_eq!(names, vec!["osmosis", "osmosistestnet4", "osmosistestnet"]);
        Ok(())
    }

    #[test]
    fn unknown_chain_is_rejected() {
        assert!(config_from(&[("ZONE_CHAINS", "osmosis,juno")]).is_err());
    }

    #[test]
    fn empty_chain_selection_is_rejected() {
        assert!(config_from(&[("ZONE_CHAINS", ",")]).is_err());
        assert!(config_from(&[("ZONE_CHAINS", " , ,")]).is_err());
    }

    #[test]
    fn paths_derive_from_chain_id() {
        let chain = ChainTarget::new("osmosis", "osmosis-1");
        let root = Path::new("/data/assetlists");
        assert_eq!(
            chain.zone_assets_path(root),
            PathBuf::from("/data/assetlists/osmosis-1/osmosis.zone_assets.json")
        );
        assert_eq!(
            chain.zone_config_path(root),
            PathBuf::from("/data/assetlists/osmosis-1/osmosis-1.zone_config.json")
        );
    }
}
