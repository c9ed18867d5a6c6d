use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};
use zc_registry_client::ChainRegistryClient;

const ASSETLIST_FILE_NAME: &str = "assetlist.json";
const TESTNETS_DIR: &str = "testnets";

#[derive(Debug, Default, Deserialize)]
struct RegistryAssetList {
    #[serde(default)]
    assets: Vec<Map<String, Value>>,
}

impl RegistryAssetList {
    fn asset(&self, base_denom: &str) -> Option<&Map<String, Value>> {
        self.assets
            .iter()
            .find(|asset| asset.get("base").and_then(Value::as_str) == Some(base_denom))
    }
}

/// Chain-registry checkout on local disk.
///
/// Mainnets live at `<root>/<chain_name>/assetlist.json`, testnets under
/// `<root>/testnets/<chain_name>/`. Each chain's list is parsed at most once;
/// chains with no readable list are remembered as absent.
pub struct FileChainRegistry {
    root: PathBuf,
    cache: RwLock<HashMap<String, Option<Arc<RegistryAssetList>>>>,
}

impl FileChainRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn candidate_paths(&self, chain_name: &str) -> [PathBuf; 2] {
        [
            self.root.join(chain_name).join(ASSETLIST_FILE_NAME),
            self.root.join(TESTNETS_DIR).join(chain_name).join(ASSETLIST_FILE_NAME),
        ]
    }

    fn read_assetlist(path: &Path) -> Result<RegistryAssetList> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read assetlist: {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("failed to parse assetlist: {}", path.display()))
    }

    fn load_chain(&self, chain_name: &str) -> Option<Arc<RegistryAssetList>> {
        for path in self.candidate_paths(chain_name) {
            if !path.exists() {
                continue;
            }
            match Self::read_assetlist(&path) {
                Ok(list) => return Some(Arc::new(list)),
                Err(err) => {
                    warn!("{:#}", err);
                    return None;
                }
            }
        }

        debug!("no chain registry assetlist for {}", chain_name);
        None
    }

    fn assetlist(&self, chain_name: &str) -> Option<Arc<RegistryAssetList>> {
        {
            let guard = self.cache.read().unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(cached) = guard.get(chain_name) {
                return cached.clone();
            }
        }

        let loaded = self.load_chain(chain_name);
        let mut guard = self.cache.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.insert(chain_name.to_owned(), loaded.clone());
        loaded
    }
}

impl ChainRegistryClient for FileChainRegistry {
    fn get_property(&self, chain_name: &str, base_denom: &str, property: &str) -> Option<Value> {
        let list = self.assetlist(chain_name)?;
        let Some(asset) = list.asset(base_denom) else {
            debug!("{} not found in {} assetlist", base_denom, chain_name);
            return None;
        };
        asset.get(property).cloned()
    }
}
