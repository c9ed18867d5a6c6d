use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use zc_types::{PoolAsset, PoolAssets};

pub const COINGECKO_ID: &str = "coingecko_id";

/// Descriptive asset metadata keyed by origin chain and base denom.
///
/// A missing chain, asset or property is `None`; implementations log their own
/// I/O problems rather than surfacing them to the resolver.
pub trait ChainRegistryClient: Send + Sync {
    fn get_property(&self, chain_name: &str, base_denom: &str, property: &str) -> Option<Value>;

    fn get_string_property(&self, chain_name: &str, base_denom: &str, property: &str) -> Option<String> {
        match self.get_property(chain_name, base_denom, property)? {
            Value::String(value) => Some(value),
            _ => None,
        }
    }
}

/// Live pool data for a host chain.
///
/// `Ok(None)` means the data is unavailable and the chain must not be generated.
#[async_trait]
pub trait PoolDataProvider: Send + Sync {
    async fn pool_assets(&self, chain_name: &str) -> Result<Option<PoolAssets>>;
}

#[derive(Default)]
pub struct InMemoryChainRegistry {
    properties: HashMap<(String, String), HashMap<String, Value>>,
}

impl InMemoryChainRegistry {
    pub fn insert(&mut self, chain_name: &str, base_denom: &str, property: &str, value: Value) {
        self.properties
            .entry((chain_name.to_owned(), base_denom.to_owned()))
            .or_default()
            .insert(property.to_owned(), value);
    }

    pub fn with_coingecko_id(mut self, chain_name: &str, base_denom: &str, coingecko_id: &str) -> Self {
        self.insert(chain_name, base_denom, COINGECKO_ID, Value::String(coingecko_id.to_owned()));
        self
    }
}

impl ChainRegistryClient for InMemoryChainRegistry {
    fn get_property(&self, chain_name: &str, base_denom: &str, property: &str) -> Option<Value> {
        self.properties
            .get(&(chain_name.to_owned(), base_denom.to_owned()))
            .and_then(|props| props.get(property))
            .cloned()
    }
}

/// Serves fixed pool data per chain; chains without an entry are unavailable.
#[derive(Default)]
pub struct StaticPoolDataProvider {
    chains: HashMap<String, PoolAssets>,
}

impl StaticPoolDataProvider {
    pub fn with_chain(mut self, chain_name: &str, assets: PoolAssets) -> Self {
        self.chains.insert(chain_name.to_owned(), assets);
        self
    }

    pub fn with_asset(mut self, chain_name: &str, denom: &str, asset: PoolAsset) -> Self {
        self.chains
            .entry(chain_name.to_owned())
            .or_default()
            .insert(denom.to_owned(), asset);
        self
    }
}

#[async_trait]
impl PoolDataProvider for StaticPoolDataProvider {
    async fn pool_assets(&self, chain_name: &str) -> Result<Option<PoolAssets>> {
        Ok(self.chains.get(chain_name).cloned())
    }
}
