use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AssetRef {
    pub chain_name: String,
    pub base_denom: String,
}

/// Manually curated values that win over anything derived from the registry.
///
/// Keys not listed here are accepted in the input and ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverrideProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coingecko_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoneAsset {
    pub base_denom: String,
    pub chain_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical: Option<AssetRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_properties: Option<OverrideProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osmosis_verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peg_mechanism: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osmosis_unstable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osmosis_unlisted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_transfer: Option<Value>,
}

impl ZoneAsset {
    pub fn new(chain_name: impl Into<String>, base_denom: impl Into<String>) -> Self {
        Self {
            base_denom: base_denom.into(),
            chain_name: chain_name.into(),
            canonical: None,
            override_properties: None,
            path: None,
            osmosis_verified: None,
            peg_mechanism: None,
            osmosis_unstable: None,
            osmosis_unlisted: None,
            additional_transfer: None,
        }
    }

    /// The identity used for metadata lookup: the canonical reference when
    /// present, otherwise the asset itself.
    pub fn reference(&self) -> AssetRef {
        match &self.canonical {
            Some(canonical) => canonical.clone(),
            None => AssetRef {
                chain_name: self.chain_name.clone(),
                base_denom: self.base_denom.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ZoneAssetList {
    #[serde(default)]
    pub assets: Vec<ZoneAsset>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denom: Option<String>,
}

// Field order is the serialized key order of the output file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneratedAsset {
    pub base_denom: String,
    pub chain_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coingecko_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ibc_denom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_include: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peg_mechanism: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unstable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlisted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_transfer: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoneConfig {
    pub chain_name: String,
    pub assets: Vec<GeneratedAsset>,
}

/// Live pool inclusion and price source for a single denom.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PoolAsset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osmosis_info: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osmosis_price: Option<String>,
}

pub type PoolAssets = HashMap<String, PoolAsset>;
