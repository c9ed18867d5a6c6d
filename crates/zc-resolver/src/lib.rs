use tracing::{debug, warn};
use zc_ibc::ibc_hash;
use zc_registry_client::{COINGECKO_ID, ChainRegistryClient};
use zc_types::{GeneratedAsset, OverrideProperties, PoolAssets, PriceSource, ZoneAsset};

/// Properties derived from the chain registry that a zone asset may override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedProperties {
    pub coingecko_id: Option<String>,
}

impl DerivedProperties {
    pub fn lookup<R>(registry: &R, asset: &ZoneAsset) -> Self
    where
        R: ChainRegistryClient + ?Sized,
    {
        let reference = asset.reference();
        let coingecko_id =
            registry.get_string_property(&reference.chain_name, &reference.base_denom, COINGECKO_ID);
        if coingecko_id.is_none() {
            debug!(
                "no {} in registry for {}/{}",
                COINGECKO_ID, reference.chain_name, reference.base_denom
            );
        }
        Self { coingecko_id }
    }
}

/// Overrides win over derived values whenever they are set and non-empty.
pub fn apply_overrides(derived: DerivedProperties, overrides: Option<&OverrideProperties>) -> DerivedProperties {
    let Some(overrides) = overrides else {
        return derived;
    };

    DerivedProperties {
        coingecko_id: overrides
            .coingecko_id
            .clone()
            .filter(|id| !id.is_empty())
            .or(derived.coingecko_id),
    }
}

/// Splits a `protocol:denom:pool_id` price source.
///
/// Missing segments stay `None` and extra segments are dropped.
pub fn parse_price_source(source: &str) -> PriceSource {
    let parts: Vec<&str> = source.split(':').collect();
    if parts.len() != 3 {
        warn!("malformed price source '{}', expected protocol:denom:pool", source);
    }

    PriceSource {
        pool: parts.get(2).map(|part| (*part).to_owned()),
        denom: parts.get(1).map(|part| (*part).to_owned()),
    }
}

/// Resolves zone assets listed on `host_chain_name` into generated assets.
pub struct AssetResolver<'a, R: ?Sized> {
    host_chain_name: &'a str,
    registry: &'a R,
    pool_assets: &'a PoolAssets,
}

impl<'a, R> AssetResolver<'a, R>
where
    R: ChainRegistryClient + ?Sized,
{
    pub fn new(host_chain_name: &'a str, registry: &'a R, pool_assets: &'a PoolAssets) -> Self {
        Self {
            host_chain_name,
            registry,
            pool_assets,
        }
    }

    pub fn resolve(&self, zone_asset: &ZoneAsset) -> GeneratedAsset {
        let derived = apply_overrides(
            DerivedProperties::lookup(self.registry, zone_asset),
            zone_asset.override_properties.as_ref(),
        );

        let ibc_denom = self.ibc_denom(zone_asset);

        let mut generated = GeneratedAsset {
            base_denom: zone_asset.base_denom.clone(),
            chain_name: zone_asset.chain_name.clone(),
            coingecko_id: derived.coingecko_id,
            ibc_denom,
            verified: zone_asset.osmosis_verified,
            peg_mechanism: zone_asset.peg_mechanism.clone(),
            unstable: zone_asset.osmosis_unstable,
            unlisted: zone_asset.osmosis_unlisted,
            additional_transfer: zone_asset.additional_transfer.clone(),
            ..GeneratedAsset::default()
        };

        let local_denom = generated.ibc_denom.as_deref().unwrap_or(&zone_asset.base_denom);
        if let Some(pool_asset) = self.pool_assets.get(local_denom) {
            generated.api_include = pool_asset.osmosis_info;
            generated.price = pool_asset
                .osmosis_price
                .as_deref()
                .filter(|source| !source.is_empty())
                .map(parse_price_source);
        }

        generated
    }

    /// Resolves every asset, keeping input order.
    pub fn resolve_all(&self, zone_assets: &[ZoneAsset]) -> Vec<GeneratedAsset> {
        zone_assets.iter().map(|asset| self.resolve(asset)).collect()
    }

    fn ibc_denom(&self, zone_asset: &ZoneAsset) -> Option<String> {
        if zone_asset.chain_name == self.host_chain_name {
            return None;
        }

        match zone_asset.path.as_deref() {
            Some(path) => Some(ibc_hash(path)),
            None => {
                warn!(
                    "{}/{} is not native to {} but has no transfer path",
                    zone_asset.chain_name, zone_asset.base_denom, self.host_chain_name
                );
                None
            }
        }
    }
}
