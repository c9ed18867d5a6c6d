use std::fs;
use std::path::Path;
use zc_types::{ZoneAsset, ZoneAssetList};

use crate::config::ChainTarget;
use crate::error::GenerateError;

pub(crate) fn load_zone_assets(assetlists_root: &Path, chain: &ChainTarget) -> Result<Vec<ZoneAsset>, GenerateError> {
    let path = chain.zone_assets_path(assetlists_root);
    let load_error = |source: Box<dyn std::error::Error + Send + Sync>| GenerateError::Load {
        chain: chain.chain_name.clone(),
        path: path.clone(),
        source,
    };

    let raw = fs::read_to_string(&path).map_err(|err| load_error(err.into()))?;
    let list: ZoneAssetList = serde_json::from_str(&raw).map_err(|err| load_error(err.into()))?;
    Ok(list.assets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_assets_in_file_order() -> anyhow::Result<()> {
        let root = tempfile::tempdir()?;
        let chain = ChainTarget::new("osmosis", "osmosis-1");
        fs::create_dir_all(root.path().join("osmosis-1"))?;
        fs::write(
            chain.zone_assets_path(root.path()),
            r#"{"chain_name":"osmosis","assets":[
                {"base_denom":"uosmo","chain_name":"osmosis","osmosis_verified":true},
                {"base_denom":"uatom","chain_name":"cosmoshub","path":"transfer/channel-0/uatom"}
            ]}"#,
        )?;

        let assets = load_zone_assets(root.path(), &chain)?;
        assert_eq!(assets.len(), 2);
        assert_eq!(assets[0].base_denom, "uosmo");
        assert_eq!(assets[1].path.as_deref(), Some("transfer/channel-0/uatom"));
        Ok(())
    }

    #[test]
    fn missing_file_is_load_error() -> anyhow::Result<()> {
        let root = tempfile::tempdir()?;
        let chain = ChainTarget::new("osmosistestnet", "osmo-test-5");

        let err = load_zone_assets(root.path(), &chain).expect_err("file is missing");
        assert!(matches!(err, GenerateError::Load { ref chain, .. } if chain == "osmosistestnet"));
        Ok(())
    }

    #[test]
    fn invalid_json_is_load_error() -> anyhow::Result<()> {
        let root = tempfile::tempdir()?;
        let chain = ChainTarget::new("osmosis", "osmosis-1");
        fs::create_dir_all(root.path().join("osmosis-1"))?;
        fs::write(chain.zone_assets_path(root.path()), "{\"assets\": [")?;

        let err = load_zone_assets(root.path(), &chain).expect_err("json is truncated");
        assert!(matches!(err, GenerateError::Load { .. }));
        Ok(())
    }
}
