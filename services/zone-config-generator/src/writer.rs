use std::fs;
use std::path::{Path, PathBuf};
use zc_types::ZoneConfig;

use crate::config::ChainTarget;
use crate::error::GenerateError;

/// Writes the zone config next to its input, replacing any previous file.
///
/// Output goes to a `.tmp` sibling first and is renamed into place, so a
/// failed write never leaves a truncated config behind.
pub(crate) fn write_zone_config(
    assetlists_root: &Path,
    chain: &ChainTarget,
    zone_config: &ZoneConfig,
) -> Result<PathBuf, GenerateError> {
    let path = chain.zone_config_path(assetlists_root);
    let write_error = |source: Box<dyn std::error::Error + Send + Sync>| GenerateError::Write {
        chain: chain.chain_name.clone(),
        path: path.clone(),
        source,
    };

    let body = serde_json::to_string_pretty(zone_config).map_err(|err| write_error(err.into()))?;

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, body).map_err(|err| write_error(err.into()))?;
    if let Err(err) = fs::rename(&tmp_path, &path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(write_error(err.into()));
    }

    Ok(path)
}
