use std::path::PathBuf;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures that abandon a single chain; other chains keep going.
#[derive(Debug, Error)]
pub(crate) enum GenerateError {
    #[error("failed to load zone assets for {chain} from {}", .path.display())]
    Load {
        chain: String,
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    #[error("pool data unavailable for {chain}: {reason}")]
    EnrichmentUnavailable { chain: String, reason: String },

    #[error("failed to write zone config for {chain} to {}", .path.display())]
    Write {
        chain: String,
        path: PathBuf,
        #[source]
        source: BoxError,
    },
}
