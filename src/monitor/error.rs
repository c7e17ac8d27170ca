use thiserror::Error;

use crate::client::ClientError;

/// Satellite list could not be loaded; no partial list is returned.
#[derive(Debug, Error)]
#[error("satellite list load failed: {0}")]
pub struct LoadError(#[from] pub ClientError);

/// Entering the monitoring view failed before the scheduler was armed.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("status fetch failed: {0}")]
    Status(ClientError),
    #[error("telemetry history fetch failed: {0}")]
    Telemetry(ClientError),
}
