mod error;
mod http;
mod types;

pub use error::ClientError;
pub use http::HttpDataSource;
pub use types::{SatelliteStatus, SatelliteSummary, ServiceHealth, TelemetrySample};

use async_trait::async_trait;

/// Pull-based access to the status and telemetry services.
///
/// The fetch methods surface transport, HTTP and decode failures through
/// [`ClientError`]; the health probes never fail and report a plain
/// up/down flag per service.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_satellite_list(&self) -> Result<Vec<SatelliteSummary>, ClientError>;

    async fn fetch_satellite_status(&self, id: u32) -> Result<SatelliteStatus, ClientError>;

    /// Recent samples, newest first, at most `limit` of them.
    async fn fetch_telemetry_history(
        &self,
        id: u32,
        limit: u32,
    ) -> Result<Vec<TelemetrySample>, ClientError>;

    async fn fetch_latest_telemetry(&self, id: u32) -> Result<TelemetrySample, ClientError>;

    async fn status_service_ok(&self) -> bool;

    async fn telemetry_service_ok(&self) -> bool;
}
