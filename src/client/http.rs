use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::error::ClientError;
use super::types::{SatelliteStatus, SatelliteSummary, TelemetrySample};
use super::DataSource;

/// HTTP implementation of [`DataSource`] over the two backing services.
pub struct HttpDataSource {
    client: reqwest::Client,
    status_base: String,
    telemetry_base: String,
}

impl HttpDataSource {
    pub fn new(status_base: &str, telemetry_base: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            status_base: status_base.trim_end_matches('/').to_string(),
            telemetry_base: telemetry_base.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ClientError> {
        let response = self.client.get(url.as_str()).send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }

    async fn probe(&self, base: &str) -> bool {
        match self.client.get(format!("{base}/health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                log::debug!("health probe against {base} failed: {err}");
                false
            }
        }
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch_satellite_list(&self) -> Result<Vec<SatelliteSummary>, ClientError> {
        self.get_json(format!("{}/satelites", self.status_base))
            .await
    }

    async fn fetch_satellite_status(&self, id: u32) -> Result<SatelliteStatus, ClientError> {
        self.get_json(format!("{}/satelites/{id}", self.status_base))
            .await
    }

    async fn fetch_telemetry_history(
        &self,
        id: u32,
        limit: u32,
    ) -> Result<Vec<TelemetrySample>, ClientError> {
        self.get_json(format!(
            "{}/telemetria/{id}/historico?limit={limit}",
            self.telemetry_base
        ))
        .await
    }

    async fn fetch_latest_telemetry(&self, id: u32) -> Result<TelemetrySample, ClientError> {
        self.get_json(format!("{}/telemetria/{id}/ultimo", self.telemetry_base))
            .await
    }

    async fn status_service_ok(&self) -> bool {
        self.probe(&self.status_base).await
    }

    async fn telemetry_service_ok(&self) -> bool {
        self.probe(&self.telemetry_base).await
    }
}
