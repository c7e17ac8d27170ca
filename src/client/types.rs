use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One satellite as reported by the status service list endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SatelliteSummary {
    pub id: u32,
    pub name: String,
    pub status: bool,
    pub orbit_type: String,
    /// Hours in operation since launch.
    pub operational_time: f64,
    pub last_update: DateTime<Utc>,
}

/// Detail view of a single satellite from the status service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SatelliteStatus {
    pub status: bool,
    pub orbit_type: String,
    pub operational_time: f64,
    pub last_update: DateTime<Utc>,
}

/// One telemetry reading. Immutable once decoded.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TelemetrySample {
    pub timestamp: DateTime<Utc>,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Percent, 0-100.
    pub battery_level: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// Kilometers above sea level.
    pub altitude: f64,
}

/// Reachability of the two backing services, recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceHealth {
    pub status_service_up: bool,
    pub telemetry_service_up: bool,
}

impl ServiceHealth {
    pub fn all_up(&self) -> bool {
        self.status_service_up && self.telemetry_service_up
    }
}
