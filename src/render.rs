use crate::client::{SatelliteStatus, SatelliteSummary, ServiceHealth, TelemetrySample};

/// Output surface for list, status and telemetry snapshots.
///
/// Implementations own their redraw strategy; the controller only hands
/// them immutable snapshots and never depends on a particular display
/// technology.
pub trait RenderSink: Send + Sync {
    fn render_satellite_list(&self, items: &[SatelliteSummary]);
    fn render_status_panel(&self, status: &SatelliteStatus);
    fn render_current_readings(&self, sample: &TelemetrySample);
    fn render_series(&self, window: &[TelemetrySample]);
    fn render_service_health(&self, health: &ServiceHealth);
    fn render_transient_error(&self, message: &str);
    fn teardown_monitoring_view(&self);
}

/// Plain-terminal renderer.
pub struct ConsoleSink;

impl RenderSink for ConsoleSink {
    fn render_satellite_list(&self, items: &[SatelliteSummary]) {
        println!();
        println!("  {:>4}  {:<32} {:<8} {:<20} {}", "id", "name", "status", "orbit", "in operation");
        for item in items {
            println!(
                "  {:>4}  {:<32} {:<8} {:<20} {}",
                item.id,
                item.name,
                if item.status { "active" } else { "inactive" },
                item.orbit_type,
                format_operational_time(item.operational_time),
            );
        }
        println!();
    }

    fn render_status_panel(&self, status: &SatelliteStatus) {
        println!();
        println!(
            "  status: {}   orbit: {}   in operation: {}   updated: {}",
            if status.status { "active" } else { "inactive" },
            status.orbit_type,
            format_operational_time(status.operational_time),
            status.last_update.format("%Y-%m-%d %H:%M:%S"),
        );
    }

    fn render_current_readings(&self, sample: &TelemetrySample) {
        println!(
            "  [{}] temp {:.1}°C  battery {:.1}%  lat {:.4}°  lon {:.4}°  alt {:.1} km",
            sample.timestamp.format("%H:%M:%S"),
            sample.temperature,
            sample.battery_level,
            sample.latitude,
            sample.longitude,
            sample.altitude,
        );
    }

    fn render_series(&self, window: &[TelemetrySample]) {
        if window.is_empty() {
            return;
        }
        let times: Vec<String> = window
            .iter()
            .map(|s| s.timestamp.format("%H:%M").to_string())
            .collect();
        let temps: Vec<String> = window
            .iter()
            .map(|s| format!("{:>5.1}", s.temperature))
            .collect();
        let batteries: Vec<String> = window
            .iter()
            .map(|s| format!("{:>5.1}", s.battery_level))
            .collect();
        println!("     time {}", times.join(" "));
        println!("     temp {}", temps.join(" "));
        println!("  battery {}", batteries.join(" "));
    }

    fn render_service_health(&self, health: &ServiceHealth) {
        println!(
            "  status service: {}   telemetry service: {}",
            if health.status_service_up { "up" } else { "down" },
            if health.telemetry_service_up { "up" } else { "down" },
        );
    }

    fn render_transient_error(&self, message: &str) {
        println!("  ! {message}");
    }

    fn teardown_monitoring_view(&self) {
        println!("  left monitoring view");
    }
}

/// Humanizes an operational-time figure given in hours.
pub fn format_operational_time(hours: f64) -> String {
    let total = hours.max(0.0) as u64;
    let years = total / 8760;
    let days = (total % 8760) / 24;
    let remaining_hours = total % 24;

    if years > 0 {
        format!("{years} years, {days} days")
    } else if days > 0 {
        format!("{days} days, {remaining_hours}h")
    } else {
        format!("{remaining_hours} hours")
    }
}
