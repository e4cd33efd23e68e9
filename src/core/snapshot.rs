//! Telemetry snapshot and the provider seam

/// One round of collected host metrics.
///
/// Assembled fresh on every loop iteration, handed to the renderer by
/// reference, and dropped before the next sleep. Numeric fields are
/// clamped by their collectors; nothing downstream re-checks them.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSnapshot {
    /// Primary IPv4 address, or "No IP" when none is usable
    pub ip_address: String,
    /// Formatted like "45.2°C", or "N/A" when the sensor read fails
    pub cpu_temperature: String,
    /// Global CPU utilization since the previous sample, 0.0..=100.0
    pub cpu_usage_percent: f32,
    /// Used RAM share, 0.0..=100.0
    pub ram_usage_percent: f32,
    /// Local wall clock, zero-padded "HH:MM"
    pub local_time: String,
}

/// Source of loop snapshots.
///
/// Implemented by the real collector set; tests substitute scripted
/// providers.
pub trait SnapshotProvider {
    /// Gather all metrics into one snapshot.
    ///
    /// Individual collector failures degrade to sentinel values inside the
    /// snapshot instead of surfacing here.
    fn sample(&mut self) -> MetricSnapshot;
}
