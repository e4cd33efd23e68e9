//! CPU usage source

use sysinfo::{CpuRefreshKind, RefreshKind, System};

/// Global CPU utilization via sysinfo.
///
/// Usage is computed against the previous refresh, so the first sample
/// after startup reads 0.0 until a baseline exists.
pub struct CpuSource {
    system: System,
}

impl CpuSource {
    pub fn new() -> Self {
        let system =
            System::new_with_specifics(RefreshKind::new().with_cpu(CpuRefreshKind::everything()));
        Self { system }
    }

    /// Current global CPU usage in percent, clamped to 0..=100.
    ///
    /// Reads 0.0 when no usable figure is available.
    pub fn usage_percent(&mut self) -> f32 {
        self.system.refresh_cpu_all();
        let usage = self.system.global_cpu_usage();
        if usage.is_finite() {
            usage.clamp(0.0, 100.0)
        } else {
            0.0
        }
    }
}

impl Default for CpuSource {
    fn default() -> Self {
        Self::new()
    }
}
