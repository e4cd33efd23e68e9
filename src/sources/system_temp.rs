//! SoC temperature source
//!
//! Reads the kernel thermal zone file directly; on Raspberry Pi class
//! boards that is the CPU/SoC sensor.

use crate::core::constants::THERMAL_ZONE_PATH;
use anyhow::{Context, Result};
use log::error;
use std::fs;
use std::path::PathBuf;

/// Sentinel shown when the thermal zone cannot be read
pub const TEMP_UNAVAILABLE: &str = "N/A";

/// Temperature reader over a sysfs thermal zone.
pub struct ThermalSource {
    zone_path: PathBuf,
}

impl ThermalSource {
    pub fn new() -> Self {
        Self::with_path(THERMAL_ZONE_PATH)
    }

    /// Read a different zone file. Tests point this at a scratch file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            zone_path: path.into(),
        }
    }

    /// Formatted temperature like "45.2°C", or "N/A" when the zone file
    /// is missing or malformed.
    pub fn temperature(&mut self) -> String {
        match self.read_millidegrees() {
            Ok(millidegrees) => format!("{:.1}°C", millidegrees as f64 / 1000.0),
            Err(e) => {
                error!("Failed to read CPU temperature: {}", e);
                TEMP_UNAVAILABLE.to_string()
            }
        }
    }

    // The kernel reports millidegrees Celsius as a bare integer
    fn read_millidegrees(&self) -> Result<i64> {
        let raw = fs::read_to_string(&self.zone_path)
            .with_context(|| format!("failed to read {}", self.zone_path.display()))?;
        raw.trim()
            .parse::<i64>()
            .with_context(|| format!("unexpected thermal zone contents {:?}", raw.trim()))
    }
}

impl Default for ThermalSource {
    fn default() -> Self {
        Self::new()
    }
}
