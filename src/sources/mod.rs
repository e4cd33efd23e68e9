//! Metric collectors
//!
//! One collector per metric, each degrading to a sentinel or zero on its
//! own so one failing subsystem never takes the whole status display down.

mod clock;
mod cpu;
mod memory;
mod network;
mod system_temp;

pub use clock::ClockSource;
pub use cpu::CpuSource;
pub use memory::MemorySource;
pub use network::{NetworkSource, NO_IP};
pub use system_temp::{ThermalSource, TEMP_UNAVAILABLE};

use crate::core::{MetricSnapshot, SnapshotProvider};

/// Owns the five collectors and assembles one snapshot per loop iteration.
pub struct Collectors {
    network: NetworkSource,
    thermal: ThermalSource,
    cpu: CpuSource,
    memory: MemorySource,
    clock: ClockSource,
}

impl Collectors {
    pub fn new() -> Self {
        Self {
            network: NetworkSource::new(),
            thermal: ThermalSource::new(),
            cpu: CpuSource::new(),
            memory: MemorySource::new(),
            clock: ClockSource::new(),
        }
    }
}

impl Default for Collectors {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotProvider for Collectors {
    fn sample(&mut self) -> MetricSnapshot {
        MetricSnapshot {
            ip_address: self.network.ip_address(),
            cpu_temperature: self.thermal.temperature(),
            cpu_usage_percent: self.cpu.usage_percent(),
            ram_usage_percent: self.memory.usage_percent(),
            local_time: self.clock.local_hhmm(),
        }
    }
}
