//! Memory (RAM) usage source

use sysinfo::System;

/// RAM usage as a share of total memory.
pub struct MemorySource {
    system: System,
}

impl MemorySource {
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }

    /// Instantaneous used/total in percent, clamped to 0..=100.
    ///
    /// Reads 0.0 when the total is unknown rather than dividing by zero.
    pub fn usage_percent(&mut self) -> f32 {
        self.system.refresh_memory();

        let total = self.system.total_memory();
        if total == 0 {
            return 0.0;
        }

        let used = self.system.used_memory();
        ((used as f64 / total as f64) * 100.0).clamp(0.0, 100.0) as f32
    }
}

impl Default for MemorySource {
    fn default() -> Self {
        Self::new()
    }
}
