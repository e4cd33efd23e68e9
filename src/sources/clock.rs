//! Wall-clock source

use chrono::{DateTime, Local, TimeZone, Timelike};

/// Local time formatted for the status line.
pub struct ClockSource;

impl ClockSource {
    pub fn new() -> Self {
        Self
    }

    /// Current local time as zero-padded 24-hour "HH:MM"
    pub fn local_hhmm(&self) -> String {
        hhmm(&Local::now())
    }
}

impl Default for ClockSource {
    fn default() -> Self {
        Self::new()
    }
}

fn hhmm<Tz: TimeZone>(time: &DateTime<Tz>) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}
