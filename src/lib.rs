//! statscreen: a tiny OLED status display daemon for single-board computers
//!
//! Every few seconds the daemon samples host telemetry (IP address, CPU
//! usage, CPU temperature, RAM usage, wall-clock time) and renders it as a
//! two-line status onto an SSD1306 128x32 OLED over I2C. Failing metrics
//! degrade to sentinel values; SIGINT/SIGTERM blank the panel and exit.

pub mod core;
pub mod display;
pub mod render;
pub mod sources;

// Re-export commonly used types
pub use core::{MetricSnapshot, Shutdown, SnapshotProvider, UpdateLoop};
pub use display::{DisplayDriver, FakeDisplay, FrameBuffer, Oled};
pub use sources::Collectors;
