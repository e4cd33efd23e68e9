//! Core loop, shutdown plumbing, and shared types

pub mod constants;
mod shutdown;
mod snapshot;
mod update_loop;

pub use shutdown::{install_signal_handler, Shutdown};
pub use snapshot::{MetricSnapshot, SnapshotProvider};
pub use update_loop::UpdateLoop;
