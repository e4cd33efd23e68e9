//! The collect/render/push loop

use super::shutdown::Shutdown;
use super::snapshot::SnapshotProvider;
use crate::display::{DisplayDriver, FrameBuffer};
use crate::render::StatusRenderer;
use log::{error, info, trace};
use std::time::Duration;

/// Owns everything the running phase touches and drives it at a fixed
/// cadence until shutdown is requested.
pub struct UpdateLoop<P, D> {
    provider: P,
    renderer: StatusRenderer,
    frame: FrameBuffer,
    display: D,
    shutdown: Shutdown,
    interval: Duration,
}

impl<P, D> UpdateLoop<P, D>
where
    P: SnapshotProvider,
    D: DisplayDriver,
{
    /// Wire the loop up. The frame buffer is sized from the driver's
    /// reported geometry so the two can never drift apart.
    pub fn new(
        provider: P,
        renderer: StatusRenderer,
        display: D,
        shutdown: Shutdown,
        interval: Duration,
    ) -> Self {
        let (width, height) = display.geometry();
        Self {
            provider,
            renderer,
            frame: FrameBuffer::new(width, height),
            display,
            shutdown,
            interval,
        }
    }

    /// Sample, render and push until termination is requested, then blank
    /// the panel exactly once on the way out.
    ///
    /// Once the shutdown flag has been observed no further sample or push
    /// happens; the blank is the last display operation.
    pub fn run(&mut self) {
        info!("Update loop running every {:?}", self.interval);

        while !self.shutdown.is_cancelled() {
            self.tick();
            self.shutdown.wait(self.interval);
        }

        info!("Termination requested, blanking display");
        if let Err(e) = self.display.clear() {
            error!("Failed to blank display during shutdown: {}", e);
        }
    }

    /// One collect/render/push cycle. A failed push is logged and dropped;
    /// the next successful push repaints the whole frame anyway.
    fn tick(&mut self) {
        let snapshot = self.provider.sample();
        trace!("Sampled {:?}", snapshot);

        if let Err(e) = self.renderer.render(&snapshot, &mut self.frame) {
            error!("Failed to render status frame: {}", e);
            return;
        }

        if let Err(e) = self.display.push(&self.frame) {
            error!("Failed to push frame to display: {}", e);
        }
    }
}
