//! In-memory display double for tests

use super::{DeviceIoError, DisplayDriver, FrameBuffer};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// One recorded driver call
#[derive(Debug, Clone)]
pub enum DisplayOp {
    Push { bytes: Vec<u8>, at: Instant },
    Clear { at: Instant },
}

#[derive(Default)]
struct Inner {
    width: u32,
    height: u32,
    ops: Vec<DisplayOp>,
    fail_pushes: VecDeque<DeviceIoError>,
    fail_clears: VecDeque<DeviceIoError>,
}

/// Driver double that records every operation instead of touching
/// hardware.
///
/// Clones share one recording, so a test can keep a handle for inspection
/// after the update loop has taken ownership of the driver.
#[derive(Clone)]
pub struct FakeDisplay {
    inner: Arc<Mutex<Inner>>,
}

impl FakeDisplay {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                width,
                height,
                ..Inner::default()
            })),
        }
    }

    /// Queue a failure for the next push; queued failures are consumed in
    /// order before any recording happens.
    pub fn fail_next_push(&self, error: DeviceIoError) {
        self.inner.lock().unwrap().fail_pushes.push_back(error);
    }

    /// Queue a failure for the next clear.
    pub fn fail_next_clear(&self, error: DeviceIoError) {
        self.inner.lock().unwrap().fail_clears.push_back(error);
    }

    /// Everything recorded so far, in call order
    pub fn ops(&self) -> Vec<DisplayOp> {
        self.inner.lock().unwrap().ops.clone()
    }

    pub fn push_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap()
            .ops
            .iter()
            .filter(|op| matches!(op, DisplayOp::Push { .. }))
            .count()
    }

    pub fn clear_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap()
            .ops
            .iter()
            .filter(|op| matches!(op, DisplayOp::Clear { .. }))
            .count()
    }

    /// Contents of the most recent successful push
    pub fn last_frame_bytes(&self) -> Option<Vec<u8>> {
        self.inner
            .lock()
            .unwrap()
            .ops
            .iter()
            .rev()
            .find_map(|op| match op {
                DisplayOp::Push { bytes, .. } => Some(bytes.clone()),
                DisplayOp::Clear { .. } => None,
            })
    }
}

impl DisplayDriver for FakeDisplay {
    fn geometry(&self) -> (u32, u32) {
        let inner = self.inner.lock().unwrap();
        (inner.width, inner.height)
    }

    fn clear(&mut self) -> Result<(), DeviceIoError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(error) = inner.fail_clears.pop_front() {
            return Err(error);
        }
        inner.ops.push(DisplayOp::Clear { at: Instant::now() });
        Ok(())
    }

    fn push(&mut self, frame: &FrameBuffer) -> Result<(), DeviceIoError> {
        let mut inner = self.inner.lock().unwrap();
        if frame.width() != inner.width || frame.height() != inner.height {
            return Err(DeviceIoError::FrameMismatch {
                frame_width: frame.width(),
                frame_height: frame.height(),
                panel_width: inner.width,
                panel_height: inner.height,
            });
        }
        if let Some(error) = inner.fail_pushes.pop_front() {
            return Err(error);
        }
        inner.ops.push(DisplayOp::Push {
            bytes: frame.as_bytes().to_vec(),
            at: Instant::now(),
        });
        Ok(())
    }
}
