//! Display device seam
//!
//! [`DisplayDriver`] is the trait the update loop talks to. Production
//! wires in [`Oled`]; tests substitute [`FakeDisplay`].

mod fake;
mod frame;
mod oled;

pub use fake::{DisplayOp, FakeDisplay};
pub use frame::FrameBuffer;
pub use oled::Oled;

use thiserror::Error;

/// Failure talking to the panel
#[derive(Debug, Error)]
pub enum DeviceIoError {
    /// The controller rejected or dropped a bus transfer
    #[error("I2C transfer failed: {0:?}")]
    Bus(display_interface::DisplayError),
    /// The frame does not match the panel dimensions
    #[error("frame is {frame_width}x{frame_height}, panel is {panel_width}x{panel_height}")]
    FrameMismatch {
        frame_width: u32,
        frame_height: u32,
        panel_width: u32,
        panel_height: u32,
    },
}

/// Hardware seam for the status panel.
///
/// Exactly one implementation is constructed per process and handed to the
/// update loop, which also owns the single shutdown blank.
pub trait DisplayDriver {
    /// Addressable panel size in pixels, queried once to size the frame
    /// buffer
    fn geometry(&self) -> (u32, u32);

    /// Switch every pixel off on the physical panel. Safe to call on an
    /// already blank panel.
    fn clear(&mut self) -> Result<(), DeviceIoError>;

    /// Transfer one full frame of matching dimensions to the panel
    fn push(&mut self, frame: &FrameBuffer) -> Result<(), DeviceIoError>;
}
