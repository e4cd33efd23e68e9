//! In-memory 1-bpp frame buffer

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use std::convert::Infallible;

/// Off-screen raster the renderer draws into and the driver transfers out.
///
/// Pixels are packed the way SSD1306 RAM expects them: each byte covers an
/// eight-pixel vertical strip, pages run top to bottom and columns left to
/// right, so byte `(y / 8) * width + x` holds bit `y % 8`.
pub struct FrameBuffer {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl FrameBuffer {
    /// Allocate an all-off buffer. Heights that are not a multiple of
    /// eight round up to whole pages.
    pub fn new(width: u32, height: u32) -> Self {
        let pages = (height + 7) / 8;
        Self {
            width,
            height,
            bytes: vec![0; (width * pages) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Switch every pixel off
    pub fn clear_pixels(&mut self) {
        self.bytes.fill(0);
    }

    /// Page-packed contents, ready for a page-by-page transfer
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Set one pixel; coordinates outside the panel are ignored
    pub fn set_pixel(&mut self, x: u32, y: u32, on: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = ((y / 8) * self.width + x) as usize;
        let bit = 1u8 << (y % 8);
        if on {
            self.bytes[index] |= bit;
        } else {
            self.bytes[index] &= !bit;
        }
    }

    /// Read one pixel; coordinates outside the panel read as off
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = ((y / 8) * self.width + x) as usize;
        self.bytes[index] & (1 << (y % 8)) != 0
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 {
                self.set_pixel(point.x as u32, point.y as u32, color.is_on());
            }
        }
        Ok(())
    }
}
