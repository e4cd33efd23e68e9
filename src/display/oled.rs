//! SSD1306 panel driver over the Linux I2C character device

use super::{DeviceIoError, DisplayDriver, FrameBuffer};
use anyhow::{anyhow, Context, Result};
use linux_embedded_hal::I2cdev;
use log::info;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

/// Production display handle for a 128x32 SSD1306 module.
pub struct Oled {
    display: Ssd1306<
        I2CInterface<I2cdev>,
        DisplaySize128x32,
        BufferedGraphicsMode<DisplaySize128x32>,
    >,
}

impl Oled {
    /// Open the I2C bus and run the controller init sequence.
    ///
    /// Failures here are fatal to startup; there is no display to fall
    /// back to.
    pub fn open(bus_path: &str, address: u8) -> Result<Self> {
        let i2c = I2cdev::new(bus_path)
            .with_context(|| format!("failed to open I2C bus {}", bus_path))?;

        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let mut display = Ssd1306::new(interface, DisplaySize128x32, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        display
            .init()
            .map_err(|e| anyhow!("failed to initialize SSD1306 at {:#04x}: {:?}", address, e))?;

        info!("SSD1306 initialized on {} at {:#04x}", bus_path, address);
        Ok(Self { display })
    }
}

impl DisplayDriver for Oled {
    fn geometry(&self) -> (u32, u32) {
        let (width, height) = self.display.dimensions();
        (u32::from(width), u32::from(height))
    }

    fn clear(&mut self) -> Result<(), DeviceIoError> {
        let (width, height) = self.geometry();
        for y in 0..height {
            for x in 0..width {
                self.display.set_pixel(x, y, false);
            }
        }
        self.display.flush().map_err(DeviceIoError::Bus)
    }

    fn push(&mut self, frame: &FrameBuffer) -> Result<(), DeviceIoError> {
        let (width, height) = self.geometry();
        if frame.width() != width || frame.height() != height {
            return Err(DeviceIoError::FrameMismatch {
                frame_width: frame.width(),
                frame_height: frame.height(),
                panel_width: width,
                panel_height: height,
            });
        }

        for y in 0..height {
            for x in 0..width {
                self.display.set_pixel(x, y, frame.pixel(x, y));
            }
        }
        self.display.flush().map_err(DeviceIoError::Bus)
    }
}
