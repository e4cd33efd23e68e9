//! Shared constants for the daemon

use std::time::Duration;

/// Interval between telemetry samples; one frame is pushed per interval
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(5);

/// Linux I2C character device the panel is wired to
pub const I2C_BUS_PATH: &str = "/dev/i2c-1";

/// SSD1306 controller address. Most 128x32 modules answer at 0x3C; some
/// boards strap the alternate 0x3D (`i2cdetect -y 1` shows which).
pub const DISPLAY_I2C_ADDR: u8 = 0x3C;

/// sysfs file exposing the SoC temperature in millidegrees Celsius
pub const THERMAL_ZONE_PATH: &str = "/sys/class/thermal/thermal_zone0/temp";

/// Optional raw glyph atlas; the built-in 5x8 font is used when absent
pub const FONT_ATLAS_PATH: &str = "/usr/share/statscreen/font5x8.raw";
