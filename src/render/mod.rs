//! Two-line status layout

mod font;

pub use font::{load_atlas, select_font, DEFAULT_FONT};

use crate::core::MetricSnapshot;
use crate::display::FrameBuffer;
use anyhow::Result;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

/// Round to the nearest whole percent, ties away from zero, so 62.5 reads
/// as 63%.
fn round_percent(value: f32) -> u32 {
    value.round() as u32
}

/// Upper status line, e.g. "IP:192.168.1.5 CPU:37%"
pub fn format_top_line(snapshot: &MetricSnapshot) -> String {
    format!(
        "IP:{} CPU:{}%",
        snapshot.ip_address,
        round_percent(snapshot.cpu_usage_percent)
    )
}

/// Lower status line, e.g. "Tmp:45.2°C Tm:14:07 R:63%"
pub fn format_bottom_line(snapshot: &MetricSnapshot) -> String {
    format!(
        "Tmp:{} Tm:{} R:{}%",
        snapshot.cpu_temperature,
        snapshot.local_time,
        round_percent(snapshot.ram_usage_percent)
    )
}

/// Draws the two status lines into a frame buffer.
///
/// Rendering is deterministic: the same snapshot and font always produce
/// byte-identical buffer contents. Text wider than the panel is cropped at
/// the right edge.
pub struct StatusRenderer {
    style: MonoTextStyle<'static, BinaryColor>,
}

impl StatusRenderer {
    pub fn new(font: &'static MonoFont<'static>) -> Self {
        Self {
            style: MonoTextStyle::new(font, BinaryColor::On),
        }
    }

    /// Compose both lines onto `frame`: the top line at the origin, the
    /// bottom line starting at half the panel height.
    pub fn render(&self, snapshot: &MetricSnapshot, frame: &mut FrameBuffer) -> Result<()> {
        frame.clear_pixels();

        Text::with_baseline(
            &format_top_line(snapshot),
            Point::zero(),
            self.style,
            Baseline::Top,
        )
        .draw(frame)?;

        let bottom_y = frame.height() as i32 / 2;
        Text::with_baseline(
            &format_bottom_line(snapshot),
            Point::new(0, bottom_y),
            self.style,
            Baseline::Top,
        )
        .draw(frame)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> MetricSnapshot {
        MetricSnapshot {
            ip_address: "192.168.1.5".to_string(),
            cpu_temperature: "45.2°C".to_string(),
            cpu_usage_percent: 37.4,
            ram_usage_percent: 62.8,
            local_time: "14:07".to_string(),
        }
    }

    fn failed_snapshot() -> MetricSnapshot {
        MetricSnapshot {
            ip_address: "No IP".to_string(),
            cpu_temperature: "N/A".to_string(),
            cpu_usage_percent: 0.0,
            ram_usage_percent: 0.0,
            local_time: "14:07".to_string(),
        }
    }

    #[test]
    fn test_top_line_formatting() {
        assert_eq!(format_top_line(&snapshot()), "IP:192.168.1.5 CPU:37%");
    }

    #[test]
    fn test_bottom_line_formatting() {
        assert_eq!(format_bottom_line(&snapshot()), "Tmp:45.2°C Tm:14:07 R:63%");
    }

    #[test]
    fn test_sentinel_lines_when_all_sources_failed() {
        let failed = failed_snapshot();
        assert_eq!(format_top_line(&failed), "IP:No IP CPU:0%");
        assert_eq!(format_bottom_line(&failed), "Tmp:N/A Tm:14:07 R:0%");
    }

    #[test]
    fn test_percent_rounding_ties_away_from_zero() {
        let mut s = snapshot();

        s.cpu_usage_percent = 0.5;
        assert_eq!(format_top_line(&s), "IP:192.168.1.5 CPU:1%");

        s.cpu_usage_percent = 1.49;
        assert_eq!(format_top_line(&s), "IP:192.168.1.5 CPU:1%");

        s.cpu_usage_percent = 0.49;
        assert_eq!(format_top_line(&s), "IP:192.168.1.5 CPU:0%");

        s.ram_usage_percent = 99.5;
        assert_eq!(format_bottom_line(&s), "Tmp:45.2°C Tm:14:07 R:100%");
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = StatusRenderer::new(DEFAULT_FONT);
        let mut first = FrameBuffer::new(128, 32);
        let mut second = FrameBuffer::new(128, 32);

        renderer.render(&snapshot(), &mut first).unwrap();
        renderer.render(&snapshot(), &mut second).unwrap();

        assert_eq!(first.as_bytes(), second.as_bytes());
        assert!(first.as_bytes().iter().any(|&b| b != 0));
    }

    #[test]
    fn test_render_clears_the_previous_frame() {
        let renderer = StatusRenderer::new(DEFAULT_FONT);

        let mut reused = FrameBuffer::new(128, 32);
        renderer.render(&snapshot(), &mut reused).unwrap();
        renderer.render(&failed_snapshot(), &mut reused).unwrap();

        let mut fresh = FrameBuffer::new(128, 32);
        renderer.render(&failed_snapshot(), &mut fresh).unwrap();

        assert_eq!(reused.as_bytes(), fresh.as_bytes());
    }

    #[test]
    fn test_lines_land_in_their_halves() {
        let renderer = StatusRenderer::new(DEFAULT_FONT);
        let mut frame = FrameBuffer::new(128, 32);
        renderer.render(&snapshot(), &mut frame).unwrap();

        let row_lit = |y: u32| (0..128).any(|x| frame.pixel(x, y));

        // Top line occupies rows 0..8, bottom line rows 16..24
        assert!((0..8).any(row_lit));
        assert!((16..24).any(row_lit));
        assert!(!(8..16).any(row_lit));
        assert!(!(24..32).any(row_lit));
    }

    #[test]
    fn test_overlong_text_is_cropped_not_panicking() {
        let renderer = StatusRenderer::new(DEFAULT_FONT);
        let mut s = snapshot();
        s.ip_address = "255.255.255.255".to_string();
        s.cpu_usage_percent = 100.0;

        let mut frame = FrameBuffer::new(128, 32);
        renderer.render(&s, &mut frame).unwrap();
        assert!(frame.as_bytes().iter().any(|&b| b != 0));
    }
}
