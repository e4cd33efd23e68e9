//! Startup font selection

use crate::core::constants::FONT_ATLAS_PATH;
use embedded_graphics::image::ImageRaw;
use embedded_graphics::mono_font::iso_8859_1::FONT_5X8;
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::prelude::*;
use log::{info, warn};
use std::fs;
use std::path::Path;

/// Built-in glyph atlas. The ISO 8859-1 variant covers the degree sign
/// used by the temperature line.
pub const DEFAULT_FONT: &MonoFont<'static> = &FONT_5X8;

/// Pick the render font once at startup.
///
/// A raw 1-bpp atlas with the same layout as the built-in font may be
/// dropped at the configured path to reskin the glyphs. Anything missing
/// or malformed falls back to the built-in atlas; this is not an error.
pub fn select_font() -> &'static MonoFont<'static> {
    match load_atlas(Path::new(FONT_ATLAS_PATH)) {
        Some(font) => font,
        None => {
            info!("Using built-in 5x8 font");
            DEFAULT_FONT
        }
    }
}

/// Load a replacement atlas from `path`, rejecting files whose size does
/// not match the built-in atlas geometry.
pub fn load_atlas(path: &Path) -> Option<&'static MonoFont<'static>> {
    let data = match fs::read(path) {
        Ok(data) => data,
        // An absent atlas is the normal case
        Err(_) => return None,
    };

    let atlas_size = DEFAULT_FONT.image.size();
    let expected = (((atlas_size.width + 7) / 8) * atlas_size.height) as usize;
    if data.len() != expected {
        warn!(
            "Ignoring font atlas {}: {} bytes, expected {}",
            path.display(),
            data.len(),
            expected
        );
        return None;
    }

    info!("Loaded font atlas from {}", path.display());

    // Leaked once at startup; the font lives for the process lifetime
    let pixels: &'static [u8] = Box::leak(data.into_boxed_slice());
    let font = MonoFont {
        image: ImageRaw::new(pixels, atlas_size.width),
        glyph_mapping: DEFAULT_FONT.glyph_mapping,
        character_size: DEFAULT_FONT.character_size,
        character_spacing: DEFAULT_FONT.character_spacing,
        baseline: DEFAULT_FONT.baseline,
        underline: DEFAULT_FONT.underline,
        strikethrough: DEFAULT_FONT.strikethrough,
    };
    Some(Box::leak(Box::new(font)))
}
