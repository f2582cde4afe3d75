use std::fmt;
use std::path::Path;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::coords::Vec2;

/// Line height reported for empty strings and unknown fonts, as a multiple
/// of the font size.
const FALLBACK_LINE_HEIGHT: f32 = 1.2;

/// Error returned when a font cannot be read or parsed.
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

impl FontId {
    /// Id of the `index`-th font loaded into a system. Ids a system does not
    /// hold are skipped when rendering.
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }
}

/// Fonts parsed once at startup.
///
/// Owned by the application and lent to the text renderer every frame so
/// glyphs can be rasterized on first use.
#[derive(Default)]
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    /// Loads the first of `paths` that can be read and parsed.
    ///
    /// The error names the last candidate that failed.
    pub fn load_first<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<FontId, FontLoadError> {
        let mut last_failure = None;
        for path in paths {
            let path = path.as_ref();
            let loaded = std::fs::read(path)
                .map_err(|e| FontLoadError(e.to_string()))
                .and_then(|bytes| self.load_font(&bytes));
            match loaded {
                Ok(id) => {
                    log::debug!("loaded font {}", path.display());
                    return Ok(id);
                }
                Err(FontLoadError(reason)) => {
                    last_failure = Some(format!("{}: {reason}", path.display()));
                }
            }
        }
        Err(FontLoadError(last_failure.unwrap_or_else(|| "no font candidates".to_string())))
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Size of the laid-out single line `text`, in logical pixels.
    ///
    /// Layout runs at `size * scale` and is divided back, so the result lines
    /// up with glyphs the renderer rasterizes at the same scale.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32, scale: f32) -> Vec2 {
        let empty = Vec2::new(0.0, size * FALLBACK_LINE_HEIGHT);
        let Some(font) = self.get(id) else {
            return empty;
        };

        let scale = scale.max(0.01);
        let phys_size = size * scale;

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, phys_size, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return empty;
        }

        // Pen position after each glyph, not the bitmap edge.
        let w = glyphs
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, phys_size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        let h = glyphs
            .iter()
            .map(|g| g.y + g.height as f32)
            .fold(phys_size, f32::max);
        Vec2::new(w / scale, h / scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── loading ───────────────────────────────────────────────────────────

    #[test]
    fn garbage_bytes_are_rejected() {
        let mut fonts = FontSystem::new();
        assert!(fonts.load_font(b"not a font").is_err());
        assert!(fonts.is_empty());
    }

    #[test]
    fn missing_candidates_report_last_path() {
        let mut fonts = FontSystem::new();
        let err = fonts
            .load_first(&["/nonexistent/a.ttf", "/nonexistent/b.ttf"])
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/b.ttf"));
        assert_eq!(fonts.len(), 0);
    }

    #[test]
    fn no_candidates_is_an_error() {
        let mut fonts = FontSystem::new();
        let none: [&str; 0] = [];
        assert!(fonts.load_first(&none).is_err());
    }

    // ── measuring ─────────────────────────────────────────────────────────

    #[test]
    fn unknown_font_measures_as_empty_line() {
        let fonts = FontSystem::new();
        let size = fonts.measure_text("25mm", FontId::from_index(3), 10.0, 2.0);
        assert_eq!(size, Vec2::new(0.0, 12.0));
    }
}
