//! Font loading and text measurement.
//!
//! Glyph rasterization happens in `render::shapes::TextRenderer`; this module
//! only owns the parsed fonts.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};
