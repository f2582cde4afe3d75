//! Shape renderers: one instanced pipeline per `DrawCmd` variant.
//!
//! Each renderer walks the draw list in paint order and skips commands of
//! other kinds, so a frame calls them back to back on the same list.

mod common;

pub mod circle;
pub mod rect;
pub mod text;

pub use circle::CircleRenderer;
pub use rect::RectRenderer;
pub use text::TextRenderer;
