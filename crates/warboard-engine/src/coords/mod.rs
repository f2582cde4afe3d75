//! Coordinate and geometry types shared across the renderers and the board.
//!
//! Canonical CPU space for drawing:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! World-space types (`Vec3`) use +Y up; the board's camera converts between
//! the two. Renderers convert logical pixels to NDC in shaders using a
//! viewport uniform.

mod vec2;
mod vec3;
mod viewport;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use viewport::Viewport;
