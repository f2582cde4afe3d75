//! Paint model shared between the board and the renderers.
//!
//! Only solid fills exist; every draw command carries a [`Color`].
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
