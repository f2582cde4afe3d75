//! Warboard engine crate.
//!
//! Owns the platform + GPU runtime pieces the board and the application
//! binary sit on: window loop, wgpu device, input translation, frame timing,
//! logging, the flat-shape renderers and text.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
pub mod text;
