//! Core engine-facing contracts.
//!
//! The interface between the runtime (platform loop) and the application:
//! an `App` trait plus the per-frame context handed to it.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
