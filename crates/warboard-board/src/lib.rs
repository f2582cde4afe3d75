//! Tabletop board model.
//!
//! A top-down board measured in inches, a set of scene objects on it
//! (surface, borders, grid, terrain, size buttons, miniature bases), an
//! orthographic camera looking down on it, and the interaction controller
//! that turns pointer events into selection and drag moves.
//!
//! Nothing here touches the GPU. The board records itself into a
//! [`DrawList`](warboard_engine::scene::DrawList) and the application hands
//! that to the engine renderers.

pub mod board;
pub mod camera;
pub mod config;
pub mod draw;
pub mod interaction;
pub mod layout;
pub mod object;
pub mod pick;

pub use board::{Board, SceneService};
pub use camera::OrthoCamera;
pub use config::{BoardConfig, ConfigError};
pub use draw::LabelStyle;
pub use interaction::{DragState, InteractionController};
pub use object::{ObjectId, Role, SceneObject, Shape, Spawn};
pub use pick::{Hit, Picker, Ray};
