//! Rendering module
//!
//! The simulation never draws. [`Frame::build`] reduces a state to draw
//! commands, and the canvas backend replays them in the browser.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod frame;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use frame::{DrawCommand, Frame, colors};
