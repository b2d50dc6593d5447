//! Rendering module
//!
//! `Scene` is a plain snapshot of the simulation; the Canvas 2D renderer
//! (wasm32 only) turns it into pixels.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::{CanvasRenderer, Sprite};
pub use scene::Scene;
