//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events
//! - Startup failures (missing window, document or canvas)

pub mod input;

pub use input::Command;

use std::fmt;

/// Fatal startup failures. The game cannot run without a 2D canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    NoWindow,
    NoDocument,
    /// No element with this id
    NoCanvas(String),
    /// Element exists but is not a `<canvas>`
    NotACanvas(String),
    /// `getContext("2d")` failed or returned null
    NoContext,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::NoWindow => write!(f, "no global window"),
            InitError::NoDocument => write!(f, "window has no document"),
            InitError::NoCanvas(id) => write!(f, "no element with id '{}'", id),
            InitError::NotACanvas(id) => write!(f, "element '{}' is not a canvas", id),
            InitError::NoContext => write!(f, "could not acquire a 2D rendering context"),
        }
    }
}

impl std::error::Error for InitError {}

#[cfg(target_arch = "wasm32")]
impl From<InitError> for wasm_bindgen::JsValue {
    fn from(err: InitError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
