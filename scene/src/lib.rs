//! Scene engine for the 3D shape viewer.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns all
//! view state: which primitive is displayed, its color and rotation, the
//! camera distance, auto-rotation speed and the drag gesture. The host page
//! is responsible only for wiring DOM events to the engine and scheduling
//! frames with `requestAnimationFrame`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`graph`] | Scene graph model: light, mesh, material, rotation |
//! | [`shape`] | Closed shape catalogue and geometry presets |
//! | [`controls`] | Control dispatch table and typed control events |
//! | [`camera`] | Perspective camera, viewport and screen points |
//! | [`input`] | Drag-to-rotate gesture state machine |
//! | [`color`] | 24-bit RGB color parsing and formatting |
//! | [`render`] | three.js bindings and the view that mirrors the model |
//! | [`error`] | Engine error type |
//! | [`consts`] | Shared numeric constants (ranges, defaults, frustum) |

use wasm_bindgen::prelude::*;

pub mod camera;
pub mod color;
pub mod consts;
pub mod controls;
pub mod engine;
pub mod error;
pub mod graph;
pub mod input;
pub mod render;
pub mod shape;

pub use engine::{Engine, EngineCore};
pub use error::SceneError;

/// Module start hook: route `log` records and panics to the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("console logger already installed: {err}")));
    }
}
