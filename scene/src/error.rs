//! Engine error type.
//!
//! Every fallible engine operation validates its input before touching scene
//! state, so an `Err` always means "nothing changed". At the WebAssembly
//! boundary the error becomes a thrown JS `Error` via the `From` impl below.

use wasm_bindgen::JsValue;

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("unknown shape: {0:?}")]
    UnknownShape(String),
    #[error("unknown control: {0:?}")]
    UnknownControl(String),
    #[error("invalid color {0:?}; expected #rgb or #rrggbb")]
    InvalidColor(String),
    #[error("invalid value {value:?} for {control}")]
    InvalidNumber { control: &'static str, value: String },
    #[error("no mesh attached to the scene")]
    NoMesh,
    #[error("snapshot serialization failed: {0}")]
    Snapshot(String),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl SceneError {
    /// Wrap a `JsValue` thrown by a browser or three.js call.
    #[must_use]
    pub fn from_js(value: &JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<SceneError> for JsValue {
    fn from(err: SceneError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
