//! Shared numeric constants for the scene crate.

// ── Rotation ────────────────────────────────────────────────────

/// Radians of rotation applied per pixel of pointer drag.
pub const DRAG_SENSITIVITY: f64 = 0.01;

/// Per-frame auto-rotation increment at page load, in radians.
pub const DEFAULT_ROTATION_SPEED: f64 = 0.01;

/// Lower bound of the rotation speed slider.
pub const MIN_ROTATION_SPEED: f64 = 0.0;

/// Upper bound of the rotation speed slider.
pub const MAX_ROTATION_SPEED: f64 = 0.1;

/// Step of the rotation speed slider.
pub const ROTATION_SPEED_STEP: f64 = 0.001;

// ── Camera ──────────────────────────────────────────────────────

/// Camera distance from the origin along +Z at page load.
pub const DEFAULT_CAMERA_DISTANCE: f64 = 28.0;

/// Closest the zoom slider can bring the camera.
pub const MIN_CAMERA_DISTANCE: f64 = 10.0;

/// Farthest the zoom slider can push the camera.
pub const MAX_CAMERA_DISTANCE: f64 = 60.0;

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEG: f64 = 75.0;

/// Near clipping plane.
pub const CAMERA_NEAR: f64 = 0.1;

/// Far clipping plane.
pub const CAMERA_FAR: f64 = 1000.0;

// ── Lighting / colors ───────────────────────────────────────────

/// Mesh color at page load (`#ff6600`).
pub const DEFAULT_COLOR: u32 = 0x00ff_6600;

/// Scene clear color.
pub const BACKGROUND_COLOR: u32 = 0x0000_0000;

/// Point light color.
pub const LIGHT_COLOR: u32 = 0x00ff_ffff;

/// Point light intensity.
pub const LIGHT_INTENSITY: f64 = 1.5;

/// Point light position; x, y and z share the same offset.
pub const LIGHT_OFFSET: f64 = 20.0;
