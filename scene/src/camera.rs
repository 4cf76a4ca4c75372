#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::Serialize;

use crate::consts::{
    CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, DEFAULT_CAMERA_DISTANCE, MAX_CAMERA_DISTANCE, MIN_CAMERA_DISTANCE,
};

/// A point in screen space (CSS pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - other`.
    #[must_use]
    pub fn delta_from(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }
}

/// Size of the render surface in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width / height`, or `None` when the height is not positive.
    #[must_use]
    pub fn aspect(&self) -> Option<f64> {
        (self.height > 0.0 && self.width.is_finite()).then(|| self.width / self.height)
    }
}

/// Perspective camera looking down -Z at the origin.
///
/// Only `distance` (the camera's z position) and `aspect` change after
/// construction; the frustum angles are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Camera {
    pub fov_deg: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    pub distance: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov_deg: CAMERA_FOV_DEG,
            aspect: 1.0,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            distance: DEFAULT_CAMERA_DISTANCE,
        }
    }
}

impl Camera {
    #[must_use]
    pub fn with_viewport(viewport: Viewport) -> Self {
        let mut camera = Self::default();
        camera.fit_viewport(viewport);
        camera
    }

    /// Set the distance, clamped to the zoom range.
    pub fn set_distance(&mut self, distance: f64) {
        self.distance = distance.clamp(MIN_CAMERA_DISTANCE, MAX_CAMERA_DISTANCE);
    }

    /// Recompute the aspect ratio for `viewport`. A degenerate viewport keeps
    /// the previous aspect.
    pub fn fit_viewport(&mut self, viewport: Viewport) {
        if let Some(aspect) = viewport.aspect() {
            self.aspect = aspect;
        }
    }
}
