//! Shape catalogue: the closed set of primitives and their geometry presets.
//!
//! `ShapeKind` is the only way to name a primitive inside the engine. The
//! string form (the `<option value>` in the page) is parsed exactly once, at
//! the control boundary, and unknown identifiers are rejected there. Every
//! other mapping in this module is an exhaustive `match`.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SceneError;

/// A primitive the viewer can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// 8×8×8 box.
    #[default]
    Cube,
    Sphere,
    Cone,
    Cylinder,
    Torus,
    /// Regular tetrahedron.
    Pyramid,
    Octahedron,
}

impl ShapeKind {
    /// All shapes in selector order.
    pub const ALL: [Self; 7] = [
        Self::Cube,
        Self::Sphere,
        Self::Cone,
        Self::Cylinder,
        Self::Torus,
        Self::Pyramid,
        Self::Octahedron,
    ];

    /// Identifier used as the `<option>` value.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Sphere => "sphere",
            Self::Cone => "cone",
            Self::Cylinder => "cylinder",
            Self::Torus => "torus",
            Self::Pyramid => "pyramid",
            Self::Octahedron => "octahedron",
        }
    }

    /// Human-readable label for the selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Cube => "Cube",
            Self::Sphere => "Sphere",
            Self::Cone => "Cone",
            Self::Cylinder => "Cylinder",
            Self::Torus => "Torus",
            Self::Pyramid => "Pyramid",
            Self::Octahedron => "Octahedron",
        }
    }

    /// The fixed geometry preset for this shape.
    #[must_use]
    pub fn geometry(self) -> Geometry {
        match self {
            Self::Cube => Geometry::Box { width: 8.0, height: 8.0, depth: 8.0 },
            Self::Sphere => Geometry::Sphere { radius: 6.0, width_segments: 32, height_segments: 32 },
            Self::Cone => Geometry::Cone { radius: 5.0, height: 10.0, radial_segments: 32 },
            Self::Cylinder => Geometry::Cylinder {
                radius_top: 4.0,
                radius_bottom: 4.0,
                height: 10.0,
                radial_segments: 32,
            },
            Self::Torus => Geometry::Torus { radius: 6.0, tube: 2.0, radial_segments: 16, tubular_segments: 100 },
            Self::Pyramid => Geometry::Tetrahedron { radius: 6.0 },
            Self::Octahedron => Geometry::Octahedron { radius: 6.0 },
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ShapeKind {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| SceneError::UnknownShape(s.to_owned()))
    }
}

/// Constructor parameters for a three.js geometry.
///
/// Field names follow the three.js constructor argument names; segment
/// counts are integers, extents are world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Geometry {
    Box { width: f64, height: f64, depth: f64 },
    Sphere { radius: f64, width_segments: u32, height_segments: u32 },
    Cone { radius: f64, height: f64, radial_segments: u32 },
    Cylinder { radius_top: f64, radius_bottom: f64, height: f64, radial_segments: u32 },
    Torus { radius: f64, tube: f64, radial_segments: u32, tubular_segments: u32 },
    Tetrahedron { radius: f64 },
    Octahedron { radius: f64 },
}
