//! Scene graph model: the light and the (at most one) displayed mesh.
//!
//! This is the engine's source of truth for what is on screen. The renderer
//! mirrors it into three.js objects; tests inspect it directly. The graph
//! enforces the single-mesh invariant itself: [`SceneGraph::replace_mesh`]
//! detaches the previous mesh before attaching the new one, and there is no
//! way to attach a second mesh alongside the first.

#[cfg(test)]
#[path = "graph_test.rs"]
mod graph_test;

use serde::Serialize;

use crate::color::Color;
use crate::consts::{LIGHT_COLOR, LIGHT_INTENSITY, LIGHT_OFFSET};
use crate::shape::{Geometry, ShapeKind};

/// Identifier assigned to each mesh when it is built. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MeshId(pub u64);

/// Euler rotation of a mesh, in radians.
///
/// `pitch` is rotation about X, `yaw` about Y. Neither is wrapped; three.js
/// accepts unbounded angles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rotation {
    pub pitch: f64,
    pub yaw: f64,
}

/// Shaded material; the color is the only adjustable property.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Material {
    pub color: Color,
}

/// A displayed primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mesh {
    pub id: MeshId,
    pub shape: ShapeKind,
    pub geometry: Geometry,
    pub material: Material,
    pub rotation: Rotation,
}

/// The single point light illuminating the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointLight {
    pub color: Color,
    pub intensity: f64,
    pub position: [f64; 3],
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            color: Color::from_hex(LIGHT_COLOR),
            intensity: LIGHT_INTENSITY,
            position: [LIGHT_OFFSET; 3],
        }
    }
}

/// Scene membership plus the mesh id allocator.
#[derive(Debug, Default)]
pub struct SceneGraph {
    light: PointLight,
    mesh: Option<Mesh>,
    next_id: u64,
}

impl SceneGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mesh for `shape` with the given color and zero rotation.
    ///
    /// The mesh is not attached; pass it to [`Self::replace_mesh`].
    pub fn build_mesh(&mut self, shape: ShapeKind, color: Color) -> Mesh {
        self.next_id += 1;
        Mesh {
            id: MeshId(self.next_id),
            shape,
            geometry: shape.geometry(),
            material: Material { color },
            rotation: Rotation::default(),
        }
    }

    /// Detach the current mesh (if any), then attach `mesh`.
    ///
    /// Returns the detached mesh.
    pub fn replace_mesh(&mut self, mesh: Mesh) -> Option<Mesh> {
        let previous = self.detach_mesh();
        self.mesh = Some(mesh);
        previous
    }

    /// Remove the current mesh from the scene.
    pub fn detach_mesh(&mut self) -> Option<Mesh> {
        self.mesh.take()
    }

    #[must_use]
    pub fn mesh(&self) -> Option<&Mesh> {
        self.mesh.as_ref()
    }

    pub fn mesh_mut(&mut self) -> Option<&mut Mesh> {
        self.mesh.as_mut()
    }

    /// Number of meshes currently attached (0 or 1).
    #[must_use]
    pub fn mesh_count(&self) -> usize {
        usize::from(self.mesh.is_some())
    }

    /// Whether the mesh with `id` is currently attached.
    #[must_use]
    pub fn contains(&self, id: MeshId) -> bool {
        self.mesh.as_ref().is_some_and(|m| m.id == id)
    }

    #[must_use]
    pub fn light(&self) -> &PointLight {
        &self.light
    }
}
