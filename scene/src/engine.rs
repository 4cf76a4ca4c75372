use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::camera::{Camera, Point, Viewport};
use crate::color::Color;
use crate::consts::{DEFAULT_ROTATION_SPEED, DRAG_SENSITIVITY};
use crate::controls::{ControlEvent, ControlId, SPEED_RANGE};
use crate::error::SceneError;
use crate::graph::{Mesh, MeshId, Rotation, SceneGraph};
use crate::input::DragState;
use crate::render::ThreeView;
use crate::shape::ShapeKind;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Changes the renderer must mirror into its three.js objects.
///
/// Rotation is not reported here; the renderer copies it every frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    /// `detached` (if any) left the scene and `mesh` took its place.
    MeshReplaced { detached: Option<MeshId>, mesh: Mesh },
    MeshRecolored { id: MeshId, color: Color },
    CameraMoved { distance: f64 },
    ViewportResized { viewport: Viewport, aspect: f64 },
}

/// Read-only summary of the view state, serialized for the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub shape: Option<ShapeKind>,
    pub mesh_id: Option<MeshId>,
    pub rotation: Option<Rotation>,
    pub color: Color,
    pub rotation_speed: f64,
    pub camera_distance: f64,
    pub aspect: f64,
    pub viewport: Viewport,
    pub dragging: bool,
}

/// Core engine state — all logic that doesn't depend on the browser.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug)]
pub struct EngineCore {
    pub graph: SceneGraph,
    pub camera: Camera,
    pub viewport: Viewport,
    pub drag: DragState,
    /// Radians added to pitch and yaw every frame.
    pub rotation_speed: f64,
    /// Color given to newly built meshes.
    pub color: Color,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            graph: SceneGraph::new(),
            camera: Camera::default(),
            viewport: Viewport::default(),
            drag: DragState::default(),
            rotation_speed: DEFAULT_ROTATION_SPEED,
            color: Color::default(),
        }
    }
}

impl EngineCore {
    /// An engine with no mesh attached. Call [`Self::bootstrap`] before ticking.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Size the camera to `viewport` and attach the initial cube.
    ///
    /// Returns the actions needed to bring a fresh renderer in line.
    pub fn bootstrap(&mut self, viewport: Viewport) -> Vec<Action> {
        vec![
            self.resize(viewport.width, viewport.height),
            Action::CameraMoved { distance: self.camera.distance },
            self.select_shape(ShapeKind::default()),
        ]
    }

    // --- Shape factory ---

    /// Replace the displayed mesh with a fresh `shape` in the current color.
    pub fn select_shape(&mut self, shape: ShapeKind) -> Action {
        let mesh = self.graph.build_mesh(shape, self.color);
        let detached = self.graph.replace_mesh(mesh.clone()).map(|m| m.id);
        log::debug!("shape {shape} attached as mesh {}", mesh.id.0);
        Action::MeshReplaced { detached, mesh }
    }

    // --- Controls ---

    /// Recolor the current mesh and remember `color` for future meshes.
    pub fn set_color(&mut self, color: Color) -> Action {
        self.color = color;
        match self.graph.mesh_mut() {
            Some(mesh) => {
                mesh.material.color = color;
                Action::MeshRecolored { id: mesh.id, color }
            }
            None => Action::None,
        }
    }

    /// Move the camera to `distance`, clamped to the zoom range.
    pub fn set_zoom(&mut self, distance: f64) -> Action {
        self.camera.set_distance(distance);
        Action::CameraMoved { distance: self.camera.distance }
    }

    /// Set the per-frame rotation increment, clamped to the speed range.
    pub fn set_speed(&mut self, speed: f64) -> Action {
        self.rotation_speed = SPEED_RANGE.clamp(speed);
        Action::None
    }

    /// Apply a parsed control event.
    pub fn dispatch(&mut self, event: ControlEvent) -> Action {
        match event {
            ControlEvent::Shape(shape) => self.select_shape(shape),
            ControlEvent::Color(color) => self.set_color(color),
            ControlEvent::Zoom(distance) => self.set_zoom(distance),
            ControlEvent::Speed(speed) => self.set_speed(speed),
        }
    }

    /// Route a raw widget change through the dispatch table.
    ///
    /// # Errors
    ///
    /// Rejects unknown control ids and unparseable values; state is left
    /// untouched and a warning is logged.
    pub fn on_control(&mut self, dom_id: &str, raw: &str) -> Result<Action, SceneError> {
        let event = ControlId::from_dom_id(dom_id).and_then(|control| ControlEvent::parse(control, raw));
        match event {
            Ok(event) => Ok(self.dispatch(event)),
            Err(err) => {
                log::warn!("ignoring {dom_id} input: {err}");
                Err(err)
            }
        }
    }

    // --- Pointer ---

    pub fn on_pointer_down(&mut self, at: Point) {
        self.drag.press(at);
    }

    /// Rotate the mesh by the drag delta. Returns the new rotation while dragging.
    pub fn on_pointer_move(&mut self, at: Point) -> Option<Rotation> {
        let delta = self.drag.move_to(at)?;
        let mesh = self.graph.mesh_mut()?;
        mesh.rotation.yaw += delta.x * DRAG_SENSITIVITY;
        mesh.rotation.pitch += delta.y * DRAG_SENSITIVITY;
        Some(mesh.rotation)
    }

    pub fn on_pointer_up(&mut self) {
        self.drag.release();
    }

    // --- Frame ---

    /// Advance auto-rotation by one frame.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::NoMesh`] if nothing is attached.
    pub fn tick(&mut self) -> Result<Rotation, SceneError> {
        let speed = self.rotation_speed;
        let mesh = self.graph.mesh_mut().ok_or(SceneError::NoMesh)?;
        mesh.rotation.pitch += speed;
        mesh.rotation.yaw += speed;
        Ok(mesh.rotation)
    }

    // --- Viewport ---

    /// Record the new surface size and refit the camera aspect.
    pub fn resize(&mut self, width: f64, height: f64) -> Action {
        self.viewport = Viewport::new(width, height);
        self.camera.fit_viewport(self.viewport);
        Action::ViewportResized { viewport: self.viewport, aspect: self.camera.aspect }
    }

    // --- Queries ---

    #[must_use]
    pub fn mesh(&self) -> Option<&Mesh> {
        self.graph.mesh()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let mesh = self.graph.mesh();
        Snapshot {
            shape: mesh.map(|m| m.shape),
            mesh_id: mesh.map(|m| m.id),
            rotation: mesh.map(|m| m.rotation),
            color: self.color,
            rotation_speed: self.rotation_speed,
            camera_distance: self.camera.distance,
            aspect: self.camera.aspect,
            viewport: self.viewport,
            dragging: self.drag.is_dragging(),
        }
    }
}

/// The browser-facing engine. Wraps `EngineCore` and owns the three.js view.
///
/// The host page constructs one, forwards DOM events to it, and calls
/// [`Engine::frame`] from `requestAnimationFrame`.
#[wasm_bindgen]
pub struct Engine {
    core: EngineCore,
    view: ThreeView,
}

#[wasm_bindgen]
impl Engine {
    /// Build the scene, attach the renderer canvas to `container`, and show
    /// the initial cube.
    ///
    /// # Errors
    ///
    /// Fails if the WebGL renderer cannot be created or attached.
    #[wasm_bindgen(constructor)]
    pub fn new(container: &HtmlElement, width: f64, height: f64) -> Result<Engine, SceneError> {
        let mut core = EngineCore::new();
        let mut view = ThreeView::mount(container, &core)?;
        for action in core.bootstrap(Viewport::new(width, height)) {
            view.apply(&action);
        }
        log::info!("scene ready at {width}x{height}");
        Ok(Self { core, view })
    }

    /// Forward a control's `change`/`input` event.
    ///
    /// # Errors
    ///
    /// See [`EngineCore::on_control`].
    pub fn on_control(&mut self, dom_id: &str, value: &str) -> Result<(), SceneError> {
        let action = self.core.on_control(dom_id, value)?;
        self.view.apply(&action);
        Ok(())
    }

    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        self.core.on_pointer_down(Point::new(x, y));
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.core.on_pointer_move(Point::new(x, y));
    }

    pub fn on_pointer_up(&mut self) {
        self.core.on_pointer_up();
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        let action = self.core.resize(width, height);
        self.view.apply(&action);
    }

    /// Advance one frame and draw.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::NoMesh`] if nothing is attached.
    pub fn frame(&mut self) -> Result<(), SceneError> {
        self.core.tick()?;
        self.view.draw(&self.core);
        Ok(())
    }

    /// The current view state as JSON.
    ///
    /// # Errors
    ///
    /// Fails only if serialization fails.
    pub fn snapshot(&self) -> Result<String, SceneError> {
        serde_json::to_string(&self.core.snapshot()).map_err(|e| SceneError::Snapshot(e.to_string()))
    }
}
