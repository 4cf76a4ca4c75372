//! Rendering: mirrors the engine's scene model into three.js and draws it.
//!
//! This module is the only place that touches three.js. It reads engine state
//! and applies [`Action`]s; it never mutates the engine. three.js r128 is
//! loaded by the page as a classic script, so the bindings resolve against
//! the global `THREE` namespace.

use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use crate::consts::BACKGROUND_COLOR;
use crate::engine::{Action, EngineCore};
use crate::error::SceneError;
use crate::graph::Mesh;
use crate::shape::Geometry;

/// Hand-written bindings for the subset of three.js the viewer uses.
pub mod three {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        // ── Core ────────────────────────────────────────────────

        #[wasm_bindgen(js_namespace = THREE)]
        pub type Object3D;
        #[wasm_bindgen(method, getter)]
        pub fn position(this: &Object3D) -> Vector3;
        #[wasm_bindgen(method, getter)]
        pub fn rotation(this: &Object3D) -> Euler;

        #[wasm_bindgen(js_namespace = THREE)]
        pub type Vector3;
        #[wasm_bindgen(method)]
        pub fn set(this: &Vector3, x: f64, y: f64, z: f64);
        #[wasm_bindgen(method, setter)]
        pub fn set_z(this: &Vector3, z: f64);

        #[wasm_bindgen(js_namespace = THREE)]
        pub type Euler;
        #[wasm_bindgen(method, setter)]
        pub fn set_x(this: &Euler, x: f64);
        #[wasm_bindgen(method, setter)]
        pub fn set_y(this: &Euler, y: f64);

        #[wasm_bindgen(js_namespace = THREE)]
        pub type Color;
        #[wasm_bindgen(constructor, js_namespace = THREE)]
        pub fn new(hex: u32) -> Color;
        #[wasm_bindgen(method, js_name = setHex)]
        pub fn set_hex(this: &Color, hex: u32);

        #[wasm_bindgen(js_namespace = THREE, extends = Object3D)]
        pub type Scene;
        #[wasm_bindgen(constructor, js_namespace = THREE)]
        pub fn new() -> Scene;
        #[wasm_bindgen(method, setter)]
        pub fn set_background(this: &Scene, color: &Color);
        #[wasm_bindgen(method)]
        pub fn add(this: &Scene, object: &Object3D);
        #[wasm_bindgen(method)]
        pub fn remove(this: &Scene, object: &Object3D);

        // ── Camera / light / renderer ───────────────────────────

        #[wasm_bindgen(js_namespace = THREE, extends = Object3D)]
        pub type PerspectiveCamera;
        #[wasm_bindgen(constructor, js_namespace = THREE)]
        pub fn new(fov: f64, aspect: f64, near: f64, far: f64) -> PerspectiveCamera;
        #[wasm_bindgen(method, setter)]
        pub fn set_aspect(this: &PerspectiveCamera, aspect: f64);
        #[wasm_bindgen(method, js_name = updateProjectionMatrix)]
        pub fn update_projection_matrix(this: &PerspectiveCamera);

        #[wasm_bindgen(js_namespace = THREE, extends = Object3D)]
        pub type PointLight;
        #[wasm_bindgen(constructor, js_namespace = THREE)]
        pub fn new(color: u32, intensity: f64) -> PointLight;

        #[wasm_bindgen(js_namespace = THREE)]
        pub type WebGLRenderer;
        #[wasm_bindgen(constructor, js_namespace = THREE, catch)]
        pub fn new(parameters: &js_sys::Object) -> Result<WebGLRenderer, JsValue>;
        #[wasm_bindgen(method, js_name = setSize)]
        pub fn set_size(this: &WebGLRenderer, width: f64, height: f64);
        #[wasm_bindgen(method)]
        pub fn render(this: &WebGLRenderer, scene: &Scene, camera: &PerspectiveCamera);
        #[wasm_bindgen(method, getter = domElement)]
        pub fn dom_element(this: &WebGLRenderer) -> web_sys::HtmlCanvasElement;

        // ── Mesh ────────────────────────────────────────────────

        #[wasm_bindgen(js_namespace = THREE)]
        pub type BufferGeometry;
        #[wasm_bindgen(method)]
        pub fn dispose(this: &BufferGeometry);

        #[wasm_bindgen(js_namespace = THREE, extends = BufferGeometry)]
        pub type BoxGeometry;
        #[wasm_bindgen(constructor, js_namespace = THREE)]
        pub fn new(width: f64, height: f64, depth: f64) -> BoxGeometry;

        #[wasm_bindgen(js_namespace = THREE, extends = BufferGeometry)]
        pub type SphereGeometry;
        #[wasm_bindgen(constructor, js_namespace = THREE)]
        pub fn new(radius: f64, width_segments: u32, height_segments: u32) -> SphereGeometry;

        #[wasm_bindgen(js_namespace = THREE, extends = BufferGeometry)]
        pub type ConeGeometry;
        #[wasm_bindgen(constructor, js_namespace = THREE)]
        pub fn new(radius: f64, height: f64, radial_segments: u32) -> ConeGeometry;

        #[wasm_bindgen(js_namespace = THREE, extends = BufferGeometry)]
        pub type CylinderGeometry;
        #[wasm_bindgen(constructor, js_namespace = THREE)]
        pub fn new(radius_top: f64, radius_bottom: f64, height: f64, radial_segments: u32) -> CylinderGeometry;

        #[wasm_bindgen(js_namespace = THREE, extends = BufferGeometry)]
        pub type TorusGeometry;
        #[wasm_bindgen(constructor, js_namespace = THREE)]
        pub fn new(radius: f64, tube: f64, radial_segments: u32, tubular_segments: u32) -> TorusGeometry;

        #[wasm_bindgen(js_namespace = THREE, extends = BufferGeometry)]
        pub type TetrahedronGeometry;
        #[wasm_bindgen(constructor, js_namespace = THREE)]
        pub fn new(radius: f64) -> TetrahedronGeometry;

        #[wasm_bindgen(js_namespace = THREE, extends = BufferGeometry)]
        pub type OctahedronGeometry;
        #[wasm_bindgen(constructor, js_namespace = THREE)]
        pub fn new(radius: f64) -> OctahedronGeometry;

        #[wasm_bindgen(js_namespace = THREE)]
        pub type MeshStandardMaterial;
        #[wasm_bindgen(constructor, js_namespace = THREE)]
        pub fn new() -> MeshStandardMaterial;
        #[wasm_bindgen(method, getter)]
        pub fn color(this: &MeshStandardMaterial) -> Color;
        #[wasm_bindgen(method)]
        pub fn dispose(this: &MeshStandardMaterial);

        #[wasm_bindgen(js_namespace = THREE, js_name = Mesh, extends = Object3D)]
        pub type ThreeMesh;
        #[wasm_bindgen(constructor, js_namespace = THREE, js_class = "Mesh")]
        pub fn new(geometry: &BufferGeometry, material: &MeshStandardMaterial) -> ThreeMesh;
        #[wasm_bindgen(method, getter)]
        pub fn geometry(this: &ThreeMesh) -> BufferGeometry;
        #[wasm_bindgen(method, getter)]
        pub fn material(this: &ThreeMesh) -> MeshStandardMaterial;
    }
}

/// The three.js side of the scene: scene, camera, renderer, and the live mesh.
pub struct ThreeView {
    scene: three::Scene,
    camera: three::PerspectiveCamera,
    renderer: three::WebGLRenderer,
    mesh: Option<three::ThreeMesh>,
}

impl ThreeView {
    /// Create the scene, light, camera and renderer, and append the
    /// renderer's canvas to `container`. No mesh is shown until the first
    /// [`Action::MeshReplaced`] is applied.
    ///
    /// # Errors
    ///
    /// Fails if WebGL is unavailable or the canvas cannot be attached.
    pub fn mount(container: &HtmlElement, core: &EngineCore) -> Result<Self, SceneError> {
        let scene = three::Scene::new();
        scene.set_background(&three::Color::new(BACKGROUND_COLOR));

        let cam = core.camera;
        let camera = three::PerspectiveCamera::new(cam.fov_deg, cam.aspect, cam.near, cam.far);
        camera.position().set_z(cam.distance);

        let params = Object::new();
        Reflect::set(&params, &JsValue::from_str("antialias"), &JsValue::TRUE).map_err(|e| SceneError::from_js(&e))?;
        let renderer = three::WebGLRenderer::new(&params).map_err(|e| SceneError::from_js(&e))?;
        container
            .append_child(&renderer.dom_element())
            .map_err(|e| SceneError::from_js(&e))?;

        let light = core.graph.light();
        let point = three::PointLight::new(light.color.hex(), light.intensity);
        let [x, y, z] = light.position;
        point.position().set(x, y, z);
        scene.add(&point);

        Ok(Self { scene, camera, renderer, mesh: None })
    }

    /// Mirror one engine action into three.js.
    pub fn apply(&mut self, action: &Action) {
        match action {
            Action::None => {}
            Action::MeshReplaced { mesh, .. } => self.replace_mesh(mesh),
            Action::MeshRecolored { color, .. } => {
                if let Some(mesh) = &self.mesh {
                    mesh.material().color().set_hex(color.hex());
                }
            }
            Action::CameraMoved { distance } => self.camera.position().set_z(*distance),
            Action::ViewportResized { viewport, aspect } => {
                self.camera.set_aspect(*aspect);
                self.camera.update_projection_matrix();
                self.renderer.set_size(viewport.width, viewport.height);
            }
        }
    }

    /// Copy per-frame state (rotation, camera distance) and draw.
    pub fn draw(&self, core: &EngineCore) {
        if let (Some(three_mesh), Some(mesh)) = (&self.mesh, core.mesh()) {
            let rotation = three_mesh.rotation();
            rotation.set_x(mesh.rotation.pitch);
            rotation.set_y(mesh.rotation.yaw);
        }
        self.camera.position().set_z(core.camera.distance);
        self.renderer.render(&self.scene, &self.camera);
    }

    fn replace_mesh(&mut self, mesh: &Mesh) {
        if let Some(old) = self.mesh.take() {
            self.scene.remove(&old);
            old.geometry().dispose();
            old.material().dispose();
        }

        let material = three::MeshStandardMaterial::new();
        material.color().set_hex(mesh.material.color.hex());
        let three_mesh = three::ThreeMesh::new(&build_geometry(&mesh.geometry), &material);
        self.scene.add(&three_mesh);
        self.mesh = Some(three_mesh);
    }
}

fn build_geometry(geometry: &Geometry) -> three::BufferGeometry {
    match *geometry {
        Geometry::Box { width, height, depth } => three::BoxGeometry::new(width, height, depth).into(),
        Geometry::Sphere { radius, width_segments, height_segments } => {
            three::SphereGeometry::new(radius, width_segments, height_segments).into()
        }
        Geometry::Cone { radius, height, radial_segments } => {
            three::ConeGeometry::new(radius, height, radial_segments).into()
        }
        Geometry::Cylinder { radius_top, radius_bottom, height, radial_segments } => {
            three::CylinderGeometry::new(radius_top, radius_bottom, height, radial_segments).into()
        }
        Geometry::Torus { radius, tube, radial_segments, tubular_segments } => {
            three::TorusGeometry::new(radius, tube, radial_segments, tubular_segments).into()
        }
        Geometry::Tetrahedron { radius } => three::TetrahedronGeometry::new(radius).into(),
        Geometry::Octahedron { radius } => three::OctahedronGeometry::new(radius).into(),
    }
}
