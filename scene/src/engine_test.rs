#![allow(clippy::float_cmp)]

use super::*;
use crate::graph::Material;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================
// Helpers
// =============================================================

fn booted() -> EngineCore {
    let mut core = EngineCore::new();
    core.bootstrap(Viewport::new(1280.0, 720.0));
    core
}

fn mesh_id(core: &EngineCore) -> MeshId {
    core.mesh().unwrap().id
}

fn rotation(core: &EngineCore) -> Rotation {
    core.mesh().unwrap().rotation
}

// =============================================================
// Bootstrap
// =============================================================

#[test]
fn new_core_has_defaults_and_no_mesh() {
    let core = EngineCore::new();
    assert!(core.mesh().is_none());
    assert_eq!(core.rotation_speed, 0.01);
    assert_eq!(core.camera.distance, 28.0);
    assert_eq!(core.color.hex(), 0xff6600);
    assert_eq!(core.drag, DragState::Idle);
}

#[test]
fn bootstrap_attaches_cube_and_sizes_camera() {
    let mut core = EngineCore::new();
    let actions = core.bootstrap(Viewport::new(1000.0, 500.0));

    assert_eq!(core.graph.mesh_count(), 1);
    assert_eq!(core.mesh().unwrap().shape, ShapeKind::Cube);
    assert!(approx_eq(core.camera.aspect, 2.0));
    assert_eq!(core.viewport, Viewport::new(1000.0, 500.0));

    assert_eq!(actions.len(), 3);
    assert!(matches!(actions[0], Action::ViewportResized { .. }));
    assert_eq!(actions[1], Action::CameraMoved { distance: 28.0 });
    assert!(matches!(&actions[2], Action::MeshReplaced { detached: None, mesh } if mesh.shape == ShapeKind::Cube));
}

#[test]
fn initial_mesh_uses_default_color() {
    let core = booted();
    assert_eq!(core.mesh().unwrap().material, Material { color: Color::from_hex(0xff6600) });
}

// =============================================================
// Shape factory
// =============================================================

#[test]
fn every_shape_leaves_exactly_one_mesh_and_detaches_previous() {
    let mut core = booted();
    for shape in ShapeKind::ALL {
        let before = mesh_id(&core);
        let action = core.select_shape(shape);

        assert_eq!(core.graph.mesh_count(), 1, "{shape}");
        assert!(!core.graph.contains(before), "{shape} left the old mesh attached");
        let after = core.mesh().unwrap();
        assert_eq!(after.shape, shape);
        assert_eq!(after.geometry, shape.geometry());
        assert_ne!(after.id, before);
        assert_eq!(action, Action::MeshReplaced { detached: Some(before), mesh: after.clone() });
    }
}

#[test]
fn reselecting_same_shape_still_builds_fresh_mesh() {
    let mut core = booted();
    let before = mesh_id(&core);
    core.select_shape(ShapeKind::Cube);
    assert_ne!(mesh_id(&core), before);
    assert_eq!(core.graph.mesh_count(), 1);
}

#[test]
fn select_shape_on_empty_scene_detaches_nothing() {
    let mut core = EngineCore::new();
    let action = core.select_shape(ShapeKind::Torus);
    assert!(matches!(action, Action::MeshReplaced { detached: None, .. }));
    assert_eq!(core.graph.mesh_count(), 1);
}

#[test]
fn new_mesh_starts_unrotated() {
    let mut core = booted();
    core.tick().unwrap();
    core.select_shape(ShapeKind::Sphere);
    assert_eq!(rotation(&core), Rotation::default());
}

#[test]
fn new_mesh_uses_current_color() {
    let mut core = booted();
    core.set_color(Color::from_hex(0x00ff00));
    core.select_shape(ShapeKind::Octahedron);
    assert_eq!(core.mesh().unwrap().material.color.hex(), 0x00ff00);
}

#[test]
fn unknown_shape_is_rejected_and_mesh_kept() {
    let mut core = booted();
    let before = core.mesh().unwrap().clone();

    let result = core.on_control("shapeSelector", "dodecahedron");

    assert_eq!(result, Err(SceneError::UnknownShape("dodecahedron".into())));
    assert_eq!(core.graph.mesh_count(), 1);
    assert_eq!(core.mesh(), Some(&before));
}

// =============================================================
// Color
// =============================================================

#[test]
fn color_changes_only_material_color() {
    let mut core = booted();
    core.tick().unwrap();
    let before = core.mesh().unwrap().clone();

    let action = core.on_control("colorPicker", "#3366cc").unwrap();

    let after = core.mesh().unwrap();
    assert_eq!(after.material.color.hex(), 0x3366cc);
    assert_eq!(after.id, before.id);
    assert_eq!(after.shape, before.shape);
    assert_eq!(after.geometry, before.geometry);
    assert_eq!(after.rotation, before.rotation);
    assert_eq!(action, Action::MeshRecolored { id: before.id, color: Color::from_hex(0x3366cc) });
}

#[test]
fn color_without_mesh_is_remembered() {
    let mut core = EngineCore::new();
    assert_eq!(core.set_color(Color::from_hex(0x112233)), Action::None);
    assert_eq!(core.color.hex(), 0x112233);
    assert!(core.mesh().is_none());
}

#[test]
fn invalid_color_leaves_state_untouched() {
    let mut core = booted();
    assert!(core.on_control("colorPicker", "red").is_err());
    assert_eq!(core.color.hex(), 0xff6600);
    assert_eq!(core.mesh().unwrap().material.color.hex(), 0xff6600);
}

// =============================================================
// Zoom / speed
// =============================================================

#[test]
fn zoom_sets_distance_exactly_within_range() {
    let mut core = booted();
    for v in [10.0, 11.0, 28.0, 37.0, 59.0, 60.0] {
        let action = core.on_control("zoomSlider", &v.to_string()).unwrap();
        assert_eq!(core.camera.distance, v);
        assert_eq!(action, Action::CameraMoved { distance: v });
    }
}

#[test]
fn zoom_outside_range_clamps() {
    let mut core = booted();
    core.set_zoom(0.0);
    assert_eq!(core.camera.distance, 10.0);
    core.set_zoom(1e6);
    assert_eq!(core.camera.distance, 60.0);
}

#[test]
fn speed_sets_increment_exactly_within_range() {
    let mut core = booted();
    for raw in ["0", "0.001", "0.01", "0.055", "0.1"] {
        core.on_control("speedSlider", raw).unwrap();
        assert_eq!(core.rotation_speed, raw.parse::<f64>().unwrap());
    }
}

#[test]
fn speed_change_takes_effect_on_next_tick() {
    let mut core = booted();
    core.on_control("speedSlider", "0.05").unwrap();
    let r = core.tick().unwrap();
    assert!(approx_eq(r.pitch, 0.05));
    assert!(approx_eq(r.yaw, 0.05));
}

#[test]
fn zero_speed_freezes_auto_rotation() {
    let mut core = booted();
    core.set_speed(0.0);
    for _ in 0..10 {
        core.tick().unwrap();
    }
    assert_eq!(rotation(&core), Rotation::default());
}

#[test]
fn non_numeric_slider_value_is_rejected() {
    let mut core = booted();
    let result = core.on_control("zoomSlider", "closer");
    assert_eq!(result, Err(SceneError::InvalidNumber { control: "zoomSlider", value: "closer".into() }));
    assert_eq!(core.camera.distance, 28.0);
}

#[test]
fn unknown_control_is_rejected() {
    let mut core = booted();
    assert_eq!(core.on_control("brightness", "5"), Err(SceneError::UnknownControl("brightness".into())));
}

#[test]
fn dispatch_routes_each_event() {
    let mut core = booted();
    assert!(matches!(core.dispatch(ControlEvent::Shape(ShapeKind::Cone)), Action::MeshReplaced { .. }));
    assert!(matches!(core.dispatch(ControlEvent::Color(Color::from_hex(1))), Action::MeshRecolored { .. }));
    assert_eq!(core.dispatch(ControlEvent::Zoom(44.0)), Action::CameraMoved { distance: 44.0 });
    assert_eq!(core.dispatch(ControlEvent::Speed(0.07)), Action::None);
    assert_eq!(core.rotation_speed, 0.07);
}

// =============================================================
// Drag rotation
// =============================================================

#[test]
fn move_without_press_does_nothing() {
    let mut core = booted();
    assert_eq!(core.on_pointer_move(Point::new(100.0, 100.0)), None);
    assert_eq!(rotation(&core), Rotation::default());
}

#[test]
fn drag_applies_scaled_delta() {
    let mut core = booted();
    core.on_pointer_down(Point::new(100.0, 100.0));
    let r = core.on_pointer_move(Point::new(130.0, 80.0)).unwrap();
    assert!(approx_eq(r.yaw, 0.30));
    assert!(approx_eq(r.pitch, -0.20));
}

#[test]
fn drag_accumulates_independent_of_batching() {
    let path = [(105.0, 102.0), (117.0, 90.0), (140.0, 95.0), (133.0, 131.0), (160.0, 150.0)];

    let mut fine = booted();
    fine.on_pointer_down(Point::new(100.0, 100.0));
    for (x, y) in path {
        fine.on_pointer_move(Point::new(x, y));
    }

    let mut coarse = booted();
    coarse.on_pointer_down(Point::new(100.0, 100.0));
    coarse.on_pointer_move(Point::new(160.0, 150.0));

    let (a, b) = (rotation(&fine), rotation(&coarse));
    assert!(approx_eq(a.yaw, 0.01 * 60.0));
    assert!(approx_eq(a.pitch, 0.01 * 50.0));
    assert!(approx_eq(a.yaw, b.yaw));
    assert!(approx_eq(a.pitch, b.pitch));
}

#[test]
fn release_stops_rotation() {
    let mut core = booted();
    core.on_pointer_down(Point::new(0.0, 0.0));
    core.on_pointer_move(Point::new(10.0, 0.0));
    core.on_pointer_up();
    assert_eq!(core.on_pointer_move(Point::new(500.0, 500.0)), None);
    assert!(approx_eq(rotation(&core).yaw, 0.1));
}

#[test]
fn drag_rotation_is_unbounded() {
    let mut core = booted();
    core.on_pointer_down(Point::new(0.0, 0.0));
    core.on_pointer_move(Point::new(10_000.0, 0.0));
    assert!(approx_eq(rotation(&core).yaw, 100.0));
}

#[test]
fn drag_survives_shape_swap() {
    let mut core = booted();
    core.on_pointer_down(Point::new(0.0, 0.0));
    core.select_shape(ShapeKind::Torus);
    core.on_pointer_move(Point::new(0.0, 20.0));
    assert!(approx_eq(rotation(&core).pitch, 0.2));
}

#[test]
fn drag_without_mesh_tracks_position_only() {
    let mut core = EngineCore::new();
    core.on_pointer_down(Point::new(0.0, 0.0));
    assert_eq!(core.on_pointer_move(Point::new(5.0, 5.0)), None);
    assert_eq!(core.drag, DragState::Dragging { last: Point::new(5.0, 5.0) });
}

// =============================================================
// Render tick
// =============================================================

#[test]
fn tick_adds_speed_to_pitch_and_yaw() {
    let mut core = booted();
    for n in 1..=5 {
        let r = core.tick().unwrap();
        assert!(approx_eq(r.pitch, 0.01 * f64::from(n)));
        assert!(approx_eq(r.yaw, 0.01 * f64::from(n)));
    }
}

#[test]
fn tick_without_mesh_errors() {
    let mut core = EngineCore::new();
    assert_eq!(core.tick(), Err(SceneError::NoMesh));
}

#[test]
fn tick_and_drag_compose() {
    let mut core = booted();
    core.on_pointer_down(Point::new(0.0, 0.0));
    core.on_pointer_move(Point::new(10.0, 10.0));
    let r = core.tick().unwrap();
    assert!(approx_eq(r.yaw, 0.11));
    assert!(approx_eq(r.pitch, 0.11));
}

// =============================================================
// Resize
// =============================================================

#[test]
fn resize_updates_aspect_and_surface_only() {
    let mut core = booted();
    core.set_zoom(40.0);
    core.on_pointer_down(Point::new(0.0, 0.0));
    core.on_pointer_move(Point::new(30.0, 12.0));
    let rot_before = rotation(&core);

    let action = core.resize(800.0, 600.0);

    assert!(approx_eq(core.camera.aspect, 800.0 / 600.0));
    assert_eq!(core.viewport, Viewport::new(800.0, 600.0));
    assert_eq!(rotation(&core), rot_before);
    assert_eq!(core.camera.distance, 40.0);
    assert_eq!(
        action,
        Action::ViewportResized { viewport: Viewport::new(800.0, 600.0), aspect: core.camera.aspect }
    );
}

#[test]
fn resize_is_idempotent() {
    let mut core = booted();
    let first = core.resize(1024.0, 768.0);
    let second = core.resize(1024.0, 768.0);
    assert_eq!(first, second);
}

#[test]
fn resize_to_zero_height_keeps_aspect() {
    let mut core = booted();
    let aspect = core.camera.aspect;
    core.resize(640.0, 0.0);
    assert_eq!(core.camera.aspect, aspect);
    assert_eq!(core.viewport, Viewport::new(640.0, 0.0));
}

// =============================================================
// Snapshot
// =============================================================

#[test]
fn snapshot_reflects_state() {
    let mut core = booted();
    core.select_shape(ShapeKind::Pyramid);
    core.set_speed(0.02);
    core.on_pointer_down(Point::new(1.0, 1.0));

    let snap = core.snapshot();
    assert_eq!(snap.shape, Some(ShapeKind::Pyramid));
    assert_eq!(snap.mesh_id, Some(mesh_id(&core)));
    assert_eq!(snap.rotation_speed, 0.02);
    assert_eq!(snap.camera_distance, 28.0);
    assert!(snap.dragging);
}

#[test]
fn snapshot_serializes_to_json() {
    let core = booted();
    let json = serde_json::to_value(core.snapshot()).unwrap();
    assert_eq!(json["shape"], "cube");
    assert_eq!(json["color"], "#ff6600");
    assert_eq!(json["camera_distance"], 28.0);
    assert_eq!(json["dragging"], false);
}

#[test]
fn snapshot_of_empty_scene() {
    let snap = EngineCore::new().snapshot();
    assert!(snap.shape.is_none());
    assert!(snap.mesh_id.is_none());
    assert!(snap.rotation.is_none());
}
