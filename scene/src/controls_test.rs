#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// ControlId
// =============================================================

#[test]
fn dom_ids_round_trip() {
    for control in ControlId::ALL {
        assert_eq!(ControlId::from_dom_id(control.dom_id()), Ok(control));
    }
}

#[test]
fn unknown_dom_id_is_rejected() {
    assert_eq!(ControlId::from_dom_id("volumeKnob"), Err(SceneError::UnknownControl("volumeKnob".into())));
}

#[test]
fn selector_listens_for_change_others_for_input() {
    assert_eq!(ControlId::ShapeSelector.dom_event(), "change");
    assert_eq!(ControlId::ColorPicker.dom_event(), "input");
    assert_eq!(ControlId::ZoomSlider.dom_event(), "input");
    assert_eq!(ControlId::SpeedSlider.dom_event(), "input");
}

#[test]
fn only_sliders_have_ranges() {
    assert_eq!(ControlId::ZoomSlider.slider(), Some(ZOOM_RANGE));
    assert_eq!(ControlId::SpeedSlider.slider(), Some(SPEED_RANGE));
    assert!(ControlId::ShapeSelector.slider().is_none());
    assert!(ControlId::ColorPicker.slider().is_none());
}

#[test]
fn slider_ranges_match_widgets() {
    assert_eq!((ZOOM_RANGE.min, ZOOM_RANGE.max, ZOOM_RANGE.initial), (10.0, 60.0, 28.0));
    assert_eq!(ZOOM_RANGE.step, None);
    assert_eq!((SPEED_RANGE.min, SPEED_RANGE.max, SPEED_RANGE.initial), (0.0, 0.1, 0.01));
    assert_eq!(SPEED_RANGE.step, Some(0.001));
}

// =============================================================
// ControlEvent::parse
// =============================================================

#[test]
fn parse_shape() {
    assert_eq!(
        ControlEvent::parse(ControlId::ShapeSelector, "torus"),
        Ok(ControlEvent::Shape(ShapeKind::Torus))
    );
}

#[test]
fn parse_unknown_shape() {
    assert_eq!(
        ControlEvent::parse(ControlId::ShapeSelector, "icosahedron"),
        Err(SceneError::UnknownShape("icosahedron".into()))
    );
}

#[test]
fn parse_color() {
    assert_eq!(
        ControlEvent::parse(ControlId::ColorPicker, "#00ff88"),
        Ok(ControlEvent::Color(Color::from_hex(0x00ff88)))
    );
}

#[test]
fn parse_bad_color() {
    assert_eq!(
        ControlEvent::parse(ControlId::ColorPicker, "orange"),
        Err(SceneError::InvalidColor("orange".into()))
    );
}

#[test]
fn parse_zoom_in_range_is_exact() {
    for raw in ["10", "28", "33.5", "60"] {
        let expected: f64 = raw.parse().unwrap();
        assert_eq!(ControlEvent::parse(ControlId::ZoomSlider, raw), Ok(ControlEvent::Zoom(expected)));
    }
}

#[test]
fn parse_zoom_out_of_range_clamps() {
    assert_eq!(ControlEvent::parse(ControlId::ZoomSlider, "5"), Ok(ControlEvent::Zoom(10.0)));
    assert_eq!(ControlEvent::parse(ControlId::ZoomSlider, "99"), Ok(ControlEvent::Zoom(60.0)));
}

#[test]
fn parse_speed_in_range_is_exact() {
    for raw in ["0", "0.001", "0.05", "0.1"] {
        let expected: f64 = raw.parse().unwrap();
        assert_eq!(ControlEvent::parse(ControlId::SpeedSlider, raw), Ok(ControlEvent::Speed(expected)));
    }
}

#[test]
fn parse_speed_out_of_range_clamps() {
    assert_eq!(ControlEvent::parse(ControlId::SpeedSlider, "-1"), Ok(ControlEvent::Speed(0.0)));
    assert_eq!(ControlEvent::parse(ControlId::SpeedSlider, "0.5"), Ok(ControlEvent::Speed(0.1)));
}

#[test]
fn parse_slider_trims_whitespace() {
    assert_eq!(ControlEvent::parse(ControlId::ZoomSlider, " 40 "), Ok(ControlEvent::Zoom(40.0)));
}

#[test]
fn parse_slider_rejects_non_numbers() {
    for raw in ["", "fast", "NaN", "inf"] {
        assert_eq!(
            ControlEvent::parse(ControlId::SpeedSlider, raw),
            Err(SceneError::InvalidNumber { control: "speedSlider", value: raw.into() }),
            "{raw:?} should be rejected"
        );
    }
}
