//! Control dispatch table: UI control identifiers and their typed events.
//!
//! Each widget on the page is named by a [`ControlId`]. The host forwards the
//! widget's id and raw string value; [`ControlEvent::parse`] turns that into a
//! typed event and the engine applies it in one exhaustive `match`. The page
//! markup is generated from the same table, so the DOM ids, event names and
//! slider bounds cannot drift from what the engine accepts.

#[cfg(test)]
#[path = "controls_test.rs"]
mod controls_test;

use crate::color::Color;
use crate::consts::{
    DEFAULT_CAMERA_DISTANCE, DEFAULT_ROTATION_SPEED, MAX_CAMERA_DISTANCE, MAX_ROTATION_SPEED, MIN_CAMERA_DISTANCE,
    MIN_ROTATION_SPEED, ROTATION_SPEED_STEP,
};
use crate::error::SceneError;
use crate::shape::ShapeKind;

/// A UI control bound to exactly one engine mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    ShapeSelector,
    ColorPicker,
    ZoomSlider,
    SpeedSlider,
}

impl ControlId {
    /// All controls in panel order.
    pub const ALL: [Self; 4] = [Self::ShapeSelector, Self::ColorPicker, Self::ZoomSlider, Self::SpeedSlider];

    /// Element id in the page.
    #[must_use]
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::ShapeSelector => "shapeSelector",
            Self::ColorPicker => "colorPicker",
            Self::ZoomSlider => "zoomSlider",
            Self::SpeedSlider => "speedSlider",
        }
    }

    /// DOM event the host listens for on this control.
    #[must_use]
    pub fn dom_event(self) -> &'static str {
        match self {
            Self::ShapeSelector => "change",
            Self::ColorPicker | Self::ZoomSlider | Self::SpeedSlider => "input",
        }
    }

    /// Panel label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ShapeSelector => "Shape",
            Self::ColorPicker => "Color",
            Self::ZoomSlider => "Zoom",
            Self::SpeedSlider => "Rotation Speed",
        }
    }

    /// Bounds for slider controls; `None` for the others.
    #[must_use]
    pub fn slider(self) -> Option<SliderRange> {
        match self {
            Self::ZoomSlider => Some(ZOOM_RANGE),
            Self::SpeedSlider => Some(SPEED_RANGE),
            Self::ShapeSelector | Self::ColorPicker => None,
        }
    }

    /// Look up a control by element id.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownControl`] for ids not in the table.
    pub fn from_dom_id(id: &str) -> Result<Self, SceneError> {
        Self::ALL
            .into_iter()
            .find(|c| c.dom_id() == id)
            .ok_or_else(|| SceneError::UnknownControl(id.to_owned()))
    }
}

/// Bounds and initial value of a range input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    /// `None` means the browser default step of 1.
    pub step: Option<f64>,
    pub initial: f64,
}

impl SliderRange {
    /// Pin `value` into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

pub const ZOOM_RANGE: SliderRange = SliderRange {
    min: MIN_CAMERA_DISTANCE,
    max: MAX_CAMERA_DISTANCE,
    step: None,
    initial: DEFAULT_CAMERA_DISTANCE,
};

pub const SPEED_RANGE: SliderRange = SliderRange {
    min: MIN_ROTATION_SPEED,
    max: MAX_ROTATION_SPEED,
    step: Some(ROTATION_SPEED_STEP),
    initial: DEFAULT_ROTATION_SPEED,
};

/// A parsed control change, ready to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    Shape(ShapeKind),
    Color(Color),
    /// Camera distance, already clamped to [`ZOOM_RANGE`].
    Zoom(f64),
    /// Rotation increment per frame, already clamped to [`SPEED_RANGE`].
    Speed(f64),
}

impl ControlEvent {
    /// Parse the raw widget value for `control`.
    ///
    /// # Errors
    ///
    /// - [`SceneError::UnknownShape`] for a selector value outside the catalogue.
    /// - [`SceneError::InvalidColor`] for a color that is not `#rgb`/`#rrggbb`.
    /// - [`SceneError::InvalidNumber`] for a slider value that is not a finite number.
    pub fn parse(control: ControlId, raw: &str) -> Result<Self, SceneError> {
        match control {
            ControlId::ShapeSelector => raw.parse().map(Self::Shape),
            ControlId::ColorPicker => raw.parse().map(Self::Color),
            ControlId::ZoomSlider => parse_slider(control, raw, ZOOM_RANGE).map(Self::Zoom),
            ControlId::SpeedSlider => parse_slider(control, raw, SPEED_RANGE).map(Self::Speed),
        }
    }
}

fn parse_slider(control: ControlId, raw: &str, range: SliderRange) -> Result<f64, SceneError> {
    let invalid = || SceneError::InvalidNumber { control: control.dom_id(), value: raw.to_owned() };
    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(range.clamp(value))
}
