// slider/mod.rs
//
// Draggable slider control: a normalized scalar in [0, 1] mapped onto a line
// segment, kept in sync with a host scene object's position.
//
// Usage:
//   let config = SliderConfig::from_json(r#"{ "endPoints": [0, 100, 200, 100] }"#)?;
//   let mut slider = Slider::new(knob_id, &config, &mut host)?;
//   // host input dispatch, each frame:
//   slider.on_drag(drag_pos, &mut host);

pub mod config;
pub mod endpoints;

use glam::Vec2;

use crate::ease::{lerp, unlerp};
use crate::host::{ObjectId, SliderHost};
use config::{ConfigError, EndPointsSpec, SliderConfig};
use endpoints::{Axis, EndPoints};

/// What a drag event did to the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Value and object position were updated.
    Moved,
    /// Dragging is disabled or the slider has been shut down.
    Ignored,
    /// The endpoint pair is diagonal; dragging such a segment is unsupported.
    UnsupportedAxis,
}

/// A slider bound to one host scene object.
///
/// The slider holds only the host's id for the object; the object itself stays
/// host-owned. `shutdown` (or the host's destroy notification) releases the
/// binding, after which host-touching calls degrade to no-ops.
#[derive(Debug)]
pub struct Slider {
    object: Option<ObjectId>,
    value: f32,
    end_points: EndPoints,
    drag_enabled: bool,
    interactive_registered: bool,
}

impl Slider {
    /// Bind a slider to a host object and apply its configuration.
    pub fn new<H: SliderHost>(
        object: ObjectId,
        config: &SliderConfig,
        host: &mut H,
    ) -> Result<Self, ConfigError> {
        let mut slider = Self {
            object: Some(object),
            value: 0.0,
            end_points: EndPoints::ZERO,
            drag_enabled: false,
            interactive_registered: false,
        };
        slider.apply_config(config, host)?;
        Ok(slider)
    }

    /// Re-apply a configuration record.
    ///
    /// Endpoints are applied before the value so the resulting object position
    /// reflects both. Invalid input is rejected before any state changes.
    pub fn apply_config<H: SliderHost>(
        &mut self,
        config: &SliderConfig,
        host: &mut H,
    ) -> Result<(), ConfigError> {
        let end_points = match &config.end_points {
            Some(spec) => Some(spec.resolve()?),
            None => None,
        };
        let value = config.value.unwrap_or(0.0);
        if !value.is_finite() {
            return Err(ConfigError::NonFiniteValue);
        }
        if let Some(pair) = end_points {
            self.end_points = pair;
        }
        self.set_value(value, host);
        self.set_drag_enable(config.drag_enable.unwrap_or(true), host);
        Ok(())
    }

    /// Serialize the current state as a configuration record.
    pub fn snapshot(&self) -> SliderConfig {
        SliderConfig {
            end_points: Some(EndPointsSpec::Points([
                self.end_points.start.into(),
                self.end_points.end.into(),
            ])),
            value: Some(self.value),
            drag_enable: Some(self.drag_enabled),
        }
    }

    /// Replace the endpoint pair. The object is not repositioned until the
    /// next value write.
    pub fn set_end_points(&mut self, end_points: EndPoints) {
        self.end_points = end_points;
    }

    pub fn end_points(&self) -> EndPoints {
        self.end_points
    }

    /// The stored normalized value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// The stored value mapped onto an external [min, max] range.
    pub fn value_between(&self, min: f32, max: f32) -> f32 {
        lerp(min, max, self.value)
    }

    /// Clamp and store `value`, then move the host object onto the segment.
    pub fn set_value<H: SliderHost>(&mut self, value: f32, host: &mut H) {
        self.value = value.clamp(0.0, 1.0);
        if let Some(id) = self.object {
            host.set_position(id, self.end_points.point_at(self.value));
        }
    }

    /// Nudge the value by `delta`, clamped like any other write.
    pub fn add_value<H: SliderHost>(&mut self, delta: f32, host: &mut H) {
        self.set_value(self.value + delta, host);
    }

    pub fn drag_enabled(&self) -> bool {
        self.drag_enabled
    }

    /// Enable or disable drag handling.
    ///
    /// The first call registers the object with the host's input dispatch,
    /// once per slider. The draggable toggle is only forwarded when the flag
    /// actually changes; the first call always forwards it, since there is no
    /// current flag yet.
    pub fn set_drag_enable<H: SliderHost>(&mut self, enabled: bool, host: &mut H) {
        let Some(id) = self.object else { return };
        let first = !self.interactive_registered;
        if first {
            host.register_interactive(id);
            self.interactive_registered = true;
            log::debug!("slider registered object {} interactive", id.0);
        }
        if first || self.drag_enabled != enabled {
            self.drag_enabled = enabled;
            host.set_draggable(id, enabled);
        }
    }

    /// Host-dispatched drag handler. `drag` is the pointer's drag position in
    /// the host's coordinate space.
    ///
    /// Horizontal rails track `drag.x`, vertical rails track `drag.y`; the
    /// cross coordinate stays locked to the rail. Diagonal rails are not
    /// supported and leave all state untouched.
    pub fn on_drag<H: SliderHost>(&mut self, drag: Vec2, host: &mut H) -> DragOutcome {
        let Some(id) = self.object else {
            return DragOutcome::Ignored;
        };
        if !self.drag_enabled {
            return DragOutcome::Ignored;
        }
        let pair = self.end_points;
        match pair.axis() {
            Axis::Horizontal => {
                let min = pair.start.x.min(pair.end.x);
                let max = pair.start.x.max(pair.end.x);
                let x = drag.x.clamp(min, max);
                self.value = unlerp(min, max, x);
                host.set_position(id, Vec2::new(x, pair.start.y));
                DragOutcome::Moved
            }
            Axis::Vertical => {
                let min = pair.start.y.min(pair.end.y);
                let max = pair.start.y.max(pair.end.y);
                let y = drag.y.clamp(min, max);
                self.value = unlerp(min, max, y);
                host.set_position(id, Vec2::new(pair.start.x, y));
                DragOutcome::Moved
            }
            Axis::Diagonal => DragOutcome::UnsupportedAxis,
        }
    }

    /// Host teardown entry point: the bound object is gone.
    pub fn on_object_destroyed(&mut self) {
        self.shutdown();
    }

    /// Release the object binding. Further host-touching calls become no-ops.
    pub fn shutdown(&mut self) {
        if let Some(id) = self.object.take() {
            log::debug!("slider unbound from object {}", id.0);
        }
    }

    /// Whether the slider is still bound to its host object.
    pub fn is_bound(&self) -> bool {
        self.object.is_some()
    }
}
