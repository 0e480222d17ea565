use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::endpoints::EndPoints;

/// Configuration record for a slider, in the JSON shape hosts pass around.
///
/// All fields are optional: an absent `endPoints` leaves the current pair
/// untouched, `value` defaults to 0, `dragEnable` defaults to true.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_points: Option<EndPointsSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drag_enable: Option<bool>,
}

impl SliderConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// A 2D point as it appears in config records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointSpec {
    pub x: f32,
    pub y: f32,
}

impl From<PointSpec> for Vec2 {
    fn from(p: PointSpec) -> Self {
        Vec2::new(p.x, p.y)
    }
}

impl From<Vec2> for PointSpec {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Accepted shapes for the `endPoints` field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EndPointsSpec {
    /// `[x0, y0, x1, y1]`
    Coords([f32; 4]),
    /// `[{ "x": .., "y": .. }, { "x": .., "y": .. }]`
    Points([PointSpec; 2]),
    /// `{ "start": { .. }, "end": { .. } }`
    Pair { start: PointSpec, end: PointSpec },
}

impl EndPointsSpec {
    /// Validate and convert into an endpoint pair.
    pub fn resolve(&self) -> Result<EndPoints, ConfigError> {
        let pair = match *self {
            EndPointsSpec::Coords([x0, y0, x1, y1]) => EndPoints::from_coords(x0, y0, x1, y1),
            EndPointsSpec::Points([p0, p1]) => EndPoints::from_points(p0.into(), p1.into()),
            EndPointsSpec::Pair { start, end } => EndPoints::from_points(start.into(), end.into()),
        };
        if pair.start.is_finite() && pair.end.is_finite() {
            Ok(pair)
        } else {
            Err(ConfigError::NonFiniteEndPoints)
        }
    }
}

/// Rejected configuration input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("endpoint coordinates must be finite")]
    NonFiniteEndPoints,
    #[error("value must be a finite number")]
    NonFiniteValue,
}
