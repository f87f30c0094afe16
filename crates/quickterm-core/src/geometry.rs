//! Overlay geometry planning.
//!
//! The overlay spans the full width of the focused workspace and a fraction of
//! its height, anchored to the top or bottom edge.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Gap kept between a bottom overlay and the workspace edge so it does not
/// cover a status bar.
pub const BOTTOM_MARGIN: i64 = 6;

/// Axis-aligned rectangle in i3 pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

/// Target position and size for a shown drop-down terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayGeometry {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

/// Fraction of the workspace height taken by the overlay, in (0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratio(f64);

impl Ratio {
    pub fn new(ratio: f64) -> Result<Self, ConfigError> {
        if ratio.is_finite() && ratio > 0.0 && ratio <= 1.0 {
            Ok(Self(ratio))
        } else {
            Err(ConfigError::InvalidRatio { ratio })
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// Workspace edge the overlay is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
}

impl FromStr for Edge {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Edge::Top),
            "bottom" => Ok(Edge::Bottom),
            other => Err(ConfigError::InvalidPosition {
                pos: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Top => write!(f, "top"),
            Edge::Bottom => write!(f, "bottom"),
        }
    }
}

/// Placement settings for the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    pub ratio: Ratio,
    pub edge: Edge,
}

impl Overlay {
    pub fn new(ratio: Ratio, edge: Edge) -> Self {
        Self { ratio, edge }
    }

    pub fn plan(&self, workspace: Rect) -> OverlayGeometry {
        plan(workspace, self.ratio, self.edge)
    }
}

/// Compute the overlay geometry for a workspace.
pub fn plan(workspace: Rect, ratio: Ratio, edge: Edge) -> OverlayGeometry {
    let width = workspace.width;
    let height = (workspace.height as f64 * ratio.get()).round() as i64;

    let y = match edge {
        Edge::Top => workspace.y,
        Edge::Bottom => workspace.y + workspace.height - height - BOTTOM_MARGIN,
    };

    OverlayGeometry {
        x: workspace.x,
        y,
        width,
        height,
    }
}
