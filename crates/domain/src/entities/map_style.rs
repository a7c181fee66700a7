//! Styling table for map markers and route overlays
//!
//! Markers and overlays carry an explicit role or mode from the moment they
//! are created; the styles below are looked up from that tag.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::TransportMode;

/// Stroke width used for every route polyline
pub const ROUTE_LINE_WIDTH: f32 = 5.0;

/// Edge length of marker icons in pixels
pub const MARKER_ICON_SIZE_PX: u16 = 15;

/// Which endpoint a marker represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerRole {
    /// The start address
    Origin,
    /// The destination address
    Destination,
}

impl MarkerRole {
    /// Look up the marker style for this role
    #[must_use]
    pub const fn style(self) -> MarkerStyle {
        match self {
            Self::Origin => MarkerStyle {
                title: "Start",
                icon: "start",
                icon_size_px: MARKER_ICON_SIZE_PX,
                shows_callout: true,
            },
            Self::Destination => MarkerStyle {
                title: "Finish",
                icon: "finish",
                icon_size_px: MARKER_ICON_SIZE_PX,
                shows_callout: true,
            },
        }
    }
}

/// Visual properties of a point marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarkerStyle {
    /// Callout title
    pub title: &'static str,
    /// Icon asset name
    pub icon: &'static str,
    /// Square icon size in pixels
    pub icon_size_px: u16,
    /// Whether tapping the marker shows a callout
    pub shows_callout: bool,
}

/// Stroke color of a route polyline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeColor {
    /// Walking routes
    Red,
    /// Driving routes
    Blue,
}

impl StrokeColor {
    /// CSS-style hex value
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Red => "#ff0000",
            Self::Blue => "#0000ff",
        }
    }
}

impl fmt::Display for StrokeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Blue => write!(f, "blue"),
        }
    }
}

/// Visual properties of a route polyline
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteStyle {
    /// Stroke color
    pub stroke: StrokeColor,
    /// Stroke width in points
    pub line_width: f32,
}

impl RouteStyle {
    /// Look up the polyline style for a transport mode
    #[must_use]
    pub const fn for_mode(mode: TransportMode) -> Self {
        let stroke = match mode {
            TransportMode::Walking => StrokeColor::Red,
            TransportMode::Driving => StrokeColor::Blue,
        };
        Self {
            stroke,
            line_width: ROUTE_LINE_WIDTH,
        }
    }
}
