//! Clamping, zone snapping and grid snapping for dragged elements.
//!
//! Everything here is a pure function of the candidate position, the element's
//! measured size and the current viewport. Pointer drags (live preview and
//! commit) and keyboard nudges all go through [`resolve_position`].
use crate::models::{Position, Size};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Resolved positions closer than this to the raw one are not worth previewing.
const PREVIEW_TOLERANCE: f64 = 2.0;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SnapSettings {
    /// Height of the taskbar strip along the bottom of the viewport.
    pub taskbar_height: f64,
    /// Minimum gap kept between an element and the viewport edges.
    pub padding: f64,
    pub grid_unit: f64,
    /// Distance to a grid line under which an axis snaps to it.
    pub snap_threshold: f64,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            taskbar_height: 48.0,
            padding: 12.0,
            grid_unit: 24.0,
            snap_threshold: 16.0,
        }
    }
}

impl SnapSettings {
    /// Zones capture from further away than grid lines.
    #[must_use]
    pub fn zone_radius(&self) -> f64 {
        self.snap_threshold * 2.0
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SnapZone {
    #[serde(rename = "Top Left")]
    TopLeft,
    #[serde(rename = "Top Right")]
    TopRight,
    #[serde(rename = "Bottom Left")]
    BottomLeft,
    #[serde(rename = "Bottom Right")]
    BottomRight,
    #[serde(rename = "Center")]
    Center,
}

impl SnapZone {
    /// Zones in the order they are tested. The first capture wins.
    pub const ALL: [SnapZone; 5] = [
        SnapZone::TopLeft,
        SnapZone::TopRight,
        SnapZone::BottomLeft,
        SnapZone::BottomRight,
        SnapZone::Center,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SnapZone::TopLeft => "Top Left",
            SnapZone::TopRight => "Top Right",
            SnapZone::BottomLeft => "Bottom Left",
            SnapZone::BottomRight => "Bottom Right",
            SnapZone::Center => "Center",
        }
    }
}

impl fmt::Display for SnapZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where an element lands, and the zone it locked onto if any.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Resolved {
    pub position: Position,
    pub zone: Option<SnapZone>,
}

/// The area an element of `element` size may occupy in `viewport`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Position,
    pub max: Position,
}

impl Bounds {
    #[must_use]
    pub fn new(element: Size, viewport: Size, settings: &SnapSettings) -> Self {
        Self {
            min: Position::new(settings.padding, settings.padding),
            max: Position::new(
                viewport.width - element.width - settings.padding,
                viewport.height - element.height - settings.taskbar_height - settings.padding,
            ),
        }
    }

    /// Clamp each axis independently. When the element is wider (or taller)
    /// than the available span the lower bound wins.
    #[must_use]
    pub fn clamp(&self, raw: Position) -> Position {
        Position::new(
            raw.x.min(self.max.x).max(self.min.x),
            raw.y.min(self.max.y).max(self.min.y),
        )
    }
}

/// The five zone origins for an element of the given size.
#[must_use]
pub fn zone_origins(element: Size, viewport: Size, settings: &SnapSettings) -> [(SnapZone, Position); 5] {
    let bounds = Bounds::new(element, viewport, settings);
    let center = Position::new(
        (viewport.width - element.width) / 2.0,
        (viewport.height - element.height - settings.taskbar_height) / 2.0,
    );
    SnapZone::ALL.map(|zone| {
        let origin = match zone {
            SnapZone::TopLeft => bounds.min,
            SnapZone::TopRight => Position::new(bounds.max.x, bounds.min.y),
            SnapZone::BottomLeft => Position::new(bounds.min.x, bounds.max.y),
            SnapZone::BottomRight => bounds.max,
            SnapZone::Center => center,
        };
        (zone, origin)
    })
}

/// Resolve a raw candidate position into its final on-screen position.
///
/// 1. Clamp into the viewport minus padding and taskbar.
/// 2. Lock onto the first zone origin within [`SnapSettings::zone_radius`] on
///    both axes.
/// 3. Otherwise snap each axis on its own to the nearest grid line within
///    [`SnapSettings::snap_threshold`], unless that line falls outside the
///    bounds.
#[must_use]
pub fn resolve_position(raw: Position, element: Size, viewport: Size, settings: &SnapSettings) -> Resolved {
    let bounds = Bounds::new(element, viewport, settings);
    let clamped = bounds.clamp(raw);

    let radius = settings.zone_radius();
    let captured = zone_origins(element, viewport, settings)
        .into_iter()
        .find(|(_, origin)| {
            (clamped.x - origin.x).abs() < radius && (clamped.y - origin.y).abs() < radius
        });
    if let Some((zone, origin)) = captured {
        return Resolved {
            position: origin,
            zone: Some(zone),
        };
    }

    Resolved {
        position: Position::new(
            snap_axis(clamped.x, bounds.min.x, bounds.max.x, settings),
            snap_axis(clamped.y, bounds.min.y, bounds.max.y, settings),
        ),
        zone: None,
    }
}

fn snap_axis(value: f64, min: f64, max: f64, settings: &SnapSettings) -> f64 {
    if settings.grid_unit <= 0.0 {
        return value;
    }
    let gridded = (value / settings.grid_unit).round() * settings.grid_unit;
    if (value - gridded).abs() < settings.snap_threshold && min <= gridded && gridded <= max {
        gridded
    } else {
        value
    }
}

/// True when a resolved position is far enough from the raw one to show a
/// landing preview.
#[must_use]
pub fn is_significant(raw: Position, resolved: Position) -> bool {
    (resolved.x - raw.x).abs() > PREVIEW_TOLERANCE || (resolved.y - raw.y).abs() > PREVIEW_TOLERANCE
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Step `current` one grid unit (one pixel when `fine`) in `direction`. The
/// result still has to go through [`resolve_position`].
#[must_use]
pub fn nudge(current: Position, direction: Direction, fine: bool, settings: &SnapSettings) -> Position {
    let step = if fine { 1.0 } else { settings.grid_unit };
    match direction {
        Direction::Up => Position::new(current.x, current.y - step),
        Direction::Down => Position::new(current.x, current.y + step),
        Direction::Left => Position::new(current.x - step, current.y),
        Direction::Right => Position::new(current.x + step, current.y),
    }
}
