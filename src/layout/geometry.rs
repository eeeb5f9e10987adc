use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{ConfigError, ConfigErrorKind, ToastError, ToastResult};

/// Permitted toast width, in points.
pub const WIDTH_RANGE: RangeInclusive<f64> = 50.0..=1000.0;
/// Permitted toast height, in points.
pub const HEIGHT_RANGE: RangeInclusive<f64> = 30.0..=500.0;
/// Permitted font size, in points.
pub const FONT_SIZE_RANGE: RangeInclusive<f64> = 8.0..=72.0;
/// Permitted corner radius, in points.
pub const CORNER_RADIUS_RANGE: RangeInclusive<f64> = 0.0..=100.0;

/// Fail with `out-of-range` unless `value` is finite and inside `range`.
pub(crate) fn check_range(
    field: &'static str,
    value: f64,
    range: &RangeInclusive<f64>,
) -> ToastResult<f64> {
    if value.is_finite() && range.contains(&value) {
        return Ok(value);
    }
    Err(ToastError::config(
        ConfigErrorKind::OutOfRange,
        field,
        format!(
            "{field} must be within {}..={}, got {value}",
            range.start(),
            range.end()
        ),
    ))
}

/// Named screen placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    /// `top-right`.
    TopRight,
    /// `top-left`.
    TopLeft,
    /// `bottom-right`.
    #[default]
    BottomRight,
    /// `bottom-left`.
    BottomLeft,
    /// `center`.
    Center,
}

impl Anchor {
    /// Every anchor, in tag-list order.
    pub const ALL: [Anchor; 5] = [
        Anchor::TopRight,
        Anchor::TopLeft,
        Anchor::BottomRight,
        Anchor::BottomLeft,
        Anchor::Center,
    ];

    /// Tag accepted by the engine.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopRight => "top-right",
            Self::TopLeft => "top-left",
            Self::BottomRight => "bottom-right",
            Self::BottomLeft => "bottom-left",
            Self::Center => "center",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Anchor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| {
                ConfigError::new(
                    ConfigErrorKind::InvalidPosition,
                    "position",
                    format!("unknown position \"{s}\", expected one of {}", tag_list(&Self::ALL)),
                )
            })
    }
}

/// Resolved placement. Explicit coordinates replace anchor placement entirely.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Position {
    /// Engine-computed placement at a screen corner or the center.
    Anchor(Anchor),
    /// Explicit screen coordinates.
    Point {
        /// Horizontal coordinate, in points.
        x: f64,
        /// Vertical coordinate, in points.
        y: f64,
    },
}

impl Default for Position {
    fn default() -> Self {
        Self::Anchor(Anchor::default())
    }
}

/// Caller-facing position: an anchor tag or an `[x, y]` pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PositionSpec {
    /// Anchor tag such as `top-right`.
    Tag(String),
    /// `[x, y]`; any other length is rejected.
    Coordinates(Vec<f64>),
}

impl PositionSpec {
    /// Resolve into a [`Position`], failing with `invalid-position`.
    pub fn resolve(&self) -> ToastResult<Position> {
        match self {
            Self::Tag(tag) => Ok(Position::Anchor(tag.parse::<Anchor>()?)),
            Self::Coordinates(v) => {
                let [x, y] = v.as_slice() else {
                    return Err(ToastError::config(
                        ConfigErrorKind::InvalidPosition,
                        "position",
                        format!("coordinates must be an (x, y) pair, got {} values", v.len()),
                    ));
                };
                if !x.is_finite() || !y.is_finite() {
                    return Err(ToastError::config(
                        ConfigErrorKind::InvalidPosition,
                        "position",
                        "coordinates must be finite numbers",
                    ));
                }
                Ok(Position::Point { x: *x, y: *y })
            }
        }
    }
}

impl From<Anchor> for PositionSpec {
    fn from(a: Anchor) -> Self {
        Self::Tag(a.as_str().to_owned())
    }
}

impl From<&str> for PositionSpec {
    fn from(s: &str) -> Self {
        Self::Tag(s.to_owned())
    }
}

impl From<(f64, f64)> for PositionSpec {
    fn from((x, y): (f64, f64)) -> Self {
        Self::Coordinates(vec![x, y])
    }
}

impl From<[f64; 2]> for PositionSpec {
    fn from(v: [f64; 2]) -> Self {
        Self::Coordinates(v.to_vec())
    }
}

/// Z-order tag, ordered from lowest to highest.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum WindowLevel {
    /// Ordinary application window.
    Normal,
    /// Above normal windows.
    #[default]
    Floating,
    /// Status-bar level.
    Status,
    /// Modal panel level.
    Modal,
    /// Highest regular level.
    Max,
    /// Above everything, including screen savers.
    Screensaver,
}

impl WindowLevel {
    /// Every level, lowest first.
    pub const ALL: [WindowLevel; 6] = [
        WindowLevel::Normal,
        WindowLevel::Floating,
        WindowLevel::Status,
        WindowLevel::Modal,
        WindowLevel::Max,
        WindowLevel::Screensaver,
    ];

    /// Tag accepted by the engine.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Floating => "floating",
            Self::Status => "status",
            Self::Modal => "modal",
            Self::Max => "max",
            Self::Screensaver => "screensaver",
        }
    }
}

impl fmt::Display for WindowLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindowLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| {
                ConfigError::new(
                    ConfigErrorKind::InvalidWindowLevel,
                    "window_level",
                    format!(
                        "unknown window level \"{s}\", expected one of {}",
                        tag_list(&Self::ALL)
                    ),
                )
            })
    }
}

/// Caller-facing window level tag, checked for membership on resolve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowLevelSpec(pub String);

impl WindowLevelSpec {
    /// Resolve into a [`WindowLevel`], failing with `invalid-window-level`.
    pub fn resolve(&self) -> ToastResult<WindowLevel> {
        Ok(self.0.parse::<WindowLevel>()?)
    }
}

impl From<WindowLevel> for WindowLevelSpec {
    fn from(l: WindowLevel) -> Self {
        Self(l.as_str().to_owned())
    }
}

impl From<&str> for WindowLevelSpec {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

fn tag_list<T: fmt::Display>(all: &[T]) -> String {
    all.iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "../../tests/unit/layout/geometry.rs"]
mod tests;
