use crate::layout::measure::TextMeasurer;

/// Horizontal padding on each side of the content.
pub const HORIZONTAL_PADDING: f64 = 20.0;
/// Vertical padding above and below the content.
pub const VERTICAL_PADDING: f64 = 12.0;
/// Gap between icon and text.
pub const ICON_SPACING: f64 = 12.0;
/// Corner radius used when none is configured.
pub const DEFAULT_CORNER_RADIUS: f64 = 16.0;
/// Lower width bound when auto-sizing without an explicit `min_width`.
pub const DEFAULT_MIN_WIDTH: f64 = 100.0;
/// Upper width bound when auto-sizing without an explicit `max_width`.
pub const DEFAULT_MAX_WIDTH: f64 = 400.0;

/// Icons render roughly one glyph box wide.
pub fn icon_width(font_size: f64) -> f64 {
    font_size + 4.0
}

/// Inputs to [`estimate`].
#[derive(Clone, Copy, Debug)]
pub struct AutoSizeRequest<'a> {
    /// Message text.
    pub message: &'a str,
    /// Font size in points.
    pub font_size: f64,
    /// Reserve room for an inline icon.
    pub has_icon: bool,
    /// Narrowest allowed width.
    pub min_width: f64,
    /// Widest allowed width.
    pub max_width: f64,
    /// Caller-configured radius, if any.
    pub corner_radius: Option<f64>,
}

/// Computed dimensions, in whole points (radius may be fractional).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoSize {
    /// Toast width.
    pub width: f64,
    /// Toast height.
    pub height: f64,
    /// Corner radius, capped for the height.
    pub corner_radius: f64,
    /// Unwrapped content width including padding and icon.
    pub natural_width: f64,
    /// The message was wrapped at `max_width`.
    pub wrapped: bool,
}

/// Compute width, height and corner radius from the message content.
///
/// Content that fits within `max_width` is never wrapped and is widened to `min_width`; wider
/// content is pinned to `max_width` and wrapped. The radius never exceeds `height / 2 - 2`.
pub fn estimate(req: AutoSizeRequest<'_>, measurer: &mut dyn TextMeasurer) -> AutoSize {
    let icon = if req.has_icon {
        icon_width(req.font_size) + ICON_SPACING
    } else {
        0.0
    };
    let chrome = 2.0 * HORIZONTAL_PADDING + icon;

    let single = measurer.measure(req.message, req.font_size, None);
    let natural_width = (single.width + chrome).ceil();

    let (width, text_height, wrapped) = if natural_width <= req.max_width {
        (natural_width.max(req.min_width), single.height, false)
    } else {
        let text_max = (req.max_width - chrome).max(1.0);
        let multi = measurer.measure(req.message, req.font_size, Some(text_max));
        (req.max_width, multi.height, true)
    };

    let height = (text_height + 2.0 * VERTICAL_PADDING).ceil();
    let corner_radius = req
        .corner_radius
        .unwrap_or(DEFAULT_CORNER_RADIUS)
        .min(height / 2.0 - 2.0)
        .max(0.0);

    tracing::debug!(
        natural_width,
        width,
        height,
        corner_radius,
        wrapped,
        "auto-sized toast"
    );

    AutoSize {
        width,
        height,
        corner_radius,
        natural_width,
        wrapped,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/autosize.rs"]
mod tests;
