use serde::Serialize;

use crate::foundation::error::{ConfigErrorKind, ToastError, ToastResult};
use crate::layout::autosize::{self, AutoSizeRequest, DEFAULT_MAX_WIDTH, DEFAULT_MIN_WIDTH};
use crate::layout::geometry::{
    CORNER_RADIUS_RANGE, FONT_SIZE_RANGE, HEIGHT_RANGE, Position, WIDTH_RANGE, WindowLevel,
    check_range,
};
use crate::layout::measure::TextMeasurer;
use crate::schema::options::ToastOptions;
use crate::sound::Sound;
use crate::style::color::{ColorSpec, Rgba};

/// Width when not auto-sizing.
pub const DEFAULT_WIDTH: f64 = 280.0;
/// Height when not auto-sizing.
pub const DEFAULT_HEIGHT: f64 = 80.0;
/// Font size in points.
pub const DEFAULT_FONT_SIZE: f64 = 16.0;
/// Seconds fully visible.
pub const DEFAULT_DISPLAY_DURATION: f64 = 2.0;
/// Fade-in seconds.
pub const DEFAULT_FADE_IN_DURATION: f64 = 0.3;
/// Fade-out seconds.
pub const DEFAULT_FADE_OUT_DURATION: f64 = 0.5;
/// `#333333`.
pub const DEFAULT_BG: Rgba = Rgba::rgb(0.2, 0.2, 0.2);
/// White.
pub const DEFAULT_TEXT_COLOR: Rgba = Rgba::rgb(1.0, 1.0, 1.0);

/// Permitted display duration, in seconds.
pub const DISPLAY_DURATION_RANGE: std::ops::RangeInclusive<f64> = 0.1..=60.0;
/// Permitted fade-in and fade-out durations, in seconds.
pub const FADE_DURATION_RANGE: std::ops::RangeInclusive<f64> = 0.0..=5.0;

/// Slack for `fade_in + fade_out <= display` so decimal inputs like `0.1 + 0.2` compare sanely.
const DURATION_EPSILON: f64 = 1e-9;

/// Width bounds used while auto-sizing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct WidthBounds {
    /// Narrowest allowed width.
    pub min: f64,
    /// Widest allowed width; longer content wraps.
    pub max: f64,
}

/// How the engine process is awaited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LaunchMode {
    /// Wait for exit; with `check`, a non-zero exit is an error.
    Blocking {
        /// Escalate a non-zero exit to [`ToastError::EngineFailed`].
        check: bool,
    },
    /// Return a live handle right after spawn.
    Detached,
}

impl Default for LaunchMode {
    fn default() -> Self {
        Self::Blocking { check: false }
    }
}

/// Fully-resolved toast configuration.
///
/// Only produced by [`resolve`], so every value is canonical and has passed validation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ToastConfig {
    message: String,
    width: f64,
    height: f64,
    bg: Rgba,
    text_color: Rgba,
    position: Position,
    font_size: f64,
    corner_radius: f64,
    display_duration: f64,
    fade_in_duration: f64,
    fade_out_duration: f64,
    window_level: WindowLevel,
    icon: Option<String>,
    click_to_dismiss: bool,
    sound: Option<Sound>,
    auto_size: Option<WidthBounds>,
}

impl ToastConfig {
    /// Message text, untrimmed.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Width in points.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height in points.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Background color.
    pub fn bg(&self) -> Rgba {
        self.bg
    }

    /// Text color.
    pub fn text_color(&self) -> Rgba {
        self.text_color
    }

    /// Screen placement.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Font size in points.
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Corner radius in points.
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    /// Seconds fully visible.
    pub fn display_duration(&self) -> f64 {
        self.display_duration
    }

    /// Fade-in seconds.
    pub fn fade_in_duration(&self) -> f64 {
        self.fade_in_duration
    }

    /// Fade-out seconds.
    pub fn fade_out_duration(&self) -> f64 {
        self.fade_out_duration
    }

    /// Z-order level.
    pub fn window_level(&self) -> WindowLevel {
        self.window_level
    }

    /// Symbolic icon name.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Whether a click dismisses the toast early.
    pub fn click_to_dismiss(&self) -> bool {
        self.click_to_dismiss
    }

    /// Sound played on show.
    pub fn sound(&self) -> Option<&Sound> {
        self.sound.as_ref()
    }

    /// Whether the size was derived from the message.
    pub fn auto_size(&self) -> bool {
        self.auto_size.is_some()
    }

    /// Auto-size width bounds, when auto-sizing.
    pub fn width_bounds(&self) -> Option<WidthBounds> {
        self.auto_size
    }

    /// Seconds from spawn until the engine should exit on its own.
    pub fn lifetime_secs(&self) -> f64 {
        self.display_duration + self.fade_out_duration
    }

    /// Re-check every single-record contract.
    ///
    /// Fails fast on the first violation. Running it again on a valid configuration is a no-op.
    pub fn validate(&self) -> ToastResult<()> {
        check_message(&self.message)?;
        if let Some(bounds) = self.auto_size {
            check_width_bounds(bounds)?;
        }
        check_range("width", self.width, &WIDTH_RANGE)?;
        check_range("height", self.height, &HEIGHT_RANGE)?;
        check_range("font_size", self.font_size, &FONT_SIZE_RANGE)?;
        check_range("corner_radius", self.corner_radius, &CORNER_RADIUS_RANGE)?;
        check_durations(
            self.display_duration,
            self.fade_in_duration,
            self.fade_out_duration,
        )?;
        if let Some(sound) = &self.sound {
            sound.check_available()?;
        }
        Ok(())
    }
}

/// A validated configuration paired with its launch mode.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedToast {
    /// Validated configuration.
    pub config: ToastConfig,
    /// How to await the engine.
    pub launch: LaunchMode,
}

/// Normalize, auto-size and validate caller options.
///
/// Checks run in a fixed order and the first violation is returned: message, auto-size
/// exclusivity, launch mode, colors, position, window level, sound, then the numeric ranges,
/// durations and sound file on the assembled record.
#[tracing::instrument(level = "debug", skip(options, measurer), fields(len = message.len()))]
pub fn resolve(
    message: &str,
    options: &ToastOptions,
    measurer: &mut dyn TextMeasurer,
) -> ToastResult<PreparedToast> {
    let opts = options.with_preset_applied();

    check_message(message)?;
    let bounds = resolve_auto_size(&opts)?;
    let launch = resolve_launch_mode(&opts)?;

    let bg = resolve_color(opts.bg.as_ref(), "bg", DEFAULT_BG)?;
    let text_color = resolve_color(opts.text_color.as_ref(), "text_color", DEFAULT_TEXT_COLOR)?;
    let position = match &opts.position {
        Some(spec) => spec.resolve()?,
        None => Position::default(),
    };
    let window_level = match &opts.window_level {
        Some(spec) => spec.resolve()?,
        None => WindowLevel::default(),
    };
    let sound = opts.sound.as_ref().map(|s| s.resolve()).transpose()?;

    let font_size = check_range(
        "font_size",
        opts.font_size.unwrap_or(DEFAULT_FONT_SIZE),
        &FONT_SIZE_RANGE,
    )?;
    if let Some(r) = opts.corner_radius {
        check_range("corner_radius", r, &CORNER_RADIUS_RANGE)?;
    }

    let (width, height, corner_radius) = match bounds {
        Some(bounds) => {
            let size = autosize::estimate(
                AutoSizeRequest {
                    message,
                    font_size,
                    has_icon: opts.icon.is_some(),
                    min_width: bounds.min,
                    max_width: bounds.max,
                    corner_radius: opts.corner_radius,
                },
                measurer,
            );
            (size.width, size.height, size.corner_radius)
        }
        None => (
            opts.width.unwrap_or(DEFAULT_WIDTH),
            opts.height.unwrap_or(DEFAULT_HEIGHT),
            opts.corner_radius.unwrap_or(autosize::DEFAULT_CORNER_RADIUS),
        ),
    };

    let config = ToastConfig {
        message: message.to_owned(),
        width,
        height,
        bg,
        text_color,
        position,
        font_size,
        corner_radius,
        display_duration: opts.display_duration.unwrap_or(DEFAULT_DISPLAY_DURATION),
        fade_in_duration: opts.fade_in_duration.unwrap_or(DEFAULT_FADE_IN_DURATION),
        fade_out_duration: opts.fade_out_duration.unwrap_or(DEFAULT_FADE_OUT_DURATION),
        window_level,
        icon: opts.icon,
        click_to_dismiss: opts.click_to_dismiss.unwrap_or(true),
        sound,
        auto_size: bounds,
    };
    config.validate()?;

    Ok(PreparedToast { config, launch })
}

fn check_message(message: &str) -> ToastResult<()> {
    if message.trim().is_empty() {
        return Err(ToastError::config(
            ConfigErrorKind::InvalidMessage,
            "message",
            "message must not be empty",
        ));
    }
    // The message is the engine's last argument; a leading dash would parse as a flag.
    if message.starts_with('-') {
        return Err(ToastError::config(
            ConfigErrorKind::InvalidMessage,
            "message",
            format!("message must not start with '-', got \"{message}\""),
        ));
    }
    Ok(())
}

fn resolve_auto_size(opts: &ToastOptions) -> ToastResult<Option<WidthBounds>> {
    fn conflict(field: &'static str, msg: &str) -> ToastResult<Option<WidthBounds>> {
        Err(ToastError::config(
            ConfigErrorKind::AutoSizeConflict,
            field,
            msg,
        ))
    }

    if !opts.auto_size.unwrap_or(false) {
        if opts.min_width.is_some() {
            return conflict("min_width", "min_width requires auto_size=true");
        }
        if opts.max_width.is_some() {
            return conflict("max_width", "max_width requires auto_size=true");
        }
        return Ok(None);
    }

    if opts.width.is_some() {
        return conflict("width", "width cannot be set when auto_size=true");
    }
    if opts.height.is_some() {
        return conflict("height", "height cannot be set when auto_size=true");
    }

    let bounds = WidthBounds {
        min: opts.min_width.unwrap_or(DEFAULT_MIN_WIDTH),
        max: opts.max_width.unwrap_or(DEFAULT_MAX_WIDTH),
    };
    check_width_bounds(bounds)?;
    Ok(Some(bounds))
}

fn check_width_bounds(bounds: WidthBounds) -> ToastResult<()> {
    check_range("min_width", bounds.min, &WIDTH_RANGE)?;
    check_range("max_width", bounds.max, &WIDTH_RANGE)?;
    if bounds.min > bounds.max {
        return Err(ToastError::config(
            ConfigErrorKind::AutoSizeConflict,
            "min_width",
            format!(
                "min_width ({}) must not exceed max_width ({})",
                bounds.min, bounds.max
            ),
        ));
    }
    Ok(())
}

fn resolve_launch_mode(opts: &ToastOptions) -> ToastResult<LaunchMode> {
    let check = opts.check.unwrap_or(false);
    if opts.blocking.unwrap_or(true) {
        return Ok(LaunchMode::Blocking { check });
    }
    if check {
        return Err(ToastError::config(
            ConfigErrorKind::LaunchModeConflict,
            "check",
            "check=true requires blocking=true",
        ));
    }
    Ok(LaunchMode::Detached)
}

fn resolve_color(spec: Option<&ColorSpec>, field: &'static str, default: Rgba) -> ToastResult<Rgba> {
    match spec {
        Some(spec) => spec.resolve(field),
        None => Ok(default),
    }
}

fn check_durations(display: f64, fade_in: f64, fade_out: f64) -> ToastResult<()> {
    check_range("display_duration", display, &DISPLAY_DURATION_RANGE)?;
    check_range("fade_in_duration", fade_in, &FADE_DURATION_RANGE)?;
    check_range("fade_out_duration", fade_out, &FADE_DURATION_RANGE)?;
    if fade_in + fade_out > display + DURATION_EPSILON {
        return Err(ToastError::config(
            ConfigErrorKind::InvalidDurationCombination,
            "display_duration",
            format!(
                "fade_in_duration + fade_out_duration ({}) exceeds display_duration ({display})",
                fade_in + fade_out
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/schema/validate.rs"]
mod tests;
