use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{ToastError, ToastResult};
use crate::layout::geometry::{PositionSpec, WindowLevelSpec};
use crate::sound::SoundSpec;
use crate::style::color::ColorSpec;
use crate::style::preset::Preset;

/// Loosely-typed toast parameters, every one optional.
///
/// Unset fields fall back to the preset (if any), then to the built-in defaults. Values are
/// checked only when resolved into a [`ToastConfig`](crate::ToastConfig).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToastOptions {
    /// Style preset applied underneath every other field.
    pub preset: Option<Preset>,
    /// Width in points. Conflicts with `auto_size`.
    pub width: Option<f64>,
    /// Height in points. Conflicts with `auto_size`.
    pub height: Option<f64>,
    /// Background color.
    pub bg: Option<ColorSpec>,
    /// Text color.
    pub text_color: Option<ColorSpec>,
    /// Anchor tag or `[x, y]` coordinates.
    pub position: Option<PositionSpec>,
    /// Font size in points.
    pub font_size: Option<f64>,
    /// Corner radius in points.
    pub corner_radius: Option<f64>,
    /// Seconds fully visible.
    pub display_duration: Option<f64>,
    /// Fade-in seconds.
    pub fade_in_duration: Option<f64>,
    /// Fade-out seconds.
    pub fade_out_duration: Option<f64>,
    /// Z-order level tag.
    pub window_level: Option<WindowLevelSpec>,
    /// Symbolic icon name, resolved by the engine.
    pub icon: Option<String>,
    /// Dismiss on click. Defaults to `true`.
    pub click_to_dismiss: Option<bool>,
    /// Bundled sound name or absolute path.
    pub sound: Option<SoundSpec>,
    /// Size the toast from its message.
    pub auto_size: Option<bool>,
    /// Lower width bound while auto-sizing.
    pub min_width: Option<f64>,
    /// Upper width bound while auto-sizing.
    pub max_width: Option<f64>,
    /// Wait for the engine to exit. Defaults to `true`.
    pub blocking: Option<bool>,
    /// Fail on a non-zero engine exit. Requires a blocking launch.
    pub check: Option<bool>,
}

impl ToastOptions {
    /// Empty options; every field falls back to its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON document.
    pub fn from_json_str(s: &str) -> ToastResult<Self> {
        serde_json::from_str(s).map_err(|e| ToastError::serde(format!("toast options: {e}")))
    }

    /// Load options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ToastResult<Self> {
        use anyhow::Context as _;
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read toast options '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Fill every unset field from `base`; values already set here win.
    pub fn merged_over(self, base: ToastOptions) -> ToastOptions {
        ToastOptions {
            preset: self.preset.or(base.preset),
            width: self.width.or(base.width),
            height: self.height.or(base.height),
            bg: self.bg.or(base.bg),
            text_color: self.text_color.or(base.text_color),
            position: self.position.or(base.position),
            font_size: self.font_size.or(base.font_size),
            corner_radius: self.corner_radius.or(base.corner_radius),
            display_duration: self.display_duration.or(base.display_duration),
            fade_in_duration: self.fade_in_duration.or(base.fade_in_duration),
            fade_out_duration: self.fade_out_duration.or(base.fade_out_duration),
            window_level: self.window_level.or(base.window_level),
            icon: self.icon.or(base.icon),
            click_to_dismiss: self.click_to_dismiss.or(base.click_to_dismiss),
            sound: self.sound.or(base.sound),
            auto_size: self.auto_size.or(base.auto_size),
            min_width: self.min_width.or(base.min_width),
            max_width: self.max_width.or(base.max_width),
            blocking: self.blocking.or(base.blocking),
            check: self.check.or(base.check),
        }
    }

    /// Apply the preset layer, if one is selected.
    pub(crate) fn with_preset_applied(&self) -> ToastOptions {
        match self.preset {
            Some(preset) => self.clone().merged_over(preset.options()),
            None => self.clone(),
        }
    }

    /// Set `preset`.
    pub fn preset(mut self, preset: Preset) -> Self {
        self.preset = Some(preset);
        self
    }

    /// Set `width`.
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Set `height`.
    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Set `bg`.
    pub fn bg(mut self, color: impl Into<ColorSpec>) -> Self {
        self.bg = Some(color.into());
        self
    }

    /// Set `text_color`.
    pub fn text_color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    /// Set `position`.
    pub fn position(mut self, position: impl Into<PositionSpec>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Set `font_size`.
    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set `corner_radius`.
    pub fn corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    /// Set `display_duration`.
    pub fn display_duration(mut self, secs: f64) -> Self {
        self.display_duration = Some(secs);
        self
    }

    /// Set `fade_in_duration`.
    pub fn fade_in_duration(mut self, secs: f64) -> Self {
        self.fade_in_duration = Some(secs);
        self
    }

    /// Set `fade_out_duration`.
    pub fn fade_out_duration(mut self, secs: f64) -> Self {
        self.fade_out_duration = Some(secs);
        self
    }

    /// Set `window_level`.
    pub fn window_level(mut self, level: impl Into<WindowLevelSpec>) -> Self {
        self.window_level = Some(level.into());
        self
    }

    /// Set `icon`.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set `click_to_dismiss`.
    pub fn click_to_dismiss(mut self, enabled: bool) -> Self {
        self.click_to_dismiss = Some(enabled);
        self
    }

    /// Set `sound`.
    pub fn sound(mut self, sound: impl Into<SoundSpec>) -> Self {
        self.sound = Some(sound.into());
        self
    }

    /// Set `auto_size`.
    pub fn auto_size(mut self, enabled: bool) -> Self {
        self.auto_size = Some(enabled);
        self
    }

    /// Set `min_width`.
    pub fn min_width(mut self, width: f64) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Set `max_width`.
    pub fn max_width(mut self, width: f64) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Set `blocking`.
    pub fn blocking(mut self, blocking: bool) -> Self {
        self.blocking = Some(blocking);
        self
    }

    /// Set `check`.
    pub fn check(mut self, check: bool) -> Self {
        self.check = Some(check);
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/options.rs"]
mod tests;
