use serde::{Deserialize, Serialize};

use crate::foundation::error::{ConfigErrorKind, ToastError, ToastResult};

/// Canonical straight-alpha color, each channel in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Rgba {
    /// Opaque color from three channels.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color from four channels.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Hex form understood by the rendering engine.
    ///
    /// Opaque colors serialize as `#RRGGBB`, translucent ones as `#RRGGBBAA`.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    /// Quantize to 8-bit channels.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }
}

/// Caller-facing color: a `#RRGGBB[AA]` string or 3/4 float components.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// `#RRGGBB` or `#RRGGBBAA`, case-insensitive.
    Hex(String),
    /// `[r, g, b]` or `[r, g, b, a]` in `[0, 1]`.
    Components(Vec<f64>),
}

impl ColorSpec {
    /// Normalize into the canonical [`Rgba`] form.
    ///
    /// `field` names the caller parameter in the error.
    pub fn resolve(&self, field: &'static str) -> ToastResult<Rgba> {
        match self {
            Self::Hex(s) => parse_hex(s).map_err(|msg| invalid(field, msg)),
            Self::Components(v) => from_components(v).map_err(|msg| invalid(field, msg)),
        }
    }
}

fn invalid(field: &'static str, msg: String) -> ToastError {
    ToastError::config(ConfigErrorKind::InvalidColor, field, msg)
}

impl From<&str> for ColorSpec {
    fn from(s: &str) -> Self {
        Self::Hex(s.to_owned())
    }
}

impl From<String> for ColorSpec {
    fn from(s: String) -> Self {
        Self::Hex(s)
    }
}

impl From<(f64, f64, f64)> for ColorSpec {
    fn from((r, g, b): (f64, f64, f64)) -> Self {
        Self::Components(vec![r, g, b])
    }
}

impl From<(f64, f64, f64, f64)> for ColorSpec {
    fn from((r, g, b, a): (f64, f64, f64, f64)) -> Self {
        Self::Components(vec![r, g, b, a])
    }
}

impl From<[f64; 3]> for ColorSpec {
    fn from(v: [f64; 3]) -> Self {
        Self::Components(v.to_vec())
    }
}

impl From<[f64; 4]> for ColorSpec {
    fn from(v: [f64; 4]) -> Self {
        Self::Components(v.to_vec())
    }
}

impl From<Rgba> for ColorSpec {
    fn from(c: Rgba) -> Self {
        Self::Components(vec![c.r, c.g, c.b, c.a])
    }
}

pub(crate) fn parse_hex(s: &str) -> Result<Rgba, String> {
    let Some(digits) = s.strip_prefix('#') else {
        return Err(format!("hex color \"{s}\" must start with '#'"));
    };
    if digits.len() != 6 && digits.len() != 8 {
        return Err(format!(
            "hex color \"{s}\" must be #RRGGBB or #RRGGBBAA (case-insensitive)"
        ));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("hex color \"{s}\" contains non-hex characters"));
    }

    // All bytes are ASCII hex digits, so byte slicing is char-aligned.
    let channel = |i: usize| -> Result<f64, String> {
        let pair = &digits[i..i + 2];
        u8::from_str_radix(pair, 16)
            .map(|v| f64::from(v) / 255.0)
            .map_err(|_| format!("invalid hex byte \"{pair}\""))
    };

    let a = if digits.len() == 8 { channel(6)? } else { 1.0 };
    Ok(Rgba::rgba(channel(0)?, channel(2)?, channel(4)?, a))
}

fn from_components(v: &[f64]) -> Result<Rgba, String> {
    if v.len() != 3 && v.len() != 4 {
        return Err(format!(
            "color tuple must have 3 (r, g, b) or 4 (r, g, b, a) components, got {}",
            v.len()
        ));
    }
    for (i, c) in v.iter().enumerate() {
        if !c.is_finite() || !(0.0..=1.0).contains(c) {
            return Err(format!("color component {i} is {c}, expected 0.0..=1.0"));
        }
    }
    let a = v.get(3).copied().unwrap_or(1.0);
    Ok(Rgba::rgba(v[0], v[1], v[2], a))
}

#[cfg(test)]
#[path = "../../tests/unit/style/color.rs"]
mod tests;
