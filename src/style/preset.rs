use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::schema::options::ToastOptions;

/// Built-in notification styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Green, checkmark, confirmation sound.
    Success,
    /// Red, cross, beep.
    Error,
    /// Orange, warning triangle, beep.
    Warning,
    /// Blue, info glyph, soft confirmation.
    Info,
}

struct PresetStyle {
    bg: (f64, f64, f64),
    text_color: (f64, f64, f64),
    icon: &'static str,
    sound: &'static str,
}

impl Preset {
    /// Every preset.
    pub const ALL: [Preset; 4] = [Preset::Success, Preset::Error, Preset::Warning, Preset::Info];

    /// Preset name as used in options files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    fn style(self) -> PresetStyle {
        match self {
            Self::Success => PresetStyle {
                bg: (0.2, 0.8, 0.3),
                text_color: (0.0, 0.0, 0.0),
                icon: "checkmark.circle.fill",
                sound: "confirmation1",
            },
            Self::Error => PresetStyle {
                bg: (0.9, 0.2, 0.2),
                text_color: (1.0, 1.0, 1.0),
                icon: "xmark.circle.fill",
                sound: "beep1",
            },
            Self::Warning => PresetStyle {
                bg: (1.0, 0.6, 0.0),
                text_color: (0.0, 0.0, 0.0),
                icon: "exclamationmark.triangle.fill",
                sound: "beep1",
            },
            Self::Info => PresetStyle {
                bg: (0.2, 0.5, 0.9),
                text_color: (1.0, 1.0, 1.0),
                icon: "info.circle.fill",
                sound: "confirmation2",
            },
        }
    }

    /// Options carried by this preset; every other field is left unset.
    pub fn options(self) -> ToastOptions {
        let style = self.style();
        ToastOptions::new()
            .bg(style.bg)
            .text_color(style.text_color)
            .icon(style.icon)
            .sound(style.sound)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                format!("unknown preset \"{s}\", expected success, error, warning or info")
            })
    }
}
