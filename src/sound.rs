use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::foundation::error::{ConfigErrorKind, ToastError, ToastResult};

/// Sounds bundled with the rendering engine, grouped by category.
pub const BUNDLED_SOUNDS: [(&str, [&str; 4]); 4] = [
    ("beep", ["beep1", "beep2", "beep3", "beep4"]),
    (
        "confirmation",
        [
            "confirmation1",
            "confirmation2",
            "confirmation3",
            "confirmation4",
        ],
    ),
    ("alert", ["alert1", "alert2", "alert3", "alert4"]),
    (
        "notification",
        [
            "notification1",
            "notification2",
            "notification3",
            "notification4",
        ],
    ),
];

/// Extensions accepted for custom sound files (case-insensitive).
pub const SOUND_EXTENSIONS: [&str; 6] = ["wav", "mp3", "m4a", "aac", "aiff", "caf"];

/// Iterate every bundled sound name.
pub fn bundled_sound_names() -> impl Iterator<Item = &'static str> {
    BUNDLED_SOUNDS.iter().flat_map(|(_, names)| names.iter().copied())
}

fn bundled(name: &str) -> Option<&'static str> {
    bundled_sound_names().find(|n| *n == name)
}

/// Resolved sound choice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sound {
    /// Name from [`BUNDLED_SOUNDS`]; the engine infers the file extension.
    Bundled(String),
    /// Absolute path to a custom sound file, passed to the engine verbatim.
    File(PathBuf),
}

impl Sound {
    /// Argument value for the engine's `--sound` flag.
    pub fn as_arg(&self) -> &std::ffi::OsStr {
        match self {
            Self::Bundled(name) => name.as_ref(),
            Self::File(path) => path.as_os_str(),
        }
    }

    /// Confirm a custom sound file is still present.
    ///
    /// Bundled sounds always pass; they are resolved by the engine.
    pub fn check_available(&self) -> ToastResult<()> {
        let Self::File(path) = self else {
            return Ok(());
        };
        if path.is_file() {
            return Ok(());
        }
        Err(invalid(format!(
            "sound file '{}' does not exist",
            path.display()
        )))
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled(name) => f.write_str(name),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Caller-facing sound: a bundled name or an absolute file path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SoundSpec(pub String);

impl SoundSpec {
    /// Classify the value as bundled or file-backed.
    ///
    /// This only checks the shape of the value; file existence is checked by
    /// [`Sound::check_available`].
    pub fn resolve(&self) -> ToastResult<Sound> {
        let raw = self.0.as_str();
        if let Some(name) = bundled(raw) {
            return Ok(Sound::Bundled(name.to_owned()));
        }

        let path = Path::new(raw);
        if !path.is_absolute() {
            return Err(invalid(format!(
                "unknown sound \"{raw}\": expected a bundled name ({}) or an absolute file path",
                bundled_sound_names().collect::<Vec<_>>().join(", ")
            )));
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext {
            Some(ext) if SOUND_EXTENSIONS.contains(&ext.as_str()) => {
                Ok(Sound::File(path.to_path_buf()))
            }
            _ => Err(invalid(format!(
                "sound file '{raw}' must have one of the extensions {}",
                SOUND_EXTENSIONS.join(", ")
            ))),
        }
    }
}

impl From<&str> for SoundSpec {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for SoundSpec {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&Path> for SoundSpec {
    fn from(p: &Path) -> Self {
        Self(p.to_string_lossy().into_owned())
    }
}

fn invalid(msg: String) -> ToastError {
    ToastError::config(ConfigErrorKind::InvalidSound, "sound", msg)
}
