use std::fmt;
use std::process::ExitStatus;

/// Convenience alias used across the crate.
pub type ToastResult<T> = Result<T, ToastError>;

/// Configuration error categories, reported before any engine process is spawned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigErrorKind {
    /// Malformed hex string or RGBA tuple.
    InvalidColor,
    /// A numeric field lies outside its permitted bounds.
    OutOfRange,
    /// Unknown anchor tag or malformed coordinate pair.
    InvalidPosition,
    /// Unknown window level tag.
    InvalidWindowLevel,
    /// Durations out of bounds, or fades longer than the display time.
    InvalidDurationCombination,
    /// Explicit dimensions mixed with auto-size, or inverted width bounds.
    AutoSizeConflict,
    /// Sound name not bundled and not a usable absolute path.
    InvalidSound,
    /// Message is empty after trimming, or starts with `-`.
    InvalidMessage,
    /// `check` requested on a non-blocking launch.
    LaunchModeConflict,
}

impl ConfigErrorKind {
    /// Stable kebab-case tag for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidColor => "invalid-color",
            Self::OutOfRange => "out-of-range",
            Self::InvalidPosition => "invalid-position",
            Self::InvalidWindowLevel => "invalid-window-level",
            Self::InvalidDurationCombination => "invalid-duration-combination",
            Self::AutoSizeConflict => "auto-size-conflict",
            Self::InvalidSound => "invalid-sound",
            Self::InvalidMessage => "invalid-message",
            Self::LaunchModeConflict => "launch-mode-conflict",
        }
    }
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single configuration violation, naming the offending field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigError {
    /// Violation category.
    pub kind: ConfigErrorKind,
    /// Caller-facing field name (`bg`, `width`, `fade_in_duration`, ...).
    pub field: &'static str,
    /// Human-readable detail.
    pub message: String,
}

impl ConfigError {
    pub(crate) fn new(
        kind: ConfigErrorKind,
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.kind, self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Errors returned by toastkit.
#[derive(thiserror::Error, Debug)]
pub enum ToastError {
    /// Options rejected before launch.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Engine executable could not be located.
    #[error("rendering engine not found: {0}")]
    EngineNotFound(String),

    /// Engine executable exists but could not be started.
    #[error("failed to start rendering engine: {0}")]
    Spawn(#[source] std::io::Error),

    /// Checked launch whose engine exited non-zero.
    #[error("rendering engine exited with {status}: {stderr}")]
    EngineFailed {
        /// Engine exit status.
        status: ExitStatus,
        /// Captured engine stderr.
        stderr: String,
    },

    /// Options document could not be parsed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// I/O failure while talking to the engine.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ToastError {
    pub(crate) fn config(
        kind: ConfigErrorKind,
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::Config(ConfigError::new(kind, field, message))
    }

    pub(crate) fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Configuration kind, when this is a configuration error.
    pub fn config_kind(&self) -> Option<ConfigErrorKind> {
        match self {
            Self::Config(e) => Some(e.kind),
            _ => None,
        }
    }

    /// `true` when validation rejected the options; nothing was spawned.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
