//! Toastkit shows transient, auto-dismissing toast notifications through an external
//! rendering engine.
//!
//! The crate owns everything up to the process boundary:
//!
//! - Accept loosely-typed [`ToastOptions`] (hex or tuple colors, anchor or coordinate positions)
//! - Resolve them into one canonical, validated [`ToastConfig`], auto-sizing from the message
//!   when asked
//! - Serialize that config into the engine's command line and run it through [`Engine`], either
//!   blocking or detached with a [`ToastHandle`]
//!
//! Drawing, animation and audio playback stay inside the engine process.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod launch;
mod layout;
mod schema;
mod session;
mod sound;
mod style;

pub use crate::foundation::error::{ConfigError, ConfigErrorKind, ToastError, ToastResult};
pub use crate::launch::engine::{DEFAULT_ENGINE, ENGINE_ENV, Engine, engine_args};
pub use crate::launch::process::{CompletedToast, ToastHandle, ToastOutcome};
pub use crate::layout::autosize::{AutoSize, AutoSizeRequest, estimate as estimate_auto_size};
pub use crate::layout::geometry::{
    Anchor, CORNER_RADIUS_RANGE, FONT_SIZE_RANGE, HEIGHT_RANGE, Position, PositionSpec,
    WIDTH_RANGE, WindowLevel, WindowLevelSpec,
};
pub use crate::layout::measure::{HeuristicMeasurer, ParleyMeasurer, TextExtent, TextMeasurer};
pub use crate::schema::options::ToastOptions;
pub use crate::schema::validate::{
    LaunchMode, PreparedToast, ToastConfig, WidthBounds, resolve,
};
pub use crate::session::toaster::{
    Toaster, show_error, show_info, show_success, show_warning, toast,
};
pub use crate::sound::{BUNDLED_SOUNDS, SOUND_EXTENSIONS, Sound, SoundSpec, bundled_sound_names};
pub use crate::style::color::{ColorSpec, Rgba};
pub use crate::style::preset::Preset;
