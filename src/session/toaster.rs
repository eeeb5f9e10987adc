use crate::foundation::error::ToastResult;
use crate::launch::engine::Engine;
use crate::launch::process::ToastOutcome;
use crate::layout::measure::{ParleyMeasurer, TextMeasurer};
use crate::schema::options::ToastOptions;
use crate::schema::validate::{PreparedToast, resolve};
use crate::style::preset::Preset;

/// Entry point pairing an engine location with a text measurer.
///
/// Each [`show`](Self::show) call validates its options and spawns at most one engine process.
/// Configuration errors are returned before anything is spawned.
pub struct Toaster {
    engine: Engine,
    measurer: Box<dyn TextMeasurer>,
}

impl Default for Toaster {
    fn default() -> Self {
        Self::from_env()
    }
}

impl Toaster {
    /// Toaster that measures with [`ParleyMeasurer`].
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            measurer: Box::new(ParleyMeasurer::new()),
        }
    }

    /// Engine from `$TOASTKIT_ENGINE` or `PATH`.
    pub fn from_env() -> Self {
        Self::new(Engine::from_env())
    }

    /// Replace the text measurer used for auto-sizing.
    pub fn with_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    /// Engine this toaster launches.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Validate without launching.
    pub fn prepare(&mut self, message: &str, options: &ToastOptions) -> ToastResult<PreparedToast> {
        resolve(message, options, self.measurer.as_mut())
    }

    /// Validate and launch one toast.
    pub fn show(&mut self, message: &str, options: &ToastOptions) -> ToastResult<ToastOutcome> {
        let toast = self.prepare(message, options)?;
        self.engine.launch(&toast)
    }

    /// Launch with a preset underneath the caller's options.
    pub fn show_preset(
        &mut self,
        preset: Preset,
        message: &str,
        options: &ToastOptions,
    ) -> ToastResult<ToastOutcome> {
        let options = options.clone().merged_over(ToastOptions::new().preset(preset));
        self.show(message, &options)
    }

    /// Show with [`Preset::Success`].
    pub fn success(&mut self, message: &str, options: &ToastOptions) -> ToastResult<ToastOutcome> {
        self.show_preset(Preset::Success, message, options)
    }

    /// Show with [`Preset::Error`].
    pub fn error(&mut self, message: &str, options: &ToastOptions) -> ToastResult<ToastOutcome> {
        self.show_preset(Preset::Error, message, options)
    }

    /// Show with [`Preset::Warning`].
    pub fn warning(&mut self, message: &str, options: &ToastOptions) -> ToastResult<ToastOutcome> {
        self.show_preset(Preset::Warning, message, options)
    }

    /// Show with [`Preset::Info`].
    pub fn info(&mut self, message: &str, options: &ToastOptions) -> ToastResult<ToastOutcome> {
        self.show_preset(Preset::Info, message, options)
    }
}

/// Show a toast using the engine found via `$TOASTKIT_ENGINE` or `PATH`.
pub fn toast(message: &str, options: &ToastOptions) -> ToastResult<ToastOutcome> {
    Toaster::from_env().show(message, options)
}

/// Green success toast with a checkmark and confirmation sound.
pub fn show_success(message: &str, options: &ToastOptions) -> ToastResult<ToastOutcome> {
    Toaster::from_env().success(message, options)
}

/// Red error toast with a cross and beep.
pub fn show_error(message: &str, options: &ToastOptions) -> ToastResult<ToastOutcome> {
    Toaster::from_env().error(message, options)
}

/// Orange warning toast.
pub fn show_warning(message: &str, options: &ToastOptions) -> ToastResult<ToastOutcome> {
    Toaster::from_env().warning(message, options)
}

/// Blue info toast.
pub fn show_info(message: &str, options: &ToastOptions) -> ToastResult<ToastOutcome> {
    Toaster::from_env().info(message, options)
}
