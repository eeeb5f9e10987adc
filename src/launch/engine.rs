use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::foundation::error::{ToastError, ToastResult};
use crate::launch::process::{ToastHandle, ToastOutcome, check_completed};
use crate::layout::geometry::Position;
use crate::schema::validate::{LaunchMode, PreparedToast, ToastConfig};

/// Environment variable naming the rendering-engine executable.
pub const ENGINE_ENV: &str = "TOASTKIT_ENGINE";
/// Executable looked up on `PATH` when [`ENGINE_ENV`] is unset.
pub const DEFAULT_ENGINE: &str = "toast-hud";

/// Serialize a configuration into the engine's argument list (program name excluded).
///
/// Every field is emitted explicitly; the message comes last. Validation rejects messages
/// starting with `-`, so the message is never read as a flag.
pub fn engine_args(config: &ToastConfig) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::with_capacity(32);
    let mut flag = |name: &str, value: OsString| {
        args.push(name.into());
        args.push(value);
    };

    flag("--width", config.width().to_string().into());
    flag("--height", config.height().to_string().into());
    flag("--font-size", config.font_size().to_string().into());
    flag("--bg", config.bg().to_hex().into());
    flag("--text-color", config.text_color().to_hex().into());
    match config.position() {
        Position::Anchor(anchor) => flag("--position", anchor.as_str().into()),
        Position::Point { x, y } => {
            flag("--x", x.to_string().into());
            flag("--y", y.to_string().into());
        }
    }
    flag("--corner-radius", config.corner_radius().to_string().into());
    flag(
        "--display-duration",
        config.display_duration().to_string().into(),
    );
    flag(
        "--fade-in-duration",
        config.fade_in_duration().to_string().into(),
    );
    flag(
        "--fade-out-duration",
        config.fade_out_duration().to_string().into(),
    );
    flag("--window-level", config.window_level().as_str().into());
    if let Some(icon) = config.icon() {
        flag("--icon", icon.into());
    }
    if let Some(sound) = config.sound() {
        flag("--sound", sound.as_arg().to_owned());
    }

    if config.click_to_dismiss() {
        args.push("--click-to-dismiss".into());
        args.push("true".into());
    } else {
        args.push("--no-click-to-dismiss".into());
    }

    args.push(config.message().into());
    args
}

/// Location of the external rendering engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Engine {
    program: PathBuf,
}

impl Default for Engine {
    fn default() -> Self {
        Self::from_env()
    }
}

impl Engine {
    /// Use an explicit executable path (or bare name resolved via `PATH`).
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// `$TOASTKIT_ENGINE` when set and non-empty, otherwise `toast-hud` on `PATH`.
    pub fn from_env() -> Self {
        match std::env::var_os(ENGINE_ENV) {
            Some(p) if !p.is_empty() => Self::new(p),
            _ => Self::new(DEFAULT_ENGINE),
        }
    }

    /// Executable path or bare name.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Build the command for `config` without spawning it. Stderr is piped for capture.
    pub fn command(&self, config: &ToastConfig) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(engine_args(config))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        cmd
    }

    /// Spawn exactly one engine process for `config`.
    ///
    /// A detached engine may outlive the caller, so it inherits the caller's stderr instead of
    /// writing into a pipe nobody drains.
    pub fn spawn(&self, config: &ToastConfig, launch: LaunchMode) -> ToastResult<ToastHandle> {
        let mut cmd = self.command(config);
        if launch == LaunchMode::Detached {
            cmd.stderr(Stdio::inherit());
        }
        tracing::debug!(program = %self.program.display(), args = ?cmd.get_args().collect::<Vec<_>>(), "spawning rendering engine");

        let child = cmd.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ToastError::EngineNotFound(format!(
                    "'{}' (set {ENGINE_ENV} or put {DEFAULT_ENGINE} on PATH)",
                    self.program.display()
                ))
            } else {
                ToastError::Spawn(e)
            }
        })?;

        tracing::info!(pid = child.id(), lifetime_secs = config.lifetime_secs(), "toast shown");
        Ok(ToastHandle::new(child))
    }

    /// Spawn the engine and honour the toast's launch mode.
    #[tracing::instrument(level = "debug", skip(self, toast), fields(mode = ?toast.launch))]
    pub fn launch(&self, toast: &PreparedToast) -> ToastResult<ToastOutcome> {
        let handle = self.spawn(&toast.config, toast.launch)?;
        match toast.launch {
            LaunchMode::Detached => Ok(ToastOutcome::Running(handle)),
            LaunchMode::Blocking { check } => {
                let done = check_completed(handle.wait()?, check)?;
                Ok(ToastOutcome::Completed(done))
            }
        }
    }
}
