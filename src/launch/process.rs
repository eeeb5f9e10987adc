use std::io::Read;
use std::process::{Child, ExitStatus};
use std::thread::JoinHandle;

use crate::foundation::error::{ToastError, ToastResult};

/// Result of a rendering-engine run that has exited.
#[derive(Debug)]
pub struct CompletedToast {
    /// Engine exit status.
    pub status: ExitStatus,
    /// Everything the engine wrote to stderr, lossily decoded.
    pub stderr: String,
}

impl CompletedToast {
    /// The engine exited with status zero.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Exit code, if the engine was not terminated by a signal.
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }
}

/// What a launch hands back: a finished run, or a live engine process.
#[derive(Debug)]
pub enum ToastOutcome {
    /// Blocking launch; the engine has exited.
    Completed(CompletedToast),
    /// Detached launch; the engine is still running.
    Running(ToastHandle),
}

impl ToastOutcome {
    /// Wait for the engine if it is still running.
    pub fn into_completed(self) -> ToastResult<CompletedToast> {
        match self {
            Self::Completed(done) => Ok(done),
            Self::Running(handle) => handle.wait(),
        }
    }
}

/// One spawned rendering-engine process.
///
/// Piped stderr is drained on a background thread so a chatty engine can never block on a full
/// pipe. Detached engines inherit stderr instead, and their [`CompletedToast::stderr`] is empty.
/// Dropping the handle does not kill the process; the engine exits on its own after its
/// display and fade-out.
#[derive(Debug)]
pub struct ToastHandle {
    child: Child,
    stderr_drain: Option<JoinHandle<std::io::Result<Vec<u8>>>>,
}

impl ToastHandle {
    pub(crate) fn new(mut child: Child) -> Self {
        let stderr_drain = child.stderr.take().map(|mut stderr| {
            std::thread::spawn(move || {
                let mut bytes = Vec::new();
                stderr.read_to_end(&mut bytes)?;
                Ok(bytes)
            })
        });
        Self {
            child,
            stderr_drain,
        }
    }

    /// OS process identifier.
    pub fn id(&self) -> u32 {
        self.child.id()
    }

    /// Poll for exit without blocking.
    pub fn try_wait(&mut self) -> ToastResult<Option<ExitStatus>> {
        Ok(self.child.try_wait()?)
    }

    /// Ask the OS to terminate the engine.
    pub fn kill(&mut self) -> ToastResult<()> {
        Ok(self.child.kill()?)
    }

    /// Block until the engine exits and collect its stderr.
    pub fn wait(mut self) -> ToastResult<CompletedToast> {
        let status = self.child.wait()?;
        let stderr_bytes = match self.stderr_drain.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| anyhow::anyhow!("engine stderr drain thread panicked"))??,
            None => Vec::new(),
        };

        tracing::debug!(pid = self.child.id(), %status, "rendering engine exited");
        Ok(CompletedToast {
            status,
            stderr: String::from_utf8_lossy(&stderr_bytes).trim().to_owned(),
        })
    }
}

/// Escalate a failed run to an error when `check` was requested.
pub(crate) fn check_completed(done: CompletedToast, check: bool) -> ToastResult<CompletedToast> {
    if done.success() {
        return Ok(done);
    }
    if check {
        return Err(ToastError::EngineFailed {
            status: done.status,
            stderr: done.stderr,
        });
    }
    tracing::warn!(status = %done.status, stderr = %done.stderr, "rendering engine failed");
    Ok(done)
}
