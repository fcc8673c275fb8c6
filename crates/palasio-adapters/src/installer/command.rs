//! Installer that runs an external command (by default `bun install`).

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use palasio_core::{
    application::ports::Installer,
    domain::{InstallOutcome, InstallWarning},
};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Why an install attempt did not succeed.
///
/// Only the display text leaves the adapter, as the warning's reason.
#[derive(Debug, Error)]
pub enum InstallFailure {
    #[error("`{program}` was not found on PATH")]
    ProgramNotFound { program: String },

    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    ExitStatus { command: String, status: ExitStatus },

    #[error("`{command}` did not finish within {}s and was stopped", .timeout.as_secs())]
    TimedOut { command: String, timeout: Duration },

    #[error("lost track of `{command}`: {source}")]
    Wait {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Runs `program args...` in the project root with inherited stdio.
///
/// Every failure, including a missing program or a timeout, becomes an
/// [`InstallOutcome::Warning`]. The command is never retried.
#[derive(Debug, Clone)]
pub struct CommandInstaller {
    program: String,
    args: Vec<String>,
    stdout: StdoutPolicy,
}

/// Where the child's standard output goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StdoutPolicy {
    /// Share the parent's stdout.
    #[default]
    Inherit,
    /// Send it to the parent's stderr, keeping stdout free for a report.
    Stderr,
}

impl CommandInstaller {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            stdout: StdoutPolicy::Inherit,
        }
    }

    pub fn with_stdout(mut self, policy: StdoutPolicy) -> Self {
        self.stdout = policy;
        self
    }

    /// `bun install`
    pub fn bun() -> Self {
        Self::new("bun", ["install"])
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn stdout_policy(&self) -> StdoutPolicy {
        self.stdout
    }

    fn resolve_program(&self) -> Result<PathBuf, InstallFailure> {
        which::which(&self.program).map_err(|_| InstallFailure::ProgramNotFound {
            program: self.program.clone(),
        })
    }

    fn run(&self, root: &Path, timeout: Option<Duration>) -> Result<(), InstallFailure> {
        let program = self.resolve_program()?;
        debug!(program = %program.display(), "resolved installer program");

        let mut child = Command::new(&program)
            .args(&self.args)
            .current_dir(root)
            .stdin(Stdio::inherit())
            .stdout(match self.stdout {
                StdoutPolicy::Inherit => Stdio::inherit(),
                StdoutPolicy::Stderr => Stdio::from(io::stderr()),
            })
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| InstallFailure::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let status = match timeout {
            None => child.wait().map_err(|source| self.wait_error(source))?,
            Some(limit) => self.wait_with_timeout(&mut child, limit)?,
        };

        if status.success() {
            Ok(())
        } else {
            Err(InstallFailure::ExitStatus {
                command: self.command_line(),
                status,
            })
        }
    }

    fn wait_with_timeout(&self, child: &mut Child, limit: Duration) -> Result<ExitStatus, InstallFailure> {
        let started = Instant::now();
        loop {
            if let Some(status) = child.try_wait().map_err(|source| self.wait_error(source))? {
                return Ok(status);
            }
            if started.elapsed() >= limit {
                if let Err(e) = child.kill() {
                    warn!(error = %e, "failed to kill timed-out installer");
                }
                // Reap the child so it does not linger as a zombie.
                let _ = child.wait();
                return Err(InstallFailure::TimedOut {
                    command: self.command_line(),
                    timeout: limit,
                });
            }
            thread::sleep(POLL_INTERVAL);
        }
    }

    fn wait_error(&self, source: std::io::Error) -> InstallFailure {
        InstallFailure::Wait {
            command: self.command_line(),
            source,
        }
    }
}

impl Default for CommandInstaller {
    fn default() -> Self {
        Self::bun()
    }
}

impl Installer for CommandInstaller {
    #[instrument(skip(self), fields(command = %self.command_line()))]
    fn install(&self, root: &Path, timeout: Option<Duration>) -> InstallOutcome {
        match self.run(root, timeout) {
            Ok(()) => {
                info!("dependencies installed");
                InstallOutcome::Installed
            }
            Err(failure) => {
                warn!(error = %failure, "installer failed");
                InstallOutcome::Warning(InstallWarning::new(failure.to_string(), self.command_line()))
            }
        }
    }

    fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
