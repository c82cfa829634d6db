//! External command invocation for the shell-passthrough routes.
//!
//! The runner is a trait object on `AppState` so route tests can swap in a
//! recording mock. The real implementation hands the command string to
//! `sh -c` verbatim — the passthrough routes interpolate caller input without
//! sanitization, which is the point of a fixture that exists to be probed.

use std::io;

use async_trait::async_trait;
use tokio::process::Command;

/// Shell used for passthrough commands.
pub const SHELL: &str = "sh";

/// Captured result of a completed command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, if the process exited normally.
    pub status: Option<i32>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Capability to run an external command and capture its output.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command` to completion.
    ///
    /// Returns `Err` only when the command could not be spawned; a command
    /// that runs and exits non-zero is an `Ok` with its captured output.
    async fn run(&self, command: &str) -> io::Result<CommandOutput>;
}

/// Runs commands through the system shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsCommandRunner;

#[async_trait]
impl CommandRunner for OsCommandRunner {
    async fn run(&self, command: &str) -> io::Result<CommandOutput> {
        let output = Command::new(SHELL).arg("-c").arg(command).output().await?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status: output.status.code(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_captures_stdout() {
        let output = OsCommandRunner.run("echo hello").await.unwrap();
        assert_eq!(output.stdout, "hello\n");
        assert!(output.success());
    }

    #[tokio::test]
    async fn test_run_captures_stderr_and_exit_code() {
        let output = OsCommandRunner
            .run("echo oops 1>&2; exit 3")
            .await
            .unwrap();
        assert_eq!(output.stderr, "oops\n");
        assert_eq!(output.status, Some(3));
        assert!(!output.success());
    }

    #[tokio::test]
    async fn test_run_honors_shell_redirects() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("echoed.txt");
        let command = format!("echo 'redirected' > {}", path.display());

        let output = OsCommandRunner.run(&command).await.unwrap();

        assert!(output.success());
        assert!(output.stdout.is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "redirected\n");
    }
}
