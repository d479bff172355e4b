use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info};

use super::PowerCommand;
use crate::types::PowerCfgConfig;

/// Suppresses the console window flash when spawning from a GUI process
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("wait failed: {0}")]
    Wait(#[source] std::io::Error),

    #[error("{program} timed out after {secs}s")]
    TimedOut { program: String, secs: u64 },

    #[error("{status}: {output}")]
    Exit { status: ExitStatus, output: String },
}

/// Thin wrapper around the `powercfg` CLI.
#[derive(Debug, Clone)]
pub struct PowerCfg {
    path: String,
    timeout: Duration,
}

impl PowerCfg {
    pub fn new(cfg: &PowerCfgConfig) -> Self {
        info!("powercfg at: {} (timeout {}s)", cfg.path, cfg.timeout_secs);
        Self {
            path: cfg.path.clone(),
            timeout: Duration::from_secs(cfg.timeout_secs),
        }
    }

    async fn run(&self, args: &[&str]) -> Result<String, CommandError> {
        debug!("running {} {}", self.path, args.join(" "));
        let mut cmd = Command::new(&self.path);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        #[cfg(windows)]
        cmd.creation_flags(CREATE_NO_WINDOW);

        let child = cmd.spawn().map_err(|source| CommandError::Spawn {
            program: self.path.clone(),
            source,
        })?;
        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| CommandError::TimedOut {
                program: self.path.clone(),
                secs: self.timeout.as_secs(),
            })?
            .map_err(CommandError::Wait)?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        if output.status.success() {
            Ok(stdout)
        } else {
            // powercfg reports most failures on stdout
            let stderr = String::from_utf8_lossy(&output.stderr);
            let text = if stderr.trim().is_empty() {
                stdout.trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            Err(CommandError::Exit {
                status: output.status,
                output: text,
            })
        }
    }
}

impl PowerCommand for PowerCfg {
    async fn list_schemes(&self) -> Result<String, CommandError> {
        self.run(&["/list"]).await
    }

    async fn active_scheme(&self) -> Result<String, CommandError> {
        self.run(&["/getactivescheme"]).await
    }

    async fn set_active(&self, guid: &str) -> Result<(), CommandError> {
        let _ = self.run(&["/setactive", guid]).await?;
        Ok(())
    }
}
