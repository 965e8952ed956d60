use crate::core::Converter;
use crate::domain::model::render_command;
use crate::utils::error::{PresentError, Result};
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::Path;
use tokio::process::Command;

/// Runs the nbconvert-style converter as a child process and waits for it.
///
/// Ctrl-C is caught while the child is running so the staging folder can
/// still be removed; the child gets the same SIGINT from the terminal and is
/// killed if it has not exited on its own.
#[derive(Debug, Clone, Default)]
pub struct NbconvertConverter;

impl NbconvertConverter {
    pub fn new() -> Self {
        Self
    }
}

/// A failed Ctrl-C registration is not an interrupt; the caller keeps waiting.
fn interrupt_requested(signal: std::io::Result<()>) -> bool {
    match signal {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Could not listen for Ctrl-C, waiting on converter only: {}", e);
            false
        }
    }
}

#[async_trait]
impl Converter for NbconvertConverter {
    async fn convert_and_serve(
        &self,
        slides_dir: &Path,
        program: &str,
        args: &[OsString],
    ) -> Result<()> {
        let command_line = render_command(program, args);
        tracing::info!("🚀 Running: {}", command_line);

        let mut child = Command::new(program)
            .args(args)
            .current_dir(slides_dir)
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| PresentError::SpawnError {
                command: command_line.clone(),
                source,
            })?;

        let status = tokio::select! {
            status = child.wait() => status?,
            signal = tokio::signal::ctrl_c() => {
                if !interrupt_requested(signal) {
                    child.wait().await?
                } else {
                    tracing::warn!("⏹️ Interrupt received, stopping converter");
                    // 子程序可能已經因同一個 SIGINT 結束
                    if let Err(e) = child.kill().await {
                        tracing::debug!("Converter already gone: {}", e);
                    }
                    return Err(PresentError::Interrupted);
                }
            }
        };

        if !status.success() {
            tracing::error!("❌ Converter exited with {}", status);
            return Err(PresentError::ExternalCommandError {
                command: command_line,
                status: status.to_string(),
            });
        }

        tracing::debug!("Converter finished with {}", status);
        Ok(())
    }
}
