use super::error::ReportError;
use crate::transcript::ConversationTurn;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Suggested filename for the generated document
pub const REPORT_FILENAME: &str = "interview_report.pdf";

/// How to invoke the external report generator
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Executable to spawn (e.g. "python3")
    pub command: String,

    /// Arguments passed to the executable (e.g. the generator script path)
    pub args: Vec<String>,

    /// Upper bound on one generation run; the child is killed on expiry
    pub timeout: Duration,
}

/// Wire payload sent to the generator on stdin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub conversation: Vec<ConversationTurn>,
}

/// Bridge to the external report-generation process.
///
/// Each call spawns exactly one generator process scoped to that call; there is
/// no pooling or reuse, and concurrent calls share no state beyond the OS
/// process table.
#[derive(Debug)]
pub struct ReportBridge {
    config: GeneratorConfig,
}

impl ReportBridge {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Run one generation: serialize the conversation, feed it to a freshly
    /// spawned generator, and return the PDF bytes it wrote to stdout.
    ///
    /// Rejects empty conversations before spawning anything. stdout and stderr
    /// are drained to EOF before the exit status is interpreted, so a full pipe
    /// can never deadlock the child or truncate its output.
    pub async fn generate_report(&self, request: &ReportRequest) -> Result<Vec<u8>, ReportError> {
        if request.conversation.is_empty() {
            return Err(ReportError::InvalidInput);
        }

        let payload = serde_json::to_vec(request).map_err(|e| ReportError::Internal {
            details: format!("failed to serialize report request: {}", e),
        })?;

        debug!(
            turns = request.conversation.len(),
            payload_bytes = payload.len(),
            "invoking report generator"
        );

        match tokio::time::timeout(self.config.timeout, self.run_generator(&payload)).await {
            Ok(result) => result,
            Err(_) => {
                // The run_generator future was dropped; kill_on_drop reaps the child.
                warn!(
                    timeout_secs = self.config.timeout.as_secs(),
                    "report generator timed out"
                );
                Err(ReportError::Timeout {
                    secs: self.config.timeout.as_secs(),
                })
            }
        }
    }

    async fn run_generator(&self, payload: &[u8]) -> Result<Vec<u8>, ReportError> {
        let mut child = Command::new(&self.config.command)
            .args(&self.config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ReportError::ProcessFailure {
                details: format!("failed to spawn {}: {}", self.config.command, e),
            })?;

        let mut stdin = child.stdin.take().ok_or_else(|| ReportError::Internal {
            details: "generator stdin was not captured".to_string(),
        })?;

        // Feed stdin concurrently with draining the output pipes, then drop the
        // handle so the generator sees EOF.
        let feed = async move {
            stdin.write_all(payload).await?;
            stdin.shutdown().await?;
            drop(stdin);
            Ok::<(), std::io::Error>(())
        };

        let (fed, output) = tokio::join!(feed, child.wait_with_output());

        let output = output.map_err(|e| ReportError::ProcessFailure {
            details: format!("failed to collect generator output: {}", e),
        })?;

        if let Err(e) = fed {
            // A generator that exits before reading all input breaks the pipe;
            // its exit status decides the outcome in that case.
            if e.kind() != ErrorKind::BrokenPipe {
                return Err(ReportError::ProcessFailure {
                    details: format!("failed to write conversation to generator stdin: {}", e),
                });
            }
        }

        if output.status.success() {
            info!(pdf_bytes = output.stdout.len(), "report generated");
            Ok(output.stdout)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let details = if stderr.is_empty() {
                "No error output".to_string()
            } else {
                stderr
            };
            warn!(status = ?output.status.code(), "report generator failed");
            Err(ReportError::ProcessFailure { details })
        }
    }
}
