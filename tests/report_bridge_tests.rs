// Integration tests for the report bridge
//
// These tests drive the bridge against real child processes (sh/cat stand-ins
// for the Python generator) to verify the process contract: JSON on stdin,
// PDF bytes on stdout, diagnostics on stderr, exit code semantics.

use anyhow::Result;
use interview_report::{
    ConversationTurn, GeneratorConfig, ReportBridge, ReportError, ReportRequest, Role,
};
use std::time::{Duration, Instant};

/// Bridge that runs an inline shell script as its generator
fn sh_bridge(script: &str) -> ReportBridge {
    ReportBridge::new(GeneratorConfig {
        command: "sh".to_string(),
        args: vec!["-c".to_string(), script.to_string()],
        timeout: Duration::from_secs(5),
    })
}

fn sample_request() -> ReportRequest {
    ReportRequest {
        conversation: vec![
            ConversationTurn {
                role: Role::User,
                content: "Hello".to_string(),
            },
            ConversationTurn {
                role: Role::Assistant,
                content: "Hi there".to_string(),
            },
        ],
    }
}

#[tokio::test]
async fn test_exit_zero_returns_stdout_bytes() -> Result<()> {
    let bridge = sh_bridge("cat >/dev/null; printf '%%PDF-1.4 fake-report'");

    let pdf = bridge.generate_report(&sample_request()).await.unwrap();

    assert_eq!(pdf, b"%PDF-1.4 fake-report");
    Ok(())
}

#[tokio::test]
async fn test_request_is_fed_to_generator_stdin() -> Result<()> {
    // A generator that echoes stdin shows exactly what the bridge sent
    let bridge = sh_bridge("cat");
    let request = sample_request();

    let echoed = bridge.generate_report(&request).await.unwrap();

    assert_eq!(echoed, serde_json::to_vec(&request)?);
    Ok(())
}

#[tokio::test]
async fn test_nonzero_exit_surfaces_stderr() {
    let bridge = sh_bridge("cat >/dev/null; printf 'Traceback: KeyError' >&2; exit 1");

    let err = bridge.generate_report(&sample_request()).await.unwrap_err();

    match err {
        ReportError::ProcessFailure { details } => assert_eq!(details, "Traceback: KeyError"),
        other => panic!("expected ProcessFailure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_nonzero_exit_with_silent_stderr_uses_placeholder() {
    let bridge = sh_bridge("cat >/dev/null; exit 3");

    let err = bridge.generate_report(&sample_request()).await.unwrap_err();

    match err {
        ReportError::ProcessFailure { details } => assert_eq!(details, "No error output"),
        other => panic!("expected ProcessFailure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_partial_output_is_never_returned_on_failure() {
    // Generator writes some stdout before failing; caller must see only an error
    let bridge = sh_bridge("cat >/dev/null; printf 'partial'; exit 1");

    let result = bridge.generate_report(&sample_request()).await;

    assert!(matches!(result, Err(ReportError::ProcessFailure { .. })));
}

#[tokio::test]
async fn test_empty_conversation_rejected_without_spawning() -> Result<()> {
    let dir = tempfile::TempDir::new()?;
    let marker = dir.path().join("spawned");
    let bridge = sh_bridge(&format!("touch {}", marker.display()));

    let err = bridge
        .generate_report(&ReportRequest {
            conversation: vec![],
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ReportError::InvalidInput));
    assert!(!marker.exists(), "no generator process may be spawned");
    Ok(())
}

#[tokio::test]
async fn test_missing_generator_is_a_process_failure() {
    let bridge = ReportBridge::new(GeneratorConfig {
        command: "/nonexistent/report-generator".to_string(),
        args: vec![],
        timeout: Duration::from_secs(5),
    });

    let err = bridge.generate_report(&sample_request()).await.unwrap_err();

    match err {
        ReportError::ProcessFailure { details } => assert!(details.contains("failed to spawn")),
        other => panic!("expected ProcessFailure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_hanging_generator_times_out() {
    let bridge = ReportBridge::new(GeneratorConfig {
        command: "sleep".to_string(),
        args: vec!["30".to_string()],
        timeout: Duration::from_millis(200),
    });

    let started = Instant::now();
    let err = bridge.generate_report(&sample_request()).await.unwrap_err();

    assert!(matches!(err, ReportError::Timeout { .. }));
    assert!(
        started.elapsed() < Duration::from_secs(5),
        "timeout must not wait for the child's own schedule"
    );
}

#[tokio::test]
async fn test_concurrent_calls_do_not_cross_contaminate() -> Result<()> {
    // Each call echoes its own stdin; responses must match their own payloads
    let bridge = sh_bridge("cat");

    let first = ReportRequest {
        conversation: vec![ConversationTurn {
            role: Role::User,
            content: "payload one".to_string(),
        }],
    };
    let second = ReportRequest {
        conversation: vec![ConversationTurn {
            role: Role::Assistant,
            content: "payload two".to_string(),
        }],
    };

    let (a, b) = tokio::join!(
        bridge.generate_report(&first),
        bridge.generate_report(&second)
    );

    assert_eq!(a.unwrap(), serde_json::to_vec(&first)?);
    assert_eq!(b.unwrap(), serde_json::to_vec(&second)?);
    Ok(())
}

#[tokio::test]
async fn test_large_output_is_drained_completely() -> Result<()> {
    // Well past the 64KiB pipe buffer; a bridge that interprets the exit
    // status before draining stdout would truncate or deadlock here
    let bridge = sh_bridge("cat >/dev/null; yes 0123456789abcdef | head -c 1048576");

    let pdf = bridge.generate_report(&sample_request()).await.unwrap();

    assert_eq!(pdf.len(), 1_048_576);
    Ok(())
}
