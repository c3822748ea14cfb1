//! Interview session management
//!
//! An `InterviewSession` holds the session-scoped transcript store and the
//! single-export-in-flight guard. Sessions are created and looked up by the
//! HTTP layer; the transcript is never ambient global state.

mod session;

pub use session::{ExportGuard, InterviewSession};
