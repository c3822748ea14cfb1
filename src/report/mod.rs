//! Report generation bridge
//!
//! This module translates a finished transcript into a downloadable PDF by
//! delegating to an external generator process:
//! - `ReportBridge`: spawns the generator, feeds it the JSON conversation on
//!   stdin, and buffers its stdout (PDF bytes) and stderr (diagnostics)
//! - `ReportError`: the uniform failure taxonomy surfaced to HTTP callers

mod bridge;
mod error;

pub use bridge::{GeneratorConfig, ReportBridge, ReportRequest, REPORT_FILENAME};
pub use error::ReportError;
