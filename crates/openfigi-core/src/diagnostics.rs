//! Pluggable sink for per-call diagnostic records.
//!
//! Every mapping call produces exactly one [`Diagnostic`]: at `ERROR` level
//! when the call fails after validation, at `DEBUG` level when it succeeds.
//! The client discards them unless a sink is configured.

use std::sync::Arc;

use tracing::Level;

/// What happened during one HTTP exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostic {
    /// Short description of the outcome.
    pub message: &'static str,
    /// Full request URL.
    pub path: String,
    pub method: String,
    /// Serialized request body, empty if encoding failed.
    pub body: String,
    /// HTTP status, if a response was received.
    pub status: Option<u16>,
    /// Raw response body, if one was read.
    pub response: Option<String>,
    /// Error text for failed calls.
    pub error: Option<String>,
}

/// Receives diagnostic records.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, level: Level, diagnostic: &Diagnostic);
}

/// Shared sink handle.
pub type DynDiagnosticSink = Arc<dyn DiagnosticSink>;

/// Drops every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSink;

impl DiagnosticSink for DiscardSink {
    fn record(&self, _level: Level, _diagnostic: &Diagnostic) {}
}

/// Forwards records as structured `tracing` events under the `openfigi` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

macro_rules! emit {
    ($mac:ident, $d:ident) => {
        tracing::$mac!(
            target: "openfigi",
            path = %$d.path,
            method = %$d.method,
            body = %$d.body,
            status = ?$d.status,
            resp = ?$d.response,
            err = ?$d.error,
            "{}",
            $d.message
        )
    };
}

impl DiagnosticSink for TracingSink {
    fn record(&self, level: Level, diagnostic: &Diagnostic) {
        match level {
            Level::ERROR => emit!(error, diagnostic),
            Level::WARN => emit!(warn, diagnostic),
            Level::INFO => emit!(info, diagnostic),
            Level::DEBUG => emit!(debug, diagnostic),
            _ => emit!(trace, diagnostic),
        }
    }
}
