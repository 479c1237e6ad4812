//! Port for structured invocation logging.
//!
//! Records each tool call and its outcome as a machine-readable event. This
//! is separate from `tracing`: tracing carries diagnostics for humans, this
//! port carries an audit trail (JSONL). Secret arguments must already be
//! redacted when an event is built.

use serde_json::Value;

/// A structured invocation event.
pub struct InvocationEvent {
    /// Event type identifier ("tool_call", "tool_result").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl InvocationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging invocation events.
///
/// `log` is synchronous and infallible; logging failures are ignored.
pub trait InvocationLogger: Send + Sync {
    fn log(&self, event: InvocationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoInvocationLogger;

impl InvocationLogger for NoInvocationLogger {
    fn log(&self, _event: InvocationEvent) {}
}
