//! ---
//! campus_section: "03-logging"
//! campus_subsection: "module"
//! campus_type: "source"
//! campus_scope: "code"
//! campus_description: "Structured logging context and convenience macros."
//! campus_version: "v0.1.0"
//! campus_owner: "tbd"
//! ---
#![warn(missing_docs)]

use tracing::Level;
use tracing_subscriber::{fmt as subscriber_fmt, prelude::*, EnvFilter, Registry};

pub mod macros;

#[doc(hidden)]
pub use tracing as __tracing;

/// Initialize a baseline tracing subscriber suitable for tests and tools.
///
/// Output goes to stderr so that stdout stays reserved for program output.
pub fn init() {
    let _ = Registry::default()
        .with(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(subscriber_fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Structured logging context propagated by the convenience macros.
#[derive(Debug, Default, Clone)]
pub struct LogContext<'a> {
    /// Name of the store the event refers to.
    pub store: Option<&'a str>,
    /// Container operation being performed (`add`, `remove`, ...).
    pub operation: Option<&'a str>,
    /// Index supplied to the operation, if any.
    pub index: Option<usize>,
    /// Number of elements held when the event was emitted.
    pub len: Option<usize>,
}

impl<'a> LogContext<'a> {
    /// Create an empty logging context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a store name.
    pub fn with_store(mut self, store: &'a str) -> Self {
        self.store = Some(store);
        self
    }

    /// Attach an operation name.
    pub fn with_operation(mut self, operation: &'a str) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Attach the index an operation was called with.
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Attach the current element count.
    pub fn with_len(mut self, len: usize) -> Self {
        self.len = Some(len);
        self
    }
}

/// High-level outcome used when emitting lifecycle log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemEventOutcome {
    /// The operation completed successfully.
    Success,
    /// The operation failed or was aborted.
    Fault,
}

impl SystemEventOutcome {
    /// Stable lowercase label recorded in the `outcome` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemEventOutcome::Success => "success",
            SystemEventOutcome::Fault => "fault",
        }
    }
}

/// Emit a standardized system event with a success/fault outcome.
///
/// Successes are recorded at `INFO`, faults at `ERROR`.
pub fn log_system_event(
    context: Option<&LogContext>,
    event: &str,
    message: &str,
    outcome: SystemEventOutcome,
) {
    let default_ctx = LogContext::default();
    let ctx = context.unwrap_or(&default_ctx);
    match outcome {
        SystemEventOutcome::Success => tracing::info!(
            event = %event,
            outcome = outcome.as_str(),
            store = ctx.store.unwrap_or(""),
            operation = ctx.operation.unwrap_or(""),
            len = ctx.len.unwrap_or_default(),
            message = %message
        ),
        SystemEventOutcome::Fault => tracing::error!(
            event = %event,
            outcome = outcome.as_str(),
            store = ctx.store.unwrap_or(""),
            operation = ctx.operation.unwrap_or(""),
            len = ctx.len.unwrap_or_default(),
            message = %message
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macros_emit_without_panic() {
        init();
        let ctx = LogContext::new()
            .with_store("institutions")
            .with_operation("get")
            .with_index(2);
        registry_info!(context = ctx.clone(), "lookup served");
        registry_debug!("debug message");
        registry_warn!(context = ctx, "index {} out of range", 7);
    }

    #[test]
    fn builder_attaches_fields() {
        let ctx = LogContext::new()
            .with_store("institutions")
            .with_operation("remove")
            .with_index(3)
            .with_len(5);
        assert_eq!(ctx.store, Some("institutions"));
        assert_eq!(ctx.operation, Some("remove"));
        assert_eq!(ctx.index, Some(3));
        assert_eq!(ctx.len, Some(5));
    }

    #[test]
    fn system_event_helper_emits() {
        init();
        let ctx = LogContext::new().with_store("institutions");
        log_system_event(
            Some(&ctx),
            "test.event",
            "system event helper executed",
            SystemEventOutcome::Success,
        );
        log_system_event(
            None,
            "test.event",
            "system event helper fault",
            SystemEventOutcome::Fault,
        );
    }

    #[test]
    fn outcome_labels_are_stable() {
        assert_eq!(SystemEventOutcome::Success.as_str(), "success");
        assert_eq!(SystemEventOutcome::Fault.as_str(), "fault");
    }
}
