//! ---
//! campus_section: "03-logging"
//! campus_subsection: "module"
//! campus_type: "source"
//! campus_scope: "code"
//! campus_description: "Structured logging context and convenience macros."
//! campus_version: "v0.1.0"
//! campus_owner: "tbd"
//! ---
//! Logging macros that stamp every event with the fields of a
//! [`LogContext`](crate::LogContext).

#[doc(hidden)]
#[macro_export]
macro_rules! __registry_event {
    ($level:expr, $ctx:expr, $($arg:tt)+) => {{
        let ctx = &$ctx;
        $crate::__tracing::event!(
            $level,
            store = ctx.store.unwrap_or(""),
            operation = ctx.operation.unwrap_or(""),
            index = ctx.index.unwrap_or_default(),
            len = ctx.len.unwrap_or_default(),
            message = %format_args!($($arg)+)
        );
    }};
}

/// Emit an informational log enriched with registry context.
#[macro_export]
macro_rules! registry_info {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__registry_event!($crate::__tracing::Level::INFO, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__registry_event!(
            $crate::__tracing::Level::INFO,
            $crate::LogContext::default(),
            $($arg)+
        )
    };
}

/// Emit a debug log enriched with registry context.
#[macro_export]
macro_rules! registry_debug {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__registry_event!($crate::__tracing::Level::DEBUG, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__registry_event!(
            $crate::__tracing::Level::DEBUG,
            $crate::LogContext::default(),
            $($arg)+
        )
    };
}

/// Emit a warning enriched with registry context.
#[macro_export]
macro_rules! registry_warn {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__registry_event!($crate::__tracing::Level::WARN, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__registry_event!(
            $crate::__tracing::Level::WARN,
            $crate::LogContext::default(),
            $($arg)+
        )
    };
}
