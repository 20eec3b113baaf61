//! ---
//! campus_section: "01-core-functionality"
//! campus_subsection: "module"
//! campus_type: "source"
//! campus_scope: "code"
//! campus_description: "Shared primitives and utilities for the registry runtime."
//! campus_version: "v0.1.0"
//! campus_owner: "tbd"
//! ---
//! Shared primitives for the campus registry workspace.
//! This crate exposes configuration loading and tracing bootstrap
//! consumed by the registry binary.

pub mod config;
pub mod logging;

pub use config::{
    AppConfig, LoadedAppConfig, LoggingConfig, OutputConfig, OutputFormat, ValidationConfig,
};
pub use logging::{init_tracing, LogFormat};
