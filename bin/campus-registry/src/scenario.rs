//! ---
//! campus_section: "05-external-interfaces"
//! campus_subsection: "binary"
//! campus_type: "source"
//! campus_scope: "code"
//! campus_description: "Scripted registry session run by the demonstration binary."
//! campus_version: "v0.1.0"
//! campus_owner: "tbd"
//! ---
use std::io::Write;

use campus_common::{AppConfig, OutputFormat};
use campus_logging::{log_system_event, LogContext, SystemEventOutcome};
use campus_model::{Institution, Validate, ValidationError};
use campus_store::{Container, StoreError};
use thiserror::Error;
use tracing::debug;

use crate::seed;

/// Position read back after loading.
pub const GET_INDEX: usize = 2;
/// Position removed after the read.
pub const REMOVE_INDEX: usize = 3;

pub type Result<T> = std::result::Result<T, ScenarioError>;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to render record: {0}")]
    Render(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScenarioOptions {
    pub format: OutputFormat,
    /// Validate each record before it is added.
    pub validate: bool,
}

impl From<&AppConfig> for ScenarioOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            format: config.output.format,
            validate: config.validation.enabled,
        }
    }
}

/// Run the fixed session against `container`, reporting to `out`.
///
/// Load the seed records, print the one at [`GET_INDEX`], remove the one at
/// [`REMOVE_INDEX`], then print everything left.
pub fn run<C, W>(container: &mut C, out: &mut W, options: &ScenarioOptions) -> Result<()>
where
    C: Container<Institution>,
    W: Write,
{
    run_with(container, seed::institutions(), out, options)
}

pub fn run_with<C, W>(
    container: &mut C,
    records: Vec<Institution>,
    out: &mut W,
    options: &ScenarioOptions,
) -> Result<()>
where
    C: Container<Institution>,
    W: Write,
{
    let ctx = LogContext::new().with_operation("scenario");
    log_system_event(
        Some(&ctx),
        "scenario.start",
        "running scripted registry session",
        SystemEventOutcome::Success,
    );

    match execute(container, records, out, options) {
        Ok(()) => {
            let ctx = ctx.with_len(container.len());
            log_system_event(
                Some(&ctx),
                "scenario.complete",
                "scripted registry session finished",
                SystemEventOutcome::Success,
            );
            Ok(())
        }
        Err(err) => {
            log_system_event(
                Some(&ctx),
                "scenario.fault",
                &err.to_string(),
                SystemEventOutcome::Fault,
            );
            Err(err)
        }
    }
}

fn execute<C, W>(
    container: &mut C,
    records: Vec<Institution>,
    out: &mut W,
    options: &ScenarioOptions,
) -> Result<()>
where
    C: Container<Institution>,
    W: Write,
{
    for institution in records {
        if options.validate {
            institution.validate()?;
        }
        container.add(institution);
    }
    debug!(len = container.len(), "seed records loaded");

    let fetched = container.get(GET_INDEX)?;
    writeln!(out, "Institution 2: {}", render(fetched, options.format)?)?;

    container.remove(REMOVE_INDEX)?;
    writeln!(out, "Removed institution 3")?;

    for institution in container.get_all() {
        writeln!(out, "{}", render(institution, options.format)?)?;
    }
    Ok(())
}

fn render(institution: &Institution, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Plain => institution.to_string(),
        OutputFormat::Json => serde_json::to_string(institution)?,
    })
}
