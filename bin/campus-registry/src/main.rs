//! ---
//! campus_section: "05-external-interfaces"
//! campus_subsection: "binary"
//! campus_type: "source"
//! campus_scope: "code"
//! campus_description: "Entry point running the scripted institution registry session."
//! campus_version: "v0.1.0"
//! campus_owner: "tbd"
//! ---
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use campus_common::{init_tracing, AppConfig, LoadedAppConfig};
use campus_store::InstitutionStore;
use clap::Parser;
use tracing::debug;

mod scenario;
mod seed;

use scenario::ScenarioOptions;

const SERVICE_NAME: &str = "campus-registry";
const CONFIG_CANDIDATES: [&str; 2] = ["campus-registry.toml", "configs/campus-registry.toml"];

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Loads a fixed set of institutions and prints a get/remove/list session",
    long_about = None
)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "PATH",
        help = "Configuration file (overrides CAMPUS_REGISTRY_CONFIG and the default locations)"
    )]
    config: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> Result<LoadedAppConfig> {
    match &cli.config {
        Some(path) => Ok(LoadedAppConfig {
            config: AppConfig::from_path(path)?,
            source: Some(path.clone()),
        }),
        None => AppConfig::load_with_source(&CONFIG_CANDIDATES),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loaded = load_config(&cli)?;
    init_tracing(SERVICE_NAME, &loaded.config.logging)?;
    debug!(source = ?loaded.source, "configuration resolved");

    let mut store = InstitutionStore::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    scenario::run(&mut store, &mut out, &ScenarioOptions::from(&loaded.config))
        .context("registry session aborted")?;
    out.flush()?;
    Ok(())
}
