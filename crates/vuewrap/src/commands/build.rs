//! Wrapper generation command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use vuewrap_output::ProxyGenerator;

use crate::config::load_config;

/// Run the build command.
pub fn run(config_path: &Path, output: Option<PathBuf>, index: Option<bool>) -> Result<()> {
    tracing::info!("Generating Vue wrappers...");

    let config = load_config(config_path)?.into_output_config(output, index);
    let result = ProxyGenerator::new(config).build()?;

    tracing::info!(
        "Generated {} wrappers ({} excluded) in {}ms",
        result.components,
        result.excluded,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
