//! Watch command: regenerate on manifest changes.

use std::path::Path;

use anyhow::{Context, Result};
use vuewrap_output::{FileWatcher, ProxyGenerator, WatchEvent};

use crate::config::load_config;

/// Run an initial build, then rebuild whenever the manifest changes.
pub async fn run(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?.into_output_config(None, None);
    let manifest = config.manifest.clone();
    let generator = ProxyGenerator::new(config);

    rebuild(&generator);

    let (_watcher, mut rx) = FileWatcher::new(&manifest)
        .with_context(|| format!("Failed to watch {}", manifest.display()))?;

    tracing::info!("Watching {} for changes", manifest.display());

    while let Some(event) = rx.recv().await {
        match event {
            WatchEvent::Changed(path) => {
                tracing::info!("Manifest changed: {}", path.display());
                rebuild(&generator);
            }
            WatchEvent::Removed(path) => {
                tracing::warn!("Manifest removed: {}", path.display());
            }
        }
    }

    Ok(())
}

/// Build once, logging failures instead of stopping the watch loop.
fn rebuild(generator: &ProxyGenerator) {
    match generator.build() {
        Ok(result) => tracing::info!(
            "Generated {} wrappers in {}ms",
            result.components,
            result.duration_ms
        ),
        Err(e) => tracing::error!("Build failed: {}", e),
    }
}
