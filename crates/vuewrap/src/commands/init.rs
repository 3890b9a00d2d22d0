//! Create a default vuewrap.toml.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());
    tracing::info!("Run 'vuewrap build' to generate wrappers.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# vuewrap configuration

[output]
# Directory for generated wrapper modules
dir = "src/components"

# Write index.ts re-exporting every wrapper
index = true

[components]
# Manifest file, or a directory of .json/.yaml manifests
manifest = "components.json"

# Package providing the custom elements; enables loader registration in index.ts
# core_package = "my-component-library"
# loader_dir = "loader"

# Tags that should not get a wrapper
exclude = []

# Two-way binding (v-model) per tag
# [models.my-input]
# prop = "value"
# event = "valueChange"
"#;
