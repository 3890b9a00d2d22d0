//! vuewrap.toml configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use vuewrap_codegen::{EmitConfig, ModelConfig};
use vuewrap_output::OutputConfig;

/// Configuration file structure (vuewrap.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub components: ComponentsConfig,
    /// Two-way binding per tag
    #[serde(default)]
    pub models: BTreeMap<String, ModelConfig>,
}

#[derive(Debug, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_output_dir")]
    pub dir: String,
    #[serde(default = "default_true")]
    pub index: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            index: true,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ComponentsConfig {
    #[serde(default = "default_manifest")]
    pub manifest: String,
    pub core_package: Option<String>,
    pub loader_dir: Option<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ComponentsConfig {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            core_package: None,
            loader_dir: None,
            exclude: vec![],
        }
    }
}

fn default_output_dir() -> String {
    "src/components".to_string()
}
fn default_manifest() -> String {
    "components.json".to_string()
}
fn default_true() -> bool {
    true
}

impl ConfigFile {
    /// Convert into generator configuration, applying CLI overrides.
    pub fn into_output_config(self, output: Option<PathBuf>, index: Option<bool>) -> OutputConfig {
        OutputConfig {
            manifest: PathBuf::from(self.components.manifest),
            output_dir: output.unwrap_or_else(|| PathBuf::from(self.output.dir)),
            component_core_package: self.components.core_package,
            loader_dir: self.components.loader_dir,
            exclude_components: self.components.exclude,
            model_config: self.models,
            emit_index: index.unwrap_or(self.output.index),
            emit: EmitConfig::default(),
        }
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    tracing::debug!("No config at {}, using defaults", path.display());
    Ok(ConfigFile::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_full_config() {
        let config: ConfigFile = toml::from_str(
            r#"
[output]
dir = "generated"
index = false

[components]
manifest = "dist/components.json"
core_package = "my-lib"
exclude = ["my-internal"]

[models.my-input]
prop = "value"
event = "valueChange"
"#,
        )
        .unwrap();

        let output = config.into_output_config(None, None);

        assert_eq!(output.output_dir, PathBuf::from("generated"));
        assert_eq!(output.manifest, PathBuf::from("dist/components.json"));
        assert!(!output.emit_index);
        assert_eq!(output.component_core_package.as_deref(), Some("my-lib"));
        assert_eq!(output.exclude_components, vec!["my-internal".to_string()]);
        assert_eq!(
            output.model_config.get("my-input"),
            Some(&ModelConfig::new("value", "valueChange"))
        );
    }

    #[test]
    fn cli_overrides_win() {
        let output = ConfigFile::default()
            .into_output_config(Some(PathBuf::from("out")), Some(false));

        assert_eq!(output.output_dir, PathBuf::from("out"));
        assert!(!output.emit_index);
    }

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();

        let config = load_config(&temp.path().join("vuewrap.toml")).unwrap();

        assert_eq!(config.output.dir, "src/components");
        assert!(config.output.index);
        assert_eq!(config.components.manifest, "components.json");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("vuewrap.toml");
        fs::write(&path, "[output\ndir = ").unwrap();

        assert!(load_config(&path).is_err());
    }
}
