//! Wrapper generation over a whole manifest.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use vuewrap_codegen::{ComponentMetadata, Composer, EmitConfig, ModelConfig, ResolvedModel};
use vuewrap_manifest::{load_manifests, ManifestError};

use crate::index::generate_index;

/// Configuration for generating wrappers.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Manifest file or directory of manifests
    pub manifest: PathBuf,

    /// Directory the wrapper modules are written to
    pub output_dir: PathBuf,

    /// Package that provides the custom elements (for the loader import)
    pub component_core_package: Option<String>,

    /// Loader path inside the core package
    pub loader_dir: Option<String>,

    /// Tags that get no wrapper
    pub exclude_components: Vec<String>,

    /// Two-way binding configuration by tag
    pub model_config: BTreeMap<String, ModelConfig>,

    /// Write an `index.ts` re-exporting every wrapper
    pub emit_index: bool,

    /// Literals used in generated code
    pub emit: EmitConfig,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from("components.json"),
            output_dir: PathBuf::from("src/components"),
            component_core_package: None,
            loader_dir: None,
            exclude_components: vec![],
            model_config: BTreeMap::new(),
            emit_index: true,
            emit: EmitConfig::default(),
        }
    }
}

/// A generated module ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the output directory
    pub file_name: String,

    /// Module source
    pub contents: String,
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of wrappers generated
    pub components: usize,

    /// Number of components skipped by `exclude_components`
    pub excluded: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Generates wrapper modules from component metadata.
pub struct ProxyGenerator {
    config: OutputConfig,
    composer: Composer,
}

impl ProxyGenerator {
    /// Create a new generator.
    pub fn new(config: OutputConfig) -> Self {
        let composer = Composer::new(config.emit.clone());
        Self { config, composer }
    }

    pub fn config(&self) -> &OutputConfig {
        &self.config
    }

    /// Whether a tag is listed in `exclude_components`.
    pub fn is_excluded(&self, tag: &str) -> bool {
        self.config.exclude_components.iter().any(|t| t == tag)
    }

    /// Resolved model for a component, if one is configured and matches.
    ///
    /// A configured model that names a missing property or event is dropped
    /// with a warning and the component is generated without one.
    fn model_for<'a>(&self, component: &'a ComponentMetadata) -> Option<ResolvedModel<'a>> {
        let model = self.config.model_config.get(&component.tag)?;
        let resolved = model.resolve(component);
        if resolved.is_none() {
            tracing::warn!(
                "Model config for <{}> does not match its metadata (prop '{}', event '{}'); generating without v-model",
                component.tag,
                model.prop,
                model.event
            );
        }
        resolved
    }

    /// Generate every wrapper module, plus the index if enabled.
    ///
    /// Output is sorted by tag name.
    pub fn generate_all(&self, components: &[ComponentMetadata]) -> Vec<GeneratedFile> {
        let mut included: Vec<&ComponentMetadata> = components
            .iter()
            .filter(|c| {
                let excluded = self.is_excluded(&c.tag);
                if excluded {
                    tracing::debug!("Skipping excluded component <{}>", c.tag);
                }
                !excluded
            })
            .collect();
        included.sort_by(|a, b| a.tag.cmp(&b.tag));

        let mut files: Vec<GeneratedFile> = included
            .par_iter()
            .map(|component| {
                let lines = self
                    .composer
                    .generate_resolved(component, self.model_for(component));
                GeneratedFile {
                    file_name: format!("{}.ts", component.class_name()),
                    contents: lines.to_source(),
                }
            })
            .collect();

        if self.config.emit_index {
            let index = generate_index(
                &included,
                self.config.component_core_package.as_deref(),
                self.config.loader_dir.as_deref(),
            );
            files.push(GeneratedFile {
                file_name: "index.ts".to_string(),
                contents: index.to_source(),
            });
        }

        files
    }

    /// Load the manifest, generate all wrappers, and write them to disk.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let manifest = load_manifests(&self.config.manifest)?;
        let total = manifest.components.len();
        let excluded = manifest
            .components
            .iter()
            .filter(|c| self.is_excluded(&c.tag))
            .count();

        let files = self.generate_all(&manifest.components);
        write_files(&self.config.output_dir, &files)?;

        Ok(BuildResult {
            components: total - excluded,
            excluded,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }
}

/// Write generated files under `output_dir`, creating it if needed.
pub fn write_files(output_dir: &Path, files: &[GeneratedFile]) -> Result<(), BuildError> {
    fs::create_dir_all(output_dir)
        .map_err(|e| BuildError::WriteError(format!("{}: {}", output_dir.display(), e)))?;

    for file in files {
        let path = output_dir.join(&file.file_name);
        fs::write(&path, &file.contents)
            .map_err(|e| BuildError::WriteError(format!("{}: {}", path.display(), e)))?;
        tracing::debug!("Wrote {}", path.display());
    }

    Ok(())
}
