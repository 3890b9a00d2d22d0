//! Manifest parsing and loading.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use walkdir::WalkDir;

use vuewrap_codegen::ComponentMetadata;

use crate::format::ManifestFormat;
use crate::tag::is_valid_tag;

/// A parsed manifest: the components of one element library.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub components: Vec<ComponentMetadata>,
}

impl Manifest {
    /// Check tags are valid, unique, and map to distinct class names.
    fn validate(&self) -> Result<(), ManifestError> {
        let mut seen = HashSet::new();
        let mut class_names: HashMap<String, &str> = HashMap::new();
        for component in &self.components {
            if !is_valid_tag(&component.tag) {
                return Err(ManifestError::InvalidTag(component.tag.clone()));
            }
            if !seen.insert(component.tag.as_str()) {
                return Err(ManifestError::DuplicateTag(component.tag.clone()));
            }
            // `my-el-2` and `my-el2` both become `MyEl2`
            if let Some(first) = class_names.insert(component.class_name(), &component.tag) {
                return Err(ManifestError::ClassNameCollision {
                    first: first.to_string(),
                    second: component.tag.clone(),
                    class_name: component.class_name(),
                });
            }
        }
        Ok(())
    }
}

/// Parse manifest source text in the given format.
pub fn parse_manifest(source: &str, format: ManifestFormat) -> Result<Manifest, ManifestError> {
    let manifest: Manifest = match format {
        ManifestFormat::Json => serde_json::from_str(source)
            .map_err(|e| ManifestError::InvalidJson(e.to_string()))?,
        ManifestFormat::Yaml => serde_yaml::from_str(source)
            .map_err(|e| ManifestError::InvalidYaml(e.to_string()))?,
    };

    manifest.validate()?;
    Ok(manifest)
}

/// Load a single manifest file, detecting the format from its extension.
pub fn load_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    let format = ManifestFormat::from_path(path)
        .ok_or_else(|| ManifestError::UnsupportedFormat(path.display().to_string()))?;

    let source = fs::read_to_string(path).map_err(|e| ManifestError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let manifest = parse_manifest(&source, format)?;
    tracing::debug!(
        "Loaded {} components from {}",
        manifest.components.len(),
        path.display()
    );
    Ok(manifest)
}

/// Load a manifest file, or every manifest under a directory.
///
/// Directory entries are read in path order; files with other extensions
/// are skipped. Tags must be unique across all files.
pub fn load_manifests(path: &Path) -> Result<Manifest, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::Io {
            path: path.display().to_string(),
            message: "not found".to_string(),
        });
    }

    if path.is_file() {
        return load_manifest(path);
    }

    let mut files: Vec<_> = WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && ManifestFormat::from_path(p).is_some())
        .collect();
    files.sort();

    let mut merged = Manifest::default();
    for file in files {
        merged.components.extend(load_manifest(&file)?.components);
    }

    merged.validate()?;
    Ok(merged)
}

/// Errors that can occur while loading manifests.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to read manifest {path}: {message}")]
    Io { path: String, message: String },

    #[error("Invalid JSON in manifest: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML in manifest: {0}")]
    InvalidYaml(String),

    #[error("Unsupported manifest format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error("Invalid custom element tag: {0}")]
    InvalidTag(String),

    #[error("Duplicate component tag: {0}")]
    DuplicateTag(String),

    #[error("Tags <{first}> and <{second}> both generate class {class_name}")]
    ClassNameCollision {
        first: String,
        second: String,
        class_name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    const JSON: &str = r#"{
  "components": [
    {
      "tag": "my-button",
      "props": [{ "name": "disabled", "type": "boolean" }],
      "events": [{ "name": "btnClick" }],
      "methods": [{ "name": "focus" }]
    }
  ]
}"#;

    const YAML: &str = r#"
components:
  - tagName: my-input
    properties:
      - name: value
        type: string
      - name: data
    events:
      - name: valueChange
"#;

    #[test]
    fn parses_json_manifest() {
        let manifest = parse_manifest(JSON, ManifestFormat::Json).unwrap();

        assert_eq!(
            manifest.components,
            vec![ComponentMetadata::new("my-button")
                .with_prop("disabled", "boolean")
                .with_event("btnClick")
                .with_method("focus")]
        );
    }

    #[test]
    fn parses_yaml_manifest() {
        let manifest = parse_manifest(YAML, ManifestFormat::Yaml).unwrap();
        let component = &manifest.components[0];

        assert_eq!(component.tag, "my-input");
        assert_eq!(component.props[1].ty, "unknown");
        assert_eq!(component.events[0].name, "valueChange");
    }

    #[test]
    fn errors_on_invalid_json() {
        let result = parse_manifest("{ components: [", ManifestFormat::Json);

        assert!(matches!(result, Err(ManifestError::InvalidJson(_))));
    }

    #[test]
    fn errors_on_invalid_yaml() {
        let result = parse_manifest("components: [invalid", ManifestFormat::Yaml);

        assert!(matches!(result, Err(ManifestError::InvalidYaml(_))));
    }

    #[test]
    fn errors_on_invalid_tag() {
        let source = r#"{ "components": [{ "tag": "button" }] }"#;

        let result = parse_manifest(source, ManifestFormat::Json);

        assert!(matches!(result, Err(ManifestError::InvalidTag(t)) if t == "button"));
    }

    #[test]
    fn errors_on_duplicate_tag() {
        let source = r#"{ "components": [{ "tag": "my-a" }, { "tag": "my-a" }] }"#;

        let result = parse_manifest(source, ManifestFormat::Json);

        assert!(matches!(result, Err(ManifestError::DuplicateTag(t)) if t == "my-a"));
    }

    #[test]
    fn errors_on_dotted_tag() {
        let source = r#"{ "components": [{ "tag": "my-el.v2" }] }"#;

        let result = parse_manifest(source, ManifestFormat::Json);

        assert!(matches!(result, Err(ManifestError::InvalidTag(t)) if t == "my-el.v2"));
    }

    #[test]
    fn errors_on_empty_tag_segments() {
        let source = r#"{ "components": [{ "tag": "my-button" }, { "tag": "my--button" }] }"#;

        let result = parse_manifest(source, ManifestFormat::Json);

        assert!(matches!(result, Err(ManifestError::InvalidTag(t)) if t == "my--button"));
    }

    #[test]
    fn errors_on_class_name_collision() {
        let source = r#"{ "components": [{ "tag": "my-el-2" }, { "tag": "my-el2" }] }"#;

        let result = parse_manifest(source, ManifestFormat::Json);

        match result {
            Err(ManifestError::ClassNameCollision {
                first,
                second,
                class_name,
            }) => {
                assert_eq!(first, "my-el-2");
                assert_eq!(second, "my-el2");
                assert_eq!(class_name, "MyEl2");
            }
            other => panic!("expected class name collision, got {:?}", other),
        }
    }

    #[test]
    fn rejects_collisions_across_files() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("a.json"),
            r#"{ "components": [{ "tag": "x-tab-1" }] }"#,
        )
        .unwrap();
        fs::write(
            temp.path().join("b.yaml"),
            "components:\n  - tag: x-tab1\n",
        )
        .unwrap();

        let result = load_manifests(temp.path());

        assert!(matches!(result, Err(ManifestError::ClassNameCollision { .. })));
    }

    #[test]
    fn loads_directory_of_manifests() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.json"), JSON).unwrap();
        fs::write(temp.path().join("b.yaml"), YAML).unwrap();
        fs::write(temp.path().join("README.md"), "# not a manifest").unwrap();

        let manifest = load_manifests(temp.path()).unwrap();
        let tags: Vec<_> = manifest.components.iter().map(|c| c.tag.as_str()).collect();

        assert_eq!(tags, vec!["my-button", "my-input"]);
    }

    #[test]
    fn rejects_duplicates_across_files() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.json"), JSON).unwrap();
        fs::write(temp.path().join("b.json"), JSON).unwrap();

        let result = load_manifests(temp.path());

        assert!(matches!(result, Err(ManifestError::DuplicateTag(_))));
    }

    #[test]
    fn errors_on_unsupported_extension() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("components.toml");
        fs::write(&path, "").unwrap();

        let result = load_manifest(&path);

        assert!(matches!(result, Err(ManifestError::UnsupportedFormat(_))));
    }

    #[test]
    fn errors_on_missing_path() {
        let temp = tempdir().unwrap();

        let result = load_manifests(&temp.path().join("missing.json"));

        assert!(matches!(result, Err(ManifestError::Io { .. })));
    }
}
