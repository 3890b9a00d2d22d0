//! Index module re-exporting every generated wrapper.

use vuewrap_codegen::{ComponentMetadata, GeneratedLines};

/// Generate `index.ts` for the given components.
///
/// When a core package is set, the index first registers the custom elements
/// through the package's loader (`<package>/<loader_dir>`, default `loader`).
pub fn generate_index(
    components: &[&ComponentMetadata],
    core_package: Option<&str>,
    loader_dir: Option<&str>,
) -> GeneratedLines {
    let mut lines = Vec::new();

    if let Some(package) = core_package {
        let loader = loader_dir.unwrap_or("loader").trim_matches('/');
        lines.push(format!(
            "import {{ defineCustomElements }} from '{}/{}';",
            package.trim_end_matches('/'),
            loader
        ));
        lines.push(String::new());
        lines.push("defineCustomElements(window);".to_string());
        lines.push(String::new());
    }

    for component in components {
        let name = component.class_name();
        lines.push(format!("export {{ default as {0} }} from './{0}';", name));
    }

    lines.push(String::new());
    GeneratedLines::new(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reexports_each_component() {
        let a = ComponentMetadata::new("my-button");
        let b = ComponentMetadata::new("my-input");

        let index = generate_index(&[&a, &b], None, None);

        assert_eq!(
            index.into_lines(),
            vec![
                "export { default as MyButton } from './MyButton';",
                "export { default as MyInput } from './MyInput';",
                "",
            ]
        );
    }

    #[test]
    fn registers_elements_through_loader() {
        let a = ComponentMetadata::new("my-button");

        let index = generate_index(&[&a], Some("my-lib"), Some("dist/loader/"));

        assert_eq!(
            index.lines()[0],
            "import { defineCustomElements } from 'my-lib/dist/loader';"
        );
        assert_eq!(index.lines()[2], "defineCustomElements(window);");
    }

    #[test]
    fn loader_defaults_to_loader_dir() {
        let index = generate_index(&[], Some("my-lib"), None);

        assert_eq!(
            index.lines()[0],
            "import { defineCustomElements } from 'my-lib/loader';"
        );
    }
}
