//! Element handle and method delegation.

use crate::config::EmitConfig;
use crate::fragment::Fragment;
use crate::metadata::Method;
use crate::naming::element_interface;

/// Emit the `@Ref` field bound to the wrapped element.
pub fn define_ref(tag: &str, config: &EmitConfig) -> Vec<Fragment> {
    vec![Fragment::line(format!(
        "@Ref() readonly {}!: {}",
        config.ref_name,
        element_interface(tag)
    ))]
}

/// Emit one getter per method, returning the element's member unchanged.
pub fn define_methods<'a>(
    methods: impl IntoIterator<Item = &'a Method>,
    config: &EmitConfig,
) -> Vec<Fragment> {
    methods
        .into_iter()
        .map(|method| {
            Fragment::line(format!(
                "get {name}() {{ return this.$refs[\"{r}\"].{name} }}",
                name = method.name,
                r = config.ref_name
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::flatten;
    use pretty_assertions::assert_eq;

    #[test]
    fn ref_is_typed_by_element_interface() {
        let config = EmitConfig::default();

        assert_eq!(
            flatten(&define_ref("my-button", &config), "  "),
            vec!["@Ref() readonly childWebComponent!: HTMLMyButtonElement"]
        );
    }

    #[test]
    fn methods_delegate_through_ref() {
        let config = EmitConfig {
            ref_name: "el".to_string(),
            ..Default::default()
        };
        let methods = [Method::new("focus"), Method::new("setOpen")];

        assert_eq!(
            flatten(&define_methods(&methods, &config), "  "),
            vec![
                r#"get focus() { return this.$refs["el"].focus }"#,
                r#"get setOpen() { return this.$refs["el"].setOpen }"#,
            ]
        );
    }
}
