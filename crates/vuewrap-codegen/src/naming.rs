//! Name and indentation transforms shared by every emitter.

/// Convert kebab-case to PascalCase.
///
/// Only `-` separates segments, so a string that is already PascalCase comes
/// back unchanged.
pub fn to_pascal_case(s: &str) -> String {
    s.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Prefix every line with one indentation unit.
pub fn indent<I, S>(lines: I, unit: &str) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| format!("{}{}", unit, line.as_ref()))
        .collect()
}

/// Name of the DOM interface generated for a tag (e.g., `HTMLMyButtonElement`).
pub fn element_interface(tag: &str) -> String {
    format!("HTML{}Element", to_pascal_case(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_pascal_case_works() {
        assert_eq!(to_pascal_case("my-button"), "MyButton");
        assert_eq!(to_pascal_case("ion-select-option"), "IonSelectOption");
        assert_eq!(to_pascal_case("simple"), "Simple");
        assert_eq!(to_pascal_case("boolean"), "Boolean");
    }

    #[test]
    fn to_pascal_case_is_idempotent() {
        for tag in ["my-button", "x-a-b-c", "ion-item"] {
            let once = to_pascal_case(tag);
            assert_eq!(to_pascal_case(&once), once);
        }
    }

    #[test]
    fn distinct_tags_keep_distinct_names() {
        assert_ne!(to_pascal_case("my-button"), to_pascal_case("mybutton"));
        assert_ne!(
            element_interface("my-button"),
            element_interface("my-buttons")
        );
    }

    #[test]
    fn element_interface_wraps_class_name() {
        assert_eq!(element_interface("my-button"), "HTMLMyButtonElement");
    }

    #[test]
    fn indent_preserves_order_and_count() {
        let lines = indent(["a", "b", ""], "  ");
        assert_eq!(lines, vec!["  a", "  b", "  "]);
    }

    #[test]
    fn indent_empty_is_empty() {
        assert!(indent(Vec::<String>::new(), "  ").is_empty());
    }
}
