//! Literals baked into generated wrappers.

/// Reserved names and formatting used by the emitters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    /// Field and `ref` name bound to the wrapped element
    pub ref_name: String,

    /// Prefix for generated event listener methods
    pub event_prefix: String,

    /// One level of indentation
    pub indent_unit: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            ref_name: "childWebComponent".to_string(),
            event_prefix: "on_".to_string(),
            indent_unit: "  ".to_string(),
        }
    }
}

impl EmitConfig {
    /// Listener method name for an event (e.g., `on_btnClick`).
    pub fn listener_name(&self, event: &str) -> String {
        format!("{}{}", self.event_prefix, event)
    }
}
