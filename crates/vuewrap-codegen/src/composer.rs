//! Assembles emitter output into a complete wrapper module.

use crate::config::EmitConfig;
use crate::events::define_events;
use crate::fragment::{flatten, Fragment, GeneratedLines};
use crate::methods::{define_methods, define_ref};
use crate::metadata::{ComponentMetadata, ModelConfig, ResolvedModel};
use crate::model::define_model;
use crate::props::define_props;
use crate::render::define_render;

/// Generates Vue wrapper classes for custom elements.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    config: EmitConfig,
}

impl Composer {
    /// Create a composer with the given literals.
    pub fn new(config: EmitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmitConfig {
        &self.config
    }

    /// Generate the wrapper module for one component.
    ///
    /// A model config that does not resolve contributes nothing and excludes
    /// no property.
    pub fn generate(
        &self,
        component: &ComponentMetadata,
        model: Option<&ModelConfig>,
    ) -> GeneratedLines {
        self.generate_resolved(component, model.and_then(|m| m.resolve(component)))
    }

    /// Generate with a model already resolved against `component`.
    pub fn generate_resolved(
        &self,
        component: &ComponentMetadata,
        resolved: Option<ResolvedModel<'_>>,
    ) -> GeneratedLines {
        let model_prop = resolved.map(|m| m.prop.name.as_str());

        let model_decl = define_model(resolved);
        let props = define_props(
            component
                .props
                .iter()
                .filter(|p| Some(p.name.as_str()) != model_prop),
        );

        let mut decorators = vec!["Vue", "Component", "Ref"];
        if !props.is_empty() {
            decorators.push("Prop");
        }
        if !model_decl.is_empty() {
            decorators.push("Model");
        }

        let mut body = model_decl;
        body.extend(define_ref(&component.tag, &self.config));
        body.extend(props);
        body.extend(define_methods(&component.methods, &self.config));
        body.extend(define_events(&component.events, &self.config));
        body.extend(define_render(component, &self.config));

        let module = vec![
            Fragment::line("import { VNode } from \"vue\";"),
            Fragment::line(format!(
                "import {{ {} }} from 'vue-property-decorator';",
                decorators.join(", ")
            )),
            Fragment::line(""),
            Fragment::line("@Component"),
            Fragment::line(format!(
                "export default class {} extends Vue {{",
                component.class_name()
            )),
            Fragment::Block(body),
            Fragment::line("};"),
            Fragment::line(""),
        ];

        GeneratedLines::new(flatten(&module, &self.config.indent_unit))
    }
}

/// Generate a wrapper with the default literals.
pub fn generate_component(
    component: &ComponentMetadata,
    model: Option<&ModelConfig>,
) -> GeneratedLines {
    Composer::default().generate(component, model)
}
