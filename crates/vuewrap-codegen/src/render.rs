//! Render function that mounts the wrapped element.

use crate::config::EmitConfig;
use crate::fragment::Fragment;
use crate::metadata::ComponentMetadata;

/// Emit the `render` function.
///
/// Every property is forwarded, including the model-bound one, and every
/// event is wired to its prefixed listener. The default slot is passed
/// through as the element's children.
pub fn define_render(component: &ComponentMetadata, config: &EmitConfig) -> Vec<Fragment> {
    let props = component
        .props
        .iter()
        .map(|prop| Fragment::line(format!("{0}: this.{0},", prop.name)));

    let native_on = component.events.iter().map(|event| {
        Fragment::line(format!(
            "{}: this.{},",
            event.name,
            config.listener_name(&event.name)
        ))
    });

    vec![
        Fragment::line("render (createElement): VNode {"),
        Fragment::block([
            Fragment::line(format!("return createElement(\"{}\",", component.tag)),
            Fragment::block([
                Fragment::line("{"),
                Fragment::block([
                    Fragment::line(format!("ref: \"{}\",", config.ref_name)),
                    Fragment::line("props: {"),
                    Fragment::block(props),
                    Fragment::line("},"),
                    Fragment::line("nativeOn: {"),
                    Fragment::block(native_on),
                    Fragment::line("}"),
                ]),
                Fragment::line("},"),
                Fragment::line("this.$slots.default"),
            ]),
            Fragment::line(");"),
        ]),
        Fragment::line("}"),
    ]
}
