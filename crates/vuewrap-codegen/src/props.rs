//! One-way `@Prop` declarations.

use crate::fragment::Fragment;
use crate::metadata::Property;

/// Emit one `@Prop` field per property.
///
/// The caller removes the model-bound property before calling this.
pub fn define_props<'a>(props: impl IntoIterator<Item = &'a Property>) -> Vec<Fragment> {
    props
        .into_iter()
        .map(|prop| {
            let ty = prop.value_type();
            let constraint = ty
                .constructor()
                .map(|c| format!("[{}]", c))
                .unwrap_or_default();
            Fragment::line(format!(
                "@Prop({}) readonly {}!: {}",
                constraint,
                prop.name,
                ty.annotation()
            ))
        })
        .collect()
}
