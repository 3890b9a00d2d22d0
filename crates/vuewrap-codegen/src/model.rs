//! Two-way binding (`@Model`) declaration.

use crate::fragment::Fragment;
use crate::metadata::ResolvedModel;

/// Emit the `@Model` field for a resolved model, or nothing.
pub fn define_model(model: Option<ResolvedModel<'_>>) -> Vec<Fragment> {
    let Some(ResolvedModel { prop, event }) = model else {
        return Vec::new();
    };

    let ty = prop.value_type();
    let options = ty
        .constructor()
        .map(|c| format!(", {{ type: {} }}", c))
        .unwrap_or_default();

    vec![Fragment::line(format!(
        "@Model(\"{}\"{}) readonly {}!: {}",
        event.name,
        options,
        prop.name,
        ty.annotation()
    ))]
}
