//! Event listeners that re-emit native events on the Vue event bus.

use crate::config::EmitConfig;
use crate::fragment::Fragment;
use crate::metadata::Event;

/// Emit one prefixed listener per event.
pub fn define_events<'a>(
    events: impl IntoIterator<Item = &'a Event>,
    config: &EmitConfig,
) -> Vec<Fragment> {
    events
        .into_iter()
        .map(|event| {
            Fragment::line(format!(
                "{}(eventValue: any) {{ this.$emit(\"{}\", eventValue); }}",
                config.listener_name(&event.name),
                event.name
            ))
        })
        .collect()
}
